//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `deskpad_core` wiring end to end.
//! - Keep output deterministic for quick local sanity checks.

use deskpad_core::db::open_db_in_memory;
use deskpad_core::{CalcInput, Calculator, Operator, SqliteBlobStore, TodoEvent, TodoService};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("deskpad_core version={}", deskpad_core::core_version());

    let conn = open_db_in_memory()?;
    let mut todos = TodoService::new(SqliteBlobStore::new(&conn))?;
    let view = todos.handle(TodoEvent::SubmitNewItem {
        title: "smoke check".to_string(),
        due_date: None,
    })?;
    println!("todo_store items={}", view.len());

    let mut calc = Calculator::new();
    for input in [
        CalcInput::Digit('2'),
        CalcInput::Operator(Operator::Add),
        CalcInput::Digit('3'),
        CalcInput::Operator(Operator::Multiply),
        CalcInput::Digit('4'),
    ] {
        calc.apply(input);
    }
    println!("calculator 2+3*4={}", calc.apply(CalcInput::Equals));

    Ok(())
}
