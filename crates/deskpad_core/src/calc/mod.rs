//! Single-accumulator calculator state machine.
//!
//! # Responsibility
//! - Accumulate an input buffer, a pending operator and a previous value.
//! - Emit the display string after every input.
//!
//! # Invariants
//! - At most one operator is pending at a time; a second operator before
//!   "equals" first resolves the pending operation (chained evaluation).
//! - Division by zero resets all state and leaves the error indicator on the
//!   display until the next input.

use log::debug;

/// Display value shown after a division by zero.
pub const ERROR_DISPLAY: &str = "Error";

const RESULT_MAX_FRACTION_DIGITS: usize = 10;

/// Supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Remainder with the dividend's sign, not normalized modulo.
    Remainder,
}

impl Operator {
    /// Maps an operator symbol to its variant; anything else is unsupported.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Remainder => lhs % rhs,
        }
    }
}

/// Semantic calculator input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcInput {
    Digit(char),
    Decimal,
    Operator(Operator),
    Clear,
    Equals,
    Backspace,
}

impl CalcInput {
    /// Maps a raw keyboard key to a calculator input.
    ///
    /// Digits and `.` map directly; `+ - * / %` select operators; `Enter`
    /// evaluates, `Escape` clears, `Backspace` deletes. Unknown keys map to
    /// `None` and are ignored by the caller.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if ch.is_ascii_digit() {
                return Some(Self::Digit(ch));
            }
            if ch == '.' {
                return Some(Self::Decimal);
            }
            if let Some(op) = Operator::from_symbol(ch) {
                return Some(Self::Operator(op));
            }
            return None;
        }
        match key {
            "Enter" => Some(Self::Equals),
            "Escape" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => None,
        }
    }
}

/// Four-function calculator with operator chaining.
///
/// One instance is owned per session; every method runs to completion
/// synchronously and the display string is readable afterwards.
#[derive(Debug, Clone)]
pub struct Calculator {
    current_input: String,
    previous_value: Option<f64>,
    operator: Option<Operator>,
    pending_reset: bool,
    display: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            current_input: String::new(),
            previous_value: None,
            operator: None,
            pending_reset: false,
            display: "0".to_string(),
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches one input event and returns the resulting display string.
    pub fn apply(&mut self, input: CalcInput) -> &str {
        match input {
            CalcInput::Digit(digit) => self.input_digit(digit),
            CalcInput::Decimal => self.input_decimal(),
            CalcInput::Operator(op) => self.input_operator(op),
            CalcInput::Clear => self.clear(),
            CalcInput::Equals => self.calculate(),
            CalcInput::Backspace => self.backspace(),
        }
        self.display()
    }

    /// Current display string.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Appends a digit to the input buffer.
    ///
    /// Starts a fresh buffer when a reset is pending. A second leading `'0'`
    /// is rejected; non-digit characters are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            debug!("event=calc_input module=calc status=skip reason=non_digit");
            return;
        }
        self.take_pending_reset();
        if digit == '0' && self.current_input == "0" {
            return;
        }
        self.current_input.push(digit);
        self.display = self.current_input.clone();
    }

    /// Appends the decimal point; a second point is ignored.
    ///
    /// An empty buffer becomes `"0"` first, so the display reads `"0."`.
    pub fn input_decimal(&mut self) {
        self.take_pending_reset();
        if self.current_input.contains('.') {
            return;
        }
        if self.current_input.is_empty() {
            self.current_input.push('0');
        }
        self.current_input.push('.');
        self.display = self.current_input.clone();
    }

    /// Selects a pending operator.
    ///
    /// A previously pending operator is resolved first (chained evaluation)
    /// unless the buffer is in a post-operator reset state. The buffered
    /// operand becomes the accumulator; an unparseable buffer counts as 0.
    pub fn input_operator(&mut self, op: Operator) {
        if self.operator.is_some() && !self.pending_reset {
            self.calculate();
        }
        self.previous_value = Some(self.parsed_input());
        self.operator = Some(op);
        self.pending_reset = true;
    }

    /// Resolves the pending operation, if any.
    ///
    /// Division by zero resets all state and shows the error indicator; the
    /// next digit starts a fresh entry. Otherwise the formatted result
    /// becomes the new input buffer and the accumulator clears.
    pub fn calculate(&mut self) {
        let (Some(op), Some(previous)) = (self.operator, self.previous_value) else {
            return;
        };

        let operand = self.parsed_input();
        if op == Operator::Divide && operand == 0.0 {
            self.reset_state();
            self.display = ERROR_DISPLAY.to_string();
            debug!("event=calc_evaluate module=calc status=error error_code=divide_by_zero");
            return;
        }

        let formatted = format_result(op.apply(previous, operand));
        self.current_input = formatted.clone();
        self.display = formatted;
        self.previous_value = None;
        self.operator = None;
        self.pending_reset = true;
    }

    /// Resets all state; the display shows `"0"`.
    pub fn clear(&mut self) {
        self.reset_state();
        self.display = "0".to_string();
    }

    /// Removes the last character of the input buffer; an emptied buffer
    /// becomes `"0"`.
    pub fn backspace(&mut self) {
        self.current_input.pop();
        if self.current_input.is_empty() {
            self.current_input.push('0');
        }
        self.display = self.current_input.clone();
    }

    fn take_pending_reset(&mut self) {
        if self.pending_reset {
            self.current_input.clear();
            self.pending_reset = false;
        }
    }

    fn parsed_input(&self) -> f64 {
        self.current_input.parse::<f64>().unwrap_or(0.0)
    }

    fn reset_state(&mut self) {
        self.current_input.clear();
        self.previous_value = None;
        self.operator = None;
        self.pending_reset = false;
    }
}

/// Formats an evaluation result for display.
///
/// Integral values render without a fractional part; everything else renders
/// with at most [`RESULT_MAX_FRACTION_DIGITS`] fractional digits, trailing
/// zeros stripped.
fn format_result(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{value}");
    }
    let fixed = format!("{value:.prec$}", prec = RESULT_MAX_FRACTION_DIGITS);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
