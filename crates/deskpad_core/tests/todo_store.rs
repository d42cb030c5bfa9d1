use deskpad_core::db::{open_db, open_db_in_memory};
use deskpad_core::{
    BlobStore, SqliteBlobStore, StoreError, TodoItem, TodoStore, TODOS_BLOB_KEY,
};
use rusqlite::Connection;
use uuid::Uuid;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn store(conn: &Connection) -> TodoStore<SqliteBlobStore<'_>> {
    TodoStore::new(SqliteBlobStore::new(conn))
}

fn item(title: &str, order: i64) -> TodoItem {
    TodoItem::with_id(Uuid::new_v4(), title, None, order)
}

#[test]
fn load_on_missing_key_yields_empty_collection() {
    let conn = setup();
    let mut todos = store(&conn);

    todos.load().unwrap();
    assert!(todos.get_all().is_empty());
}

#[test]
fn add_then_reload_round_trips_identically() {
    let conn = setup();
    let mut todos = store(&conn);
    todos.add(item("second", 20)).unwrap();
    todos.add(item("first", 10)).unwrap();
    let written = todos.get_all();

    let mut reloaded = store(&conn);
    reloaded.load().unwrap();

    assert_eq!(reloaded.get_all(), written);
    assert_eq!(reloaded.get_all()[0].title, "first");
    assert_eq!(reloaded.get_all()[1].title, "second");
}

#[test]
fn load_recovers_from_malformed_blob_as_empty() {
    let conn = setup();
    SqliteBlobStore::new(&conn)
        .write(TODOS_BLOB_KEY, b"{not json at all")
        .unwrap();

    let mut todos = store(&conn);
    todos.load().unwrap();
    assert!(todos.get_all().is_empty());
}

#[test]
fn collection_stays_sorted_by_order_after_mutations() {
    let conn = setup();
    let mut todos = store(&conn);
    todos.add(item("c", 30)).unwrap();
    todos.add(item("a", 10)).unwrap();
    todos.add(item("b", 20)).unwrap();

    let titles: Vec<_> = todos.get_all().iter().map(|i| i.title.clone()).collect();
    assert_eq!(titles, ["a", "b", "c"]);

    let mut moved = todos.get_all()[2].clone();
    moved.order = 5;
    todos.update(moved).unwrap();

    let titles: Vec<_> = todos.get_all().iter().map(|i| i.title.clone()).collect();
    assert_eq!(titles, ["c", "a", "b"]);
}

#[test]
fn add_rejects_duplicate_id() {
    let conn = setup();
    let mut todos = store(&conn);
    let original = item("once", 1);
    todos.add(original.clone()).unwrap();

    let duplicate = TodoItem::with_id(original.id, "twice", None, 2);
    let err = todos.add(duplicate).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id == original.id));
    assert_eq!(todos.get_all().len(), 1);
}

#[test]
fn update_replaces_matching_item() {
    let conn = setup();
    let mut todos = store(&conn);
    let original = item("draft", 1);
    todos.add(original.clone()).unwrap();

    let mut edited = original.clone();
    edited.title = "final".to_string();
    edited.completed = true;
    todos.update(edited).unwrap();

    let loaded = todos.get_by_id(original.id).unwrap();
    assert_eq!(loaded.title, "final");
    assert!(loaded.completed);
}

#[test]
fn update_unknown_id_is_silent_noop_without_write() {
    let conn = setup();
    let blob = SqliteBlobStore::new(&conn);
    let mut todos = store(&conn);
    todos.add(item("kept", 1)).unwrap();
    let blob_before = blob.read(TODOS_BLOB_KEY).unwrap();

    todos.update(item("ghost", 9)).unwrap();

    assert_eq!(todos.get_all().len(), 1);
    assert_eq!(blob.read(TODOS_BLOB_KEY).unwrap(), blob_before);
}

#[test]
fn update_rejects_empty_title_keeping_stored_one() {
    let conn = setup();
    let mut todos = store(&conn);
    let original = item("keep me", 1);
    todos.add(original.clone()).unwrap();

    let mut blanked = original.clone();
    blanked.title = "   ".to_string();
    let err = todos.update(blanked).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let mut reloaded = store(&conn);
    reloaded.load().unwrap();
    assert_eq!(reloaded.get_by_id(original.id).unwrap().title, "keep me");
}

#[test]
fn remove_deletes_item_and_unknown_id_is_noop() {
    let conn = setup();
    let mut todos = store(&conn);
    let kept = item("kept", 1);
    let gone = item("gone", 2);
    todos.add(kept.clone()).unwrap();
    todos.add(gone.clone()).unwrap();

    todos.remove(gone.id).unwrap();
    todos.remove(Uuid::new_v4()).unwrap();

    let mut reloaded = store(&conn);
    reloaded.load().unwrap();
    let remaining = reloaded.get_all();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

#[test]
fn reorder_assigns_positional_order_keys() {
    let conn = setup();
    let mut todos = store(&conn);
    let a = item("a", 10);
    let b = item("b", 20);
    let c = item("c", 30);
    todos.add(a.clone()).unwrap();
    todos.add(b.clone()).unwrap();
    todos.add(c.clone()).unwrap();

    todos.reorder(&[c.id, a.id, b.id]).unwrap();

    let all = todos.get_all();
    let ids: Vec<_> = all.iter().map(|i| i.id).collect();
    let orders: Vec<_> = all.iter().map(|i| i.order).collect();
    assert_eq!(ids, [c.id, a.id, b.id]);
    assert_eq!(orders, [0, 1, 2]);
}

// The supplied sequence is authoritative: unmentioned items are dropped and
// unknown ids are skipped. A partial sequence shrinking the store is the
// intended (if surprising) contract.
#[test]
fn reorder_treats_sequence_as_authoritative() {
    let conn = setup();
    let mut todos = store(&conn);
    let a = item("a", 10);
    let b = item("b", 20);
    let c = item("c", 30);
    todos.add(a.clone()).unwrap();
    todos.add(b.clone()).unwrap();
    todos.add(c.clone()).unwrap();

    todos.reorder(&[b.id, Uuid::new_v4()]).unwrap();

    let mut reloaded = store(&conn);
    reloaded.load().unwrap();
    let remaining = reloaded.get_all();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b.id);
    assert_eq!(remaining[0].order, 0);
}

#[test]
fn reorder_keeps_first_occurrence_of_duplicate_ids() {
    let conn = setup();
    let mut todos = store(&conn);
    let a = item("a", 10);
    let b = item("b", 20);
    todos.add(a.clone()).unwrap();
    todos.add(b.clone()).unwrap();

    todos.reorder(&[b.id, b.id, a.id]).unwrap();

    let all = todos.get_all();
    let ids: Vec<_> = all.iter().map(|i| i.id).collect();
    assert_eq!(ids, [b.id, a.id]);
    assert_eq!(all[0].order, 0);
    assert_eq!(all[1].order, 1);
}

#[test]
fn get_all_returns_defensive_copy() {
    let conn = setup();
    let mut todos = store(&conn);
    todos.add(item("stable", 1)).unwrap();

    let mut copy = todos.get_all();
    copy[0].title = "mutated".to_string();
    copy.clear();

    assert_eq!(todos.get_all().len(), 1);
    assert_eq!(todos.get_all()[0].title, "stable");
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deskpad.db");

    let conn = open_db(&path).unwrap();
    let mut todos = store(&conn);
    todos.add(item("persisted", 7)).unwrap();
    let written = todos.get_all();
    drop(todos);
    drop(conn);

    let conn = open_db(&path).unwrap();
    let mut reloaded = store(&conn);
    reloaded.load().unwrap();
    assert_eq!(reloaded.get_all(), written);
}
