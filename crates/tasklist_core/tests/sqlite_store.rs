mod common;

use common::RecordingShell;
use tasklist_core::db::migrations::{current_user_version, latest_version};
use tasklist_core::db::{open_db, open_db_in_memory, DbError};
use tasklist_core::{KeyValueStore, ManagerConfig, Outcome, SqliteStore, TaskListManager};

#[test]
fn in_memory_db_is_migrated_to_latest_version() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
}

#[test]
fn get_set_round_trip_and_upsert() {
    let store = SqliteStore::new(open_db_in_memory().unwrap());

    assert_eq!(store.get("todos").unwrap(), None);
    store.set("todos", "[]").unwrap();
    store.set("todos", "[{}]").unwrap();

    assert_eq!(store.get("todos").unwrap().as_deref(), Some("[{}]"));
    let rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn collection_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasks.sqlite3");

    let expected = {
        let store = SqliteStore::new(open_db(&db_path).unwrap());
        let mut manager =
            TaskListManager::open(store, RecordingShell::default(), ManagerConfig::default())
                .unwrap();
        let Outcome::Created(id) = manager.add("persist me") else {
            panic!("add should create a task");
        };
        manager.add("and me");
        manager.toggle_completed(&id);
        manager.tasks().to_vec()
    };

    let store = SqliteStore::new(open_db(&db_path).unwrap());
    let manager =
        TaskListManager::open(store, RecordingShell::default(), ManagerConfig::default()).unwrap();
    assert_eq!(manager.tasks(), expected.as_slice());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("future.sqlite3");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = open_db(&db_path).unwrap_err();
    let found = latest_version() + 1;
    assert!(matches!(
        err,
        DbError::SchemaTooNew { found: f, supported } if f == found && supported == latest_version()
    ));
    assert!(err.to_string().contains(&format!("schema version {found} is newer")));
}
