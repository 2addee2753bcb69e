use std::sync::atomic::{AtomicUsize, Ordering};

use rusqlite::{Connection, OpenFlags};

use crate::store::{LedgerStore, SQLiteLedgerStore};

/// A ledger in a named, shared-cache in-memory database.
///
/// The store opens a new connection for every call, so the fixture keeps one
/// connection open to stop SQLite from discarding the database in between.
pub(crate) struct TestLedger {
    pub store: SQLiteLedgerStore,
    anchor: Connection,
}

impl TestLedger {
    #[track_caller]
    pub fn new() -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let uri = format!("file:ledger_test_{id}?mode=memory&cache=shared");

        let anchor = Connection::open_with_flags(
            &uri,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )
        .expect("Could not open test database");

        let store = SQLiteLedgerStore::new(&uri);
        store
            .ensure_schema()
            .expect("Could not create transaction table");

        Self { store, anchor }
    }

    /// The connection keeping the database alive, for inspecting it directly.
    pub fn anchor(&self) -> &Connection {
        &self.anchor
    }
}
