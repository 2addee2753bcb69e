//! Implements a struct that holds the state of the REST server.

use crate::{
    Error,
    store::{LedgerStore, SQLiteLedgerStore},
    transaction::Recorder,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validates, stores and reads back transactions.
    pub recorder: Recorder<SQLiteLedgerStore>,
}

impl AppState {
    /// Create a new [AppState] backed by the SQLite database in `store`.
    ///
    /// This function will create the transaction table if it does not exist
    /// yet. Existing rows are left untouched.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the database cannot be opened,
    /// or [Error::SqlError] if the table cannot be created.
    pub fn new(store: SQLiteLedgerStore) -> Result<Self, Error> {
        store.ensure_schema()?;

        Ok(Self {
            recorder: Recorder::new(store),
        })
    }
}
