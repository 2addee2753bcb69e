//! Implements a SQLite backed ledger store.
use rusqlite::{Connection, OpenFlags};

use crate::{
    Error,
    store::LedgerStore,
    transaction::{
        MAX_AMOUNT_CENTS, NewTransaction, Total, Transaction, TransactionKind,
        map_transaction_row,
    },
};

/// Stores transactions in a SQLite database.
///
/// No connection is kept between calls. Each operation opens its own
/// connection and drops it before returning, whether or not the operation
/// succeeded.
#[derive(Debug, Clone)]
pub struct SQLiteLedgerStore {
    db_path: String,
}

impl SQLiteLedgerStore {
    /// Create a store for the database at `db_path`.
    ///
    /// `db_path` may be a file path or a SQLite URI such as
    /// `file:ledger?mode=memory&cache=shared`. The file is created on first use.
    pub fn new(db_path: &str) -> Self {
        Self {
            db_path: db_path.to_owned(),
        }
    }

    /// The path or URI of the database.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection, Error> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        Connection::open_with_flags(&self.db_path, flags).map_err(|error| {
            tracing::error!("could not open the ledger database {}: {error}", self.db_path);
            Error::StorageUnavailable(error.to_string())
        })
    }
}

impl LedgerStore for SQLiteLedgerStore {
    fn ensure_schema(&self) -> Result<(), Error> {
        let connection = self.connect()?;

        connection.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount INTEGER NOT NULL CHECK (amount > 0 AND amount <= {MAX_AMOUNT_CENTS}),
                category TEXT NOT NULL CHECK (category <> ''),
                date TEXT NOT NULL,
                kind TEXT NOT NULL CHECK (kind IN ('income', 'expense'))
                )"
            ),
            (),
        )?;

        // Used by the date ordering of the transactions table.
        connection.execute(
            "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
            (),
        )?;

        Ok(())
    }

    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::StorageUnavailable] if the database cannot be opened,
    /// - or [Error::SqlError] if a constraint failed or there is some other SQL error.
    fn insert(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.connect()?;

        let transaction = connection
            .prepare(
                "INSERT INTO \"transaction\" (amount, category, date, kind)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, amount, category, date, kind",
            )?
            .query_row(
                (
                    transaction.amount,
                    transaction.category,
                    transaction.date,
                    transaction.kind,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    fn sum_by_kind(&self, kind: TransactionKind) -> Result<Total, Error> {
        let connection = self.connect()?;

        let total = connection.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM \"transaction\" WHERE kind = ?1",
            (kind,),
            |row| row.get(0),
        )?;

        Ok(total)
    }

    fn list_all(&self) -> Result<Vec<Transaction>, Error> {
        let connection = self.connect()?;

        let transactions = connection
            .prepare(
                "SELECT id, amount, category, date, kind FROM \"transaction\" ORDER BY date DESC",
            )?
            .query_map((), map_transaction_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    fn count(&self) -> Result<u32, Error> {
        let connection = self.connect()?;

        connection
            .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
                row.get(0)
            })
            .map_err(|error| error.into())
    }
}
