//! The storage gateway for the ledger.
//!
//! [LedgerStore] is the seam between the [Recorder](crate::Recorder) and the
//! database. [SQLiteLedgerStore] is the production implementation.

mod sqlite;

pub use sqlite::SQLiteLedgerStore;

use crate::{
    Error,
    transaction::{NewTransaction, Total, Transaction, TransactionKind},
};

/// Handles the creation and retrieval of transactions.
///
/// Implementers do not validate their input, callers must only pass
/// transactions that came from [TransactionRequest::validate](crate::TransactionRequest::validate).
pub trait LedgerStore {
    /// Create the transaction table if it does not exist.
    ///
    /// Calling this more than once leaves the table and its rows unchanged.
    fn ensure_schema(&self) -> Result<(), Error>;

    /// Append a transaction and return it with its assigned ID.
    fn insert(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// The sum of the amounts of all transactions of `kind`, zero if there are none.
    fn sum_by_kind(&self, kind: TransactionKind) -> Result<Total, Error>;

    /// Every transaction, most recent date first.
    ///
    /// The order of transactions that share a date is unspecified.
    fn list_all(&self) -> Result<Vec<Transaction>, Error>;

    /// The number of stored transactions.
    fn count(&self) -> Result<u32, Error>;
}
