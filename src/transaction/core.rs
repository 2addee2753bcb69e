//! Defines the core data models for transactions.

use rusqlite::Row;
use time::Date;

use crate::{
    database_id::TransactionId,
    transaction::{Amount, TransactionKind},
};

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are only created through [Recorder::submit](crate::Recorder::submit)
/// and are never edited or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID assigned by the database.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: Amount,
    /// A free-form label, e.g. "Groceries".
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// Whether money was earned or spent.
    pub kind: TransactionKind,
}

/// A validated transaction that has not been stored yet.
///
/// Create one from user input with [TransactionRequest::validate](crate::TransactionRequest::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The amount of money spent or earned.
    pub amount: Amount,
    /// The trimmed, non-empty category label.
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// Whether money was earned or spent.
    pub kind: TransactionKind,
}

/// Map a database row to a Transaction.
///
/// Expects the columns `id, amount, category, date, kind` in that order.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let date = row.get(3)?;
    let kind = row.get(4)?;

    Ok(Transaction {
        id,
        amount,
        category,
        date,
        kind,
    })
}
