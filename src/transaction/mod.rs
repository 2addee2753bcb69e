//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its money and kind types
//! - `TransactionRequest` validation and the `Recorder` that stores requests
//! - View handlers for the ledger page and the submit endpoint

mod amount;
mod core;
mod create_endpoint;
mod kind;
mod ledger_page;
mod recorder;
mod request;
mod summary;

pub use amount::{Amount, MAX_AMOUNT_CENTS, Total};
pub use core::{NewTransaction, Transaction, map_transaction_row};
pub use create_endpoint::create_transaction_endpoint;
pub use kind::TransactionKind;
pub use ledger_page::get_ledger_page;
pub use recorder::{LedgerSnapshot, Recorder, Submission};
pub use request::{Field, TransactionRequest, parse_date};
pub use summary::Summary;
