//! The API endpoints URIs.

/// The ledger page with the entry form, the summary and the transactions table.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route to submit a new transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
