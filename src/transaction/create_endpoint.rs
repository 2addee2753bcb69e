use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::html;

use crate::{
    AppState,
    alert::Alert,
    store::SQLiteLedgerStore,
    transaction::{
        Recorder, TransactionRequest,
        ledger_page::{summary_view, transactions_table_view},
    },
};

/// The state needed for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// Validates and stores submitted transactions.
    pub recorder: Recorder<SQLiteLedgerStore>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            recorder: state.recorder.clone(),
        }
    }
}

/// A route handler for recording a new transaction.
///
/// Once the transaction is stored the response holds a success alert plus the
/// refreshed summary and transactions table as out-of-band swaps. If the
/// refresh fails the views are left as they are and a second alert asks the
/// user to reload. If the transaction is not stored the response holds an
/// error alert and nothing on the page besides the alert changes.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(request): Form<TransactionRequest>,
) -> Response {
    let submission = match state.recorder.submit(&request) {
        Ok(submission) => submission,
        Err(error) => return error.into_alert_response(),
    };

    let alert = Alert::Success {
        message: "Transaction added successfully".to_owned(),
        details: format!(
            "{} of ${} for {} on {}.",
            submission.transaction.kind.label(),
            submission.transaction.amount,
            submission.transaction.category,
            submission.transaction.date
        ),
    };

    let views = match submission.snapshot {
        Ok(snapshot) => html! {
            (summary_view(&snapshot.summary, true))
            (transactions_table_view(&snapshot.transactions, true))
        },
        Err(_) => Alert::Error {
            message: "Could not refresh the ledger".to_owned(),
            details: "The transaction was saved, reload the page to see it. \
                Do not submit it again."
                .to_owned(),
        }
        .into_html(),
    };

    (
        StatusCode::CREATED,
        html! {
            (alert.into_html())
            (views)
        },
    )
        .into_response()
}
