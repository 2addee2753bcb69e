//! Defines the route handler and views for the ledger page.
//!
//! The page holds the entry form, the summary readout and the transactions
//! table. The summary and table views are also sent as out-of-band swaps by
//! the submit endpoint.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, dollar_input_styles, loading_spinner,
    },
    store::SQLiteLedgerStore,
    transaction::{LedgerSnapshot, Recorder, Summary, Transaction, TransactionKind},
};

/// The ID of the element holding the summary readout.
pub(crate) const SUMMARY_ID: &str = "summary";
/// The ID of the element holding the transactions table.
pub(crate) const TRANSACTIONS_TABLE_ID: &str = "transactions-table";

fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "text-green-700 dark:text-green-300",
        TransactionKind::Expense => "text-red-700 dark:text-red-300",
    }
}

/// Renders the summary readout.
///
/// Set `swap_oob` when the view is sent in response to a form submission so
/// that htmx replaces the summary already on the page.
pub(crate) fn summary_view(summary: &Summary, swap_oob: bool) -> Markup {
    html! {
        p
            id=(SUMMARY_ID)
            hx-swap-oob=[swap_oob.then_some("true")]
            class="text-lg font-bold tabular-nums"
        {
            (summary)
        }
    }
}

/// Renders the table of transactions in the order given.
///
/// Set `swap_oob` when the view is sent in response to a form submission so
/// that htmx replaces the table already on the page.
pub(crate) fn transactions_table_view(transactions: &[Transaction], swap_oob: bool) -> Markup {
    html! {
        div
            id=(TRANSACTIONS_TABLE_ID)
            hx-swap-oob=[swap_oob.then_some("true")]
            class="w-full overflow-x-auto rounded"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
                        {
                            td class={ "px-6 py-4 text-right tabular-nums " (amount_class(transaction.kind)) }
                            {
                                (transaction.amount)
                            }
                            td class=(TABLE_CELL_STYLE) { (transaction.category) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                time datetime=(transaction.date) { (transaction.date) }
                            }
                            td class=(TABLE_CELL_STYLE) { (transaction.kind.label()) }
                        }
                    }

                    @if transactions.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="4" class="px-6 py-4 text-center"
                            {
                                "No transactions yet."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_form_view(today: Date) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="#alert-container"
            hx-target-error="#alert-container"
            class="w-full max-w-md space-y-4"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                // w-full needed to ensure input takes the full width when prefilled with a value
                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                input
                    name="category"
                    id="category"
                    type="text"
                    placeholder="e.g. Groceries"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date (YYYY-MM-DD)" }

                input
                    name="date"
                    id="date"
                    type="text"
                    placeholder="YYYY-MM-DD"
                    value=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for kind in TransactionKind::ALL {
                        @let id = format!("kind-{}", kind.as_str());

                        div class="flex-1"
                        {
                            input
                                type="radio"
                                name="kind"
                                id=(id)
                                value=(kind.as_str())
                                checked[kind == TransactionKind::default()]
                                class=(FORM_RADIO_INPUT_STYLE);

                            label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (kind.label()) }
                        }
                    }
                }
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (spinner) }
                " Add Transaction"
            }
        }
    }
}

fn ledger_view(snapshot: &LedgerSnapshot, today: Date) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-3xl space-y-6"
            {
                h1 class="text-2xl font-bold" { "Personal Finance Tracker" }

                (transaction_form_view(today))

                (summary_view(&snapshot.summary, false))

                (transactions_table_view(&snapshot.transactions, false))
            }
        }
    };

    base("Ledger", &[dollar_input_styles()], &content)
}

/// The state needed for the ledger page.
#[derive(Debug, Clone)]
pub struct LedgerPageState {
    /// Reads the summary and transactions.
    pub recorder: Recorder<SQLiteLedgerStore>,
}

impl FromRef<AppState> for LedgerPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            recorder: state.recorder.clone(),
        }
    }
}

/// Renders the ledger page with the current summary and transactions.
pub async fn get_ledger_page(State(state): State<LedgerPageState>) -> Result<Response, Error> {
    let snapshot = state
        .recorder
        .snapshot()
        .inspect_err(|error| tracing::error!("could not load the ledger: {error}"))?;

    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let today = OffsetDateTime::now_utc().to_offset(local_offset).date();

    Ok(ledger_view(&snapshot, today).into_response())
}
