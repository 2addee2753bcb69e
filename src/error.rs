//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::ServerErrorPage, transaction::Field};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The ledger database could not be opened or created.
    ///
    /// The string holds the underlying error message for logging. The
    /// operation is not retried.
    #[error("the ledger storage is unavailable: {0}")]
    StorageUnavailable(String),

    /// A required form field was empty after trimming whitespace.
    #[error("the {0} field is required")]
    MissingField(Field),

    /// The amount was not a number, or was not greater than zero once rounded
    /// to cents.
    #[error("\"{0}\" is not a valid amount, enter a positive number")]
    InvalidAmount(String),

    /// The date was not a real calendar date in the format `YYYY-MM-DD`.
    #[error("\"{0}\" is not a valid date, use the format YYYY-MM-DD")]
    InvalidDate(String),

    /// An unhandled/unexpected SQL error, e.g. a constraint violation.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(sql_error, ref desc)
                if sql_error.code == rusqlite::ErrorCode::CannotOpen =>
            {
                let message = desc.clone().unwrap_or_else(|| sql_error.to_string());
                tracing::error!("could not open the ledger database: {message}");
                Error::StorageUnavailable(message)
            }
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::StorageUnavailable(_) => ServerErrorPage::STORAGE_UNAVAILABLE.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ServerErrorPage::GENERIC.into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingField(field) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "All fields are required".to_owned(),
                    details: format!("Enter a value for the {field} field."),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{amount}\" is not a valid amount. Enter a positive number, e.g. 12.50."
                    ),
                },
            ),
            Error::InvalidDate(date) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Invalid date".to_owned(),
                    details: format!(
                        "\"{date}\" is not a valid date. Use the format YYYY-MM-DD, e.g. 2024-03-01."
                    ),
                },
            ),
            Error::StorageUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Alert::Error {
                    message: "Storage unavailable".to_owned(),
                    details: "Could not connect to the ledger database. \
                        The transaction was not saved."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
