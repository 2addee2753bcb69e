//! The full page shown when the server cannot render the ledger.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::html::error_view;

/// A failure that the user cannot fix by changing their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerErrorPage {
    /// What went wrong, shown as the page headline.
    pub description: &'static str,
    /// What the user can do about it.
    pub fix: &'static str,
}

impl ServerErrorPage {
    /// Shown for errors that are only meant for the server logs.
    pub const GENERIC: ServerErrorPage = ServerErrorPage {
        description: "Sorry, something went wrong.",
        fix: "Try again later or check the server logs.",
    };

    /// Shown when the ledger database cannot be opened.
    pub const STORAGE_UNAVAILABLE: ServerErrorPage = ServerErrorPage {
        description: "Storage unavailable.",
        fix: "Could not open the ledger database. Check that the database path is \
            correct and writable, then reload the page.",
    };

    fn into_html(self) -> Markup {
        error_view("Internal Server Error", "500", self.description, self.fix)
    }
}

impl IntoResponse for ServerErrorPage {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

/// Route handler for the generic error page.
pub async fn get_internal_server_error_page() -> Response {
    ServerErrorPage::GENERIC.into_response()
}
