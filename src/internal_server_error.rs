//! Defines the template for the page shown when the server cannot handle a
//! request.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The content of the 500 Internal Server Error page.
///
/// `description` says what went wrong and `fix` tells the user what they can
/// do about it.
pub struct InternalServerError {
    pub description: String,
    pub fix: String,
}

impl Default for InternalServerError {
    fn default() -> Self {
        Self {
            description: "Something went wrong on our end.".to_owned(),
            fix: "Try again in a few moments or check the server logs.".to_owned(),
        }
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        let page = error_view("Internal Server Error", "500", &self.description, &self.fix);

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}
