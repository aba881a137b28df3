//! Alert system for displaying success and error messages to users.
//!
//! Alerts replace the alert container in the base page layout through an
//! out-of-band swap, so endpoints can show a message without disturbing the
//! rest of the page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// A message shown to the user in the floating alert area at the bottom of the
/// page.
pub enum Alert {
    /// Confirmation that an operation completed.
    Success {
        /// The headline of the alert.
        message: String,
        /// Supporting detail shown below the headline.
        details: String,
    },
    /// Notification that an operation failed.
    Error {
        /// The headline of the alert.
        message: String,
        /// Supporting detail shown below the headline.
        details: String,
    },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (color_style, message, details) = match self {
            Alert::Success { message, details } => (
                "text-green-800 bg-green-50 dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        // Template adapted from https://flowbite.com/docs/components/alerts/
        html!(
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    role="alert"
                    class={ "flex items-start justify-between p-4 rounded-lg shadow " (color_style) }
                {
                    div
                    {
                        p class="text-sm font-medium" { (message) }

                        @if !details.is_empty() {
                            p class="mt-1 text-sm opacity-80" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Close"
                        class="ms-4 -my-1.5 rounded-lg p-1.5 text-sm font-medium
                            hover:bg-gray-100 dark:hover:bg-gray-700"
                        onclick="document.getElementById('alert-container').classList.add('hidden')"
                    {
                        "×"
                    }
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Alert::Success { .. } => StatusCode::OK,
            Alert::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, self.into_html()).into_response()
    }
}
