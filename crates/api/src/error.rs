use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use trainer_core::error::CoreError;
use trainer_db::StoreError;

use crate::views::pages::{IssuePage, NotFoundPage};
use crate::views::render_page;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`StoreError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to render the not-found or issue page with
/// the mapped status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trainer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A catalog error from `trainer_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Malformed or missing request fields.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The admin credential check failed.
    #[error("Denied")]
    Denied,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";
const DENIED_MESSAGE: &str = "Not authorized";

impl AppError {
    /// HTTP status and client-facing message for this error.
    ///
    /// Internal details are logged here and replaced with a generic
    /// message.
    fn classify(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            AppError::Store(store) => classify_store_error(store),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Denied => (StatusCode::UNAUTHORIZED, DENIED_MESSAGE.to_string()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();

        if status == StatusCode::NOT_FOUND {
            return (status, render_page(&NotFoundPage::new())).into_response();
        }

        let page = IssuePage::new(status, message);
        (status, render_page(&page)).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a catalog error into an HTTP status and message.
///
/// - `NotFound` maps to 404.
/// - `DuplicateName` maps to 409.
/// - `Invalid` maps to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, String) {
    match err {
        StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        StoreError::DuplicateName(name) => (
            StatusCode::CONFLICT,
            format!("A character named '{name}' already exists"),
        ),
        StoreError::Invalid(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
        StoreError::AmbiguousResult { .. } => {
            tracing::error!(error = %err, "Catalog consistency error");
            internal()
        }
        StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "Catalog store unavailable");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Catalog store error");
            internal()
        }
    }
}
