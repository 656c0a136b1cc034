//! Error handling for the storefront.
//!
//! Handlers return [`AppError`] and let the `IntoResponse` impl map it
//! to an HTTP status. Internal details are logged, never rendered.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application errors that can occur in route handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors with full detail; the client only sees a
        // generic message.
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = match status {
            StatusCode::NOT_FOUND => "Page not found",
            _ => "Something went wrong",
        };

        (status, body).into_response()
    }
}

/// Convenience alias for handler results.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = AppError::NotFound("/catalog/99".to_string());
        assert_eq!(err.to_string(), "Not found: /catalog/99");

        let err = AppError::Internal("session store unavailable".to_string());
        assert_eq!(err.to_string(), "Internal error: session store unavailable");
    }

    #[test]
    fn responses_use_the_mapped_status() {
        let not_found = AppError::NotFound("missing".to_string()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let internal = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
