//! # Error Handling
//!
//! Maps [`RollcallError`] onto HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`.
//!
//! | Error            | Status |
//! |------------------|--------|
//! | `NotFound`       | 404    |
//! | `Validation`     | 400    |
//! | `Authentication` | 401    |
//! | `Authorization`  | 403    |
//! | `Database`       | 500    |
//! | `Internal`       | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rollcall_core::errors::RollcallError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>` and use `?` on anything yielding
/// a [`RollcallError`] or an [`eyre::Report`].
#[derive(Debug)]
pub struct AppError(pub RollcallError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RollcallError::NotFound(_) => StatusCode::NOT_FOUND,
            RollcallError::Validation(_) => StatusCode::BAD_REQUEST,
            RollcallError::Authentication(_) => StatusCode::UNAUTHORIZED,
            RollcallError::Authorization(_) => StatusCode::FORBIDDEN,
            RollcallError::Database(_) | RollcallError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<RollcallError> for AppError {
    fn from(err: RollcallError) -> Self {
        AppError(err)
    }
}

/// Wraps a bare [`eyre::Report`] as a database failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RollcallError::Database(err))
    }
}

/// Maps a RollcallError to an HTTP response
pub fn map_error(err: RollcallError) -> Response {
    AppError(err).into_response()
}
