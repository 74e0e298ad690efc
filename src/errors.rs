use axum::http::StatusCode;
use thiserror::Error;

/// Failures at the upstream data boundary.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("no rows returned for {context}")]
    EmptyResult { context: String },
    #[error("missing expected field `{field}` in upstream response")]
    Schema { field: &'static str },
}

impl DataError {
    pub fn empty(context: impl Into<String>) -> Self {
        Self::EmptyResult {
            context: context.into(),
        }
    }

    pub fn schema(field: &'static str) -> Self {
        Self::Schema { field }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        Self::bad_gateway(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
