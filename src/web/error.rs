use crate::error::CricError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

/// Handler failure: either a request problem or an error from the flows.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Flow(CricError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<CricError> for ApiError {
    fn from(err: CricError) -> Self {
        ApiError::Flow(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Flow(err) => match err {
                CricError::Config { .. } => StatusCode::SERVICE_UNAVAILABLE,
                CricError::Connection { .. } | CricError::Auth { .. } | CricError::Api { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                CricError::Query { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                CricError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
                CricError::Io(_) | CricError::Format { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Flow(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        if code.is_server_error() {
            tracing::error!(status = code.as_u16(), error = %self.message(), "request failed");
        }
        let body = ErrorResponse {
            message: self.message(),
            status_code: code.as_u16(),
        };
        (code, Json(body)).into_response()
    }
}
