use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::warn;
use thiserror::Error;

use crate::model::GatewayError;
use crate::web::models::{BodyError, ErrorBody};

pub const UPSTREAM_ERROR_DETAIL: &str = "Upstream API error";

#[derive(Debug, Error)]
pub enum ChatError {
    /// Request body did not match the expected shape.
    #[error("{0}")]
    Validation(String),

    /// Completion provider failed. The inner error is only ever logged.
    #[error("upstream failure: {0}")]
    Upstream(#[from] GatewayError),
}

impl ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChatError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ChatError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ChatError::Validation(msg) => msg.clone(),
            ChatError::Upstream(_) => UPSTREAM_ERROR_DETAIL.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}

impl From<BodyError> for ChatError {
    fn from(err: BodyError) -> Self {
        warn!("Rejected chat request: {}", err);
        ChatError::Validation(err.to_string())
    }
}
