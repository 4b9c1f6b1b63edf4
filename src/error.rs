use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use color_eyre::eyre::Report;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything the two endpoints can answer with, mapped 1:1 to an HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid debate ID")]
    InvalidDebateId,
    #[error("Invalid request payload")]
    InvalidPayload,
    #[error("Debate not found")]
    DebateNotFound,
    #[error("Debate must be finalized before voting")]
    DebateNotFinalized,
    #[error("You have already voted on this debate")]
    DuplicateVote,
    // Storage faults keep their report for the logs but only the generic
    // message crosses the wire.
    #[error("{message}")]
    Internal { message: &'static str, report: Report },
}

impl ApiError {
    pub fn internal(message: &'static str, report: Report) -> Self {
        Self::Internal { message, report }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidDebateId | ApiError::InvalidPayload | ApiError::DebateNotFinalized => {
                StatusCode::BAD_REQUEST
            }
            ApiError::DebateNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateVote => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal { message, report } = self {
            error!("{message}: {report:?}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
