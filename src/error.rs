use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to API clients. `NotFound` maps to 404, every
/// validation failure to 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("could not parse date: {0}")]
    InvalidDateFormat(String),

    #[error("unknown visit kind index: {0}")]
    InvalidKind(usize),

    #[error("unknown doctor: {0}")]
    UnknownDoctor(u32),

    #[error("appointment time must start on a 15 minute boundary")]
    InvalidTimeSlot,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidDateFormat(_)
            | ApiError::InvalidKind(_)
            | ApiError::UnknownDoctor(_)
            | ApiError::InvalidTimeSlot => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
