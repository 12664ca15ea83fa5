use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::notion::NotionError;

pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to load Notion content";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] NotionError),
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::BadRequest(message) => message.as_str(),
            ApiError::Upstream(err) => {
                // Detail stays in the server log.
                error!("{}", error_chain(err));
                UPSTREAM_FAILURE_MESSAGE
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    pub fn bad_request<T: ToString>(message: T) -> Self {
        ApiError::BadRequest(message.to_string())
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
