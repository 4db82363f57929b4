//! Mapping from pipeline failures to HTTP responses.
//!
//! This is the outermost boundary of the request pipeline: every typed
//! failure becomes `{ "error": <category>, "details": <message> }` with the
//! status code the taxonomy prescribes.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;
use weathertrack_core::Error;

#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    details: String,
}

impl ApiError {
    fn category(&self) -> &'static str {
        match &self.0 {
            Error::Validation(_) => "Validation Failed",
            Error::InvalidIdentifier => "Invalid record ID",
            Error::NotFound => "Record Not Found",
            Error::LocationUnconfirmed => "Invalid Location",
            Error::ExternalService(_) => "Location Validation Failed",
            Error::Storage(_) => "Server Error",
            Error::Unhandled(_) => "Something went wrong!",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            Error::Validation(_) | Error::InvalidIdentifier => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::LocationUnconfirmed => StatusCode::NOT_FOUND,
            Error::ExternalService(_) | Error::Storage(_) | Error::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.0.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.category(),
            details: self.0.to_string(),
        })
    }
}

/// Body deserialization failures get the same 400 shape as schema failures
/// instead of actix's default plain-text response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::from(Error::Validation(format!("Invalid JSON body: {err}"))).into()
    })
}
