//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`ElectionError`] HTTP-agnostic while giving every endpoint
//! the same failure contract: a status code per error category and the
//! human-readable message as a `text/plain` body.

use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{ElectionError, ErrorCode};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ElectionError>;

/// Body sent in place of internal failure details.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Transport status for an error category.
#[must_use]
pub const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &ElectionError) -> String {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(error = %error, "request failed with an internal error");
        INTERNAL_ERROR_MESSAGE.to_owned()
    } else {
        error.to_string()
    }
}

impl ResponseError for ElectionError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"));
        if let Some(id) = TraceId::current() {
            match HeaderValue::from_str(&id.to_string()) {
                Ok(value) => {
                    builder.insert_header((HeaderName::from_static(TRACE_ID_HEADER), value));
                }
                Err(err) => warn!(error = %err, "trace id is not a valid header value"),
            }
        }
        builder.body(client_message(self))
    }
}
