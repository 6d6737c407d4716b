//! Error type shared by the store and the resource controller.
//!
//! `DataPoolError` implements actix's `ResponseError`, so handlers return
//! `Result<HttpResponse, DataPoolError>` and propagate with `?`. Client errors
//! become `400`/`404` with a failure alert; anything else is logged and
//! answered with `500`.

use crate::alerts::Alert;
use crate::generator::GeneratorError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum DataPoolError {
    /// Rejected at the boundary; `key` becomes the `error.<key>` alert.
    #[error("{message}")]
    InvalidRequest { key: &'static str, message: String },

    #[error("DataPool not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] BlockingError),

    #[error("{0}")]
    Internal(String),
}

impl DataPoolError {
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        DataPoolError::InvalidRequest {
            key,
            message: message.into(),
        }
    }

    /// Short machine-readable key, used in the error alert header and body.
    pub fn key(&self) -> &'static str {
        match self {
            DataPoolError::InvalidRequest { key, .. } => *key,
            DataPoolError::NotFound(_) => "notfound",
            DataPoolError::Generator(GeneratorError::UnsupportedDataType(_)) => {
                "unsupporteddatatype"
            }
            DataPoolError::Generator(GeneratorError::InvalidParameter { .. }) => {
                "invalidparameter"
            }
            _ => "internal",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl ResponseError for DataPoolError {
    fn status_code(&self) -> StatusCode {
        match self {
            DataPoolError::InvalidRequest { .. } | DataPoolError::Generator(_) => {
                StatusCode::BAD_REQUEST
            }
            DataPoolError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }

        let mut response = HttpResponse::build(status);
        if status != StatusCode::NOT_FOUND {
            Alert::failure(self.key()).apply(&mut response);
        }
        response.json(ErrorBody {
            error: self.key(),
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            DataPoolError::invalid("idexists", "A new dataPool cannot already have an ID")
                .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DataPoolError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        let unsupported = DataPoolError::from(GeneratorError::UnsupportedDataType("z".into()));
        assert_eq!(unsupported.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(unsupported.key(), "unsupporteddatatype");
    }

    #[test]
    fn failure_alert_is_attached() {
        let response = DataPoolError::invalid("idexists", "already has an id").error_response();
        let headers = response.headers();
        assert_eq!(
            headers.get("X-dataPoolGeneratorApp-error").unwrap(),
            "error.idexists"
        );
        assert_eq!(
            headers.get("X-dataPoolGeneratorApp-params").unwrap(),
            "dataPool"
        );
    }

    #[test]
    fn unexpected_errors_are_internal() {
        let error = DataPoolError::Internal("lock poisoned".into());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.key(), "internal");
    }
}
