//! Error type shared by every API handler.
//!
//! Handlers return `Result<HttpResponse, ApiError>`; actix turns the error into
//! a plain-text response through the `ResponseError` impl below. Clients only
//! look at the status code and show a static message.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::error::SchemaError;
use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl From<SchemaError> for ApiError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::Decode(_) | SchemaError::Encode(_) => ApiError::BadRequest(err.to_string()),
            SchemaError::IllegalTransition { .. } | SchemaError::ReadOnly(_) => {
                ApiError::Conflict(err.to_string())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        HttpResponse::build(status).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::policy::{PolicyAction, VersionStatus};

    #[test]
    fn schema_errors_map_to_client_statuses() {
        let decode: ApiError = SchemaError::Decode("eof".into()).into();
        assert_eq!(decode.status_code(), StatusCode::BAD_REQUEST);

        let transition: ApiError = SchemaError::IllegalTransition {
            from: VersionStatus::Approved,
            action: PolicyAction::Submit,
        }
        .into();
        assert_eq!(transition.status_code(), StatusCode::CONFLICT);

        let frozen: ApiError = SchemaError::ReadOnly(VersionStatus::Approved).into();
        assert_eq!(frozen.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_errors_are_unavailable() {
        let err = ApiError::from(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
