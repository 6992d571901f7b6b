//! Client error types.

use ledgerdesk_core::ValidationError;
use ledgerdesk_shared::AppError;
use thiserror::Error;

/// Result type alias using `ClientError`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while talking to the accounting API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response had the wrong shape or carried an invalid value.
    #[error("invalid response: {0}")]
    Validation(#[from] ValidationError),

    /// The API answered 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The API answered with another non-success status.
    #[error("API returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, or the reason phrase when empty.
        message: String,
    },
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(e) => Self::Network(e.to_string()),
            ClientError::Validation(e) => e.into(),
            ClientError::NotFound(what) => Self::NotFound(what),
            ClientError::Status { status, message } => Self::Upstream { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdesk_shared::types::{PartyId, TransactionId};

    #[test]
    fn test_maps_into_app_error() {
        let err: AppError = ClientError::NotFound("/api/dashboard".into()).into();
        assert_eq!(err.status_code(), 404);

        let err: AppError = ClientError::Status {
            status: 503,
            message: "maintenance".into(),
        }
        .into();
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");

        let err: AppError =
            ClientError::Validation(ValidationError::MalformedPayload("eof".into())).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_unknown_party_is_not_found() {
        let err: AppError = ClientError::Validation(ValidationError::UnknownParty {
            transaction: TransactionId::new(4),
            party: PartyId::new(9),
        })
        .into();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
