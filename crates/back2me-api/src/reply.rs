use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

use back2me_store::StoreError;

use crate::codec::{encode_failure, encode_success};

/// A JSON response body with its `success` flag already applied.
///
/// Business failures (taken email, bad password, unknown post) are reported
/// in-band with HTTP 200. Only a missing session (401) and internal faults
/// (500) change the status line.
#[derive(Debug)]
pub struct ApiReply {
    status: StatusCode,
    body: String,
}

impl ApiReply {
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match encode_success(body) {
            Ok(body) => Self {
                status: StatusCode::OK,
                body,
            },
            Err(e) => {
                error!("Failed to encode response: {}", e);
                Self::internal()
            }
        }
    }

    pub fn fail(error: impl AsRef<str>) -> Self {
        Self {
            status: StatusCode::OK,
            body: encode_failure(error.as_ref()),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body: encode_failure("Unauthorized"),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: encode_failure("Not found"),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: encode_failure("Internal server error"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl From<StoreError> for ApiReply {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmailTaken | StoreError::HandleTaken | StoreError::InvalidCredentials => {
                debug!("Request rejected: {}", err);
                Self::fail(err.to_string())
            }
            StoreError::LockPoisoned | StoreError::Credential(_) => {
                error!("Store failure: {}", err);
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_are_in_band() {
        let reply = ApiReply::from(StoreError::HandleTaken);
        assert_eq!(reply.status(), StatusCode::OK);
        assert!(reply.body().contains("Username already taken"));
        assert!(reply.body().contains("\"success\":false"));
    }

    #[test]
    fn poisoned_store_is_internal_error() {
        let reply = ApiReply::from(StoreError::LockPoisoned);
        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!reply.body().contains("poisoned"));
    }
}
