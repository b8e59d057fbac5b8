//! Mapping from core errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::path::PathServiceError;
use crate::store::StoreError;

use super::dto::ErrorResponse;

/// Application error type.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Inconsistent(_) | DomainError::EmptyLine => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::StationNotFound(_) | StoreError::LineNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            StoreError::StationInUse { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            StoreError::Domain(e) => AppError::from(e),
        }
    }
}

impl From<PathServiceError> for AppError {
    fn from(e: PathServiceError) -> Self {
        match e {
            PathServiceError::Path(e) => AppError::BadRequest {
                message: e.to_string(),
            },
            PathServiceError::Store(e) => AppError::from(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};
    use crate::path::PathError;

    #[test]
    fn topology_errors_are_bad_requests() {
        let err = AppError::from(DomainError::CannotAddSection("neither station is on the line"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            "cannot add section: neither station is on the line"
        );

        let err = AppError::from(StoreError::Domain(DomainError::CannotDeleteSection(
            "line must keep at least one section",
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn inconsistency_is_internal() {
        let err = AppError::from(DomainError::Inconsistent(StationId(3)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err = AppError::from(DomainError::EmptyLine);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_entities_are_not_found() {
        let err = AppError::from(StoreError::LineNotFound(LineId(2)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "line 2 not found");

        let err = AppError::from(PathServiceError::Store(StoreError::StationNotFound(
            StationId(5),
        )));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn path_errors_are_bad_requests() {
        let err = AppError::from(PathServiceError::Path(PathError::Unreachable(
            StationId(1),
            StationId(2),
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            "cannot find path: stations 1 and 2 are not connected"
        );
    }

    #[test]
    fn into_response_uses_status() {
        let response = AppError::NotFound {
            message: "line 9 not found".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
