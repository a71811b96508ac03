use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Every failure a handler can surface. Errors are never retried; they map
/// straight to a status code and a `{"detail": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Validation(String),
    #[error("{parent} with that id does not exist")]
    MissingParent { parent: &'static str },
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error(transparent)]
    Database(sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return match db_err.constraint() {
                    Some("users_email_key") => ApiError::Conflict("email already registered"),
                    Some("products_title_key") => {
                        ApiError::Conflict("product with that title already exists")
                    }
                    _ => ApiError::Conflict("already exists"),
                };
            }
            if db_err.is_foreign_key_violation() {
                return ApiError::Conflict("still referenced by other rows");
            }
        }
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::MissingParent { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parent_message_is_entity_specific() {
        let err = ApiError::MissingParent { parent: "company" };
        assert_eq!(err.to_string(), "company with that id does not exist");
        let err = ApiError::MissingParent { parent: "product" };
        assert_eq!(err.to_string(), "product with that id does not exist");
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::MissingParent { parent: "company" }
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("product").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("email already registered")
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn invalid_credentials_uses_the_single_auth_message() {
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid Credentials");
    }
}
