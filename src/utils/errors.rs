use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Authorization failures raised by the access guard.
///
/// The three 401 variants deliberately share one client-facing message so a
/// caller cannot distinguish a missing credential from a bad signature or an
/// expired token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header was presented.
    #[error("unauthorized access")]
    Missing,
    /// A header was presented but it is not a `Bearer <token>` pair.
    #[error("unauthorized access")]
    Malformed,
    /// Signature or expiry validation failed.
    #[error("unauthorized access")]
    InvalidOrExpired,
    /// Authenticated, but the role or self-match check failed.
    #[error("forbidden access")]
    Forbidden,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unprocessable(String),
    /// Store failures surface as an opaque 500; the underlying error is
    /// logged, never sent to the client.
    #[error("database failure")]
    Database(#[from] sqlx::Error),
    #[error("payment processor failure")]
    Payment(#[from] reqwest::Error),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Auth(AuthError::Forbidden) => StatusCode::FORBIDDEN,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Payment(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            match &self {
                AppError::Database(e) => error!(error = %e, "database failure"),
                AppError::Internal(e) => error!(error = %e, "internal error"),
                _ => error!(error = %self, "request failed"),
            }
        }

        let body = Json(json!({
            "error": true,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses() {
        assert_eq!(
            AppError::from(AuthError::Missing).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::Malformed).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::InvalidOrExpired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::Forbidden).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn unauthorized_message_is_uniform() {
        for err in [
            AuthError::Missing,
            AuthError::Malformed,
            AuthError::InvalidOrExpired,
        ] {
            assert_eq!(AppError::from(err).to_string(), "unauthorized access");
        }
        assert_eq!(
            AppError::from(AuthError::Forbidden).to_string(),
            "forbidden access"
        );
    }

    #[tokio::test]
    async fn error_body_shape() {
        let response = AppError::from(AuthError::Missing).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], serde_json::json!(true));
        assert_eq!(body["message"], "unauthorized access");
    }

    #[test]
    fn opaque_server_errors() {
        let err = AppError::Internal(anyhow::anyhow!("secret detail"));
        assert_eq!(err.to_string(), "internal server error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
