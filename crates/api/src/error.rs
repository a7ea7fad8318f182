use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prsk_core::error::{CoreError, FieldError};
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `prsk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                err @ CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, err.to_string(), Vec::new())
                }
                CoreError::Validation { message, details } => {
                    (StatusCode::BAD_REQUEST, message, details)
                }
                CoreError::Conflict { message, details } => {
                    tracing::debug!(?details, "Conflict");
                    (StatusCode::CONFLICT, message, details)
                }
                CoreError::Unauthorized { message, details } => {
                    (StatusCode::UNAUTHORIZED, message, details)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_MESSAGE.to_string(),
                        Vec::new(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            status: status_name(status),
            message,
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Upper-snake reason phrase, e.g. `BAD_REQUEST` for 400.
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace([' ', '-'], "_")
}

/// Classify a sqlx error into an HTTP status, message, and field details.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on a `uq_` index map to 409 naming the guarded field.
/// - Foreign key violations map to 404 (the referenced row is gone).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, Vec<FieldError>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Resource not found".to_string(),
            Vec::new(),
        ),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    if constraint.starts_with("uq_") {
                        let field = prsk_db::unique_constraint_field(constraint).unwrap_or(constraint);
                        tracing::debug!(constraint, "Unique constraint violated");
                        return (
                            StatusCode::CONFLICT,
                            "Conflict detected".to_string(),
                            vec![FieldError::new(field, "Duplicate value.")],
                        );
                    }
                }
                // PostgreSQL foreign key violation
                Some("23503") => {
                    tracing::debug!(constraint = ?db_err.constraint(), "Foreign key violated");
                    return (
                        StatusCode::NOT_FOUND,
                        "Referenced artist not found".to_string(),
                        Vec::new(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
                Vec::new(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
                Vec::new(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_are_upper_snake() {
        assert_eq!(status_name(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(
            status_name(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL_SERVER_ERROR"
        );
        assert_eq!(status_name(StatusCode::NON_AUTHORITATIVE_INFORMATION), "NON_AUTHORITATIVE_INFORMATION");
    }
}
