use serde::Serialize;

use crate::types::DbId;

/// A single field-level problem attached to an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found for id: {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("{message}")]
    Conflict {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("{message}")]
    Unauthorized {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Validation failure on a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: "Validation failed".to_string(),
            details: vec![FieldError::new(field, message)],
        }
    }

    /// Uniqueness conflict on a single field (or field combination).
    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            message: "Conflict detected".to_string(),
            details: vec![FieldError::new(field, message)],
        }
    }

    pub fn unauthorized(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: "Authentication failed".to_string(),
            details: vec![FieldError::new(field, message)],
        }
    }

    /// Field-level details carried by the error, empty for variants without any.
    pub fn details(&self) -> &[FieldError] {
        match self {
            Self::Validation { details, .. }
            | Self::Conflict { details, .. }
            | Self::Unauthorized { details, .. } => details,
            Self::NotFound { .. } | Self::Internal(_) => &[],
        }
    }
}
