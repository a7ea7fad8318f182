//! Audit metadata attached to every persisted row.
//!
//! Rows embed [`AuditFields`] instead of inheriting them; the database layer
//! flattens the four columns into each row struct. The write-side hooks are
//! expressed as SQL (`NOW()` plus the bound actor), so this module only owns
//! the shape and the fallback actor.

use serde::Serialize;

use crate::types::Timestamp;

/// Actor recorded on writes when no authenticated principal exists.
pub const DEFAULT_ACTOR: &str = "guest";

/// Created/updated timestamps and actors for a row.
///
/// Serialized as the `auditInfo` object of every resource response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    pub created_at: Timestamp,
    pub created_by: String,
    pub updated_at: Timestamp,
    pub updated_by: String,
}

/// Resolve the actor to stamp on a write, falling back to [`DEFAULT_ACTOR`]
/// when the configured value is blank.
pub fn resolve_actor(configured: &str) -> &str {
    let trimmed = configured.trim();
    if trimmed.is_empty() {
        DEFAULT_ACTOR
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_actor_falls_back_to_guest() {
        assert_eq!(resolve_actor(""), "guest");
        assert_eq!(resolve_actor("   "), "guest");
    }

    #[test]
    fn configured_actor_is_trimmed() {
        assert_eq!(resolve_actor(" batch-import "), "batch-import");
    }

    #[test]
    fn serializes_as_camel_case() {
        let now = chrono::Utc::now();
        let audit = AuditFields {
            created_at: now,
            created_by: "guest".into(),
            updated_at: now,
            updated_by: "guest".into(),
        };
        let json = serde_json::to_value(&audit).unwrap();
        assert_eq!(json["createdBy"], "guest");
        assert!(json["updatedAt"].is_string());
    }
}
