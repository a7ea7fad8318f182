//! User entity model and DTOs.
//!
//! The request DTOs carry the plaintext password; the repository inputs only
//! ever see the hash produced by the api crate.

use prsk_core::audit::AuditFields;
use prsk_core::types::DbId;
use prsk_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub user_name: String,
    pub password_hash: String,
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub is_deleted: bool,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "The user name is required."),
        length(max = 20, message = "Please enter the user name within 20 characters.")
    )]
    pub user_name: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "The password is required."),
        length(max = 20, message = "Please enter the password within 20 characters.")
    )]
    pub password: String,
}

/// Request body for updating a user. `password` must match the stored one.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(
        custom(function = "not_blank", message = "The user name must not be blank."),
        length(max = 20, message = "Please enter the user name within 20 characters.")
    )]
    pub user_name: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "The password is required."))]
    pub password: String,
}

/// Insert payload for [`crate::repositories::UserRepo::create`].
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub user_name: String,
    pub password_hash: String,
}

/// Column changes for [`crate::repositories::UserRepo::update`].
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub user_name: Option<String>,
}

/// User representation for API responses. Never carries the credential.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub user_name: String,
    pub audit_info: AuditFields,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            audit_info: user.audit,
        }
    }
}
