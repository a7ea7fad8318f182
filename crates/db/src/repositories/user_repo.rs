//! Repository for the `users` table.

use prsk_core::pagination::PageRequest;
use prsk_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_name, password_hash, \
    created_at, created_by, updated_at, updated_by, is_deleted";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateUser,
        actor: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_name, password_hash, created_by, updated_by)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.user_name)
            .bind(&input.password_hash)
            .bind(actor)
            .fetch_one(executor)
            .await
    }

    /// Find a user by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND NOT is_deleted");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a user by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find the live user holding `user_name`, if any.
    pub async fn find_by_user_name(
        executor: impl PgExecutor<'_>,
        user_name: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_name = $1 AND NOT is_deleted");
        sqlx::query_as::<_, User>(&query)
            .bind(user_name)
            .fetch_optional(executor)
            .await
    }

    /// List one page of live users ordered by user name, then ID.
    pub async fn list_page(
        executor: impl PgExecutor<'_>,
        page: PageRequest,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE NOT is_deleted
             ORDER BY user_name ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(executor)
            .await
    }

    /// Count live users.
    pub async fn count(executor: impl PgExecutor<'_>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE NOT is_deleted")
            .fetch_one(executor)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateUser,
        actor: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                user_name = COALESCE($2, user_name),
                updated_at = NOW(),
                updated_by = $3
             WHERE id = $1 AND NOT is_deleted
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.user_name)
            .bind(actor)
            .fetch_optional(executor)
            .await
    }

    /// Soft-delete a user by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        executor: impl PgExecutor<'_>,
        id: DbId,
        actor: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET is_deleted = TRUE, updated_at = NOW(), updated_by = $2
             WHERE id = $1 AND NOT is_deleted",
        )
        .bind(id)
        .bind(actor)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
