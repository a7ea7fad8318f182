use prsk_core::error::CoreError;
use prsk_core::pagination::{Page, PageRequest};
use prsk_core::patch::{changed, conflicts_with};
use prsk_core::types::DbId;
use prsk_db::models::user::{
    CreateUser, CreateUserRequest, UpdateUser, UpdateUserRequest, UserResponse,
};
use prsk_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppResult;

const ENTITY: &str = "User";

fn name_conflict(user_name: &str) -> CoreError {
    CoreError::conflict("userName", format!("User name already exist: {user_name}"))
}

/// Create, list, update and soft-delete users.
pub struct UserService {
    pool: PgPool,
    actor: String,
}

impl UserService {
    pub fn new(pool: PgPool, actor: String) -> Self {
        Self { pool, actor }
    }

    /// One page of live users ordered by user name.
    pub async fn list(&self, page: PageRequest) -> AppResult<Page<UserResponse>> {
        let rows = UserRepo::list_page(&self.pool, page).await?;
        let total = UserRepo::count(&self.pool).await?;
        Ok(Page::new(rows, page, total).map(UserResponse::from))
    }

    pub async fn create(&self, input: CreateUserRequest) -> AppResult<UserResponse> {
        let mut tx = self.pool.begin().await?;

        if UserRepo::find_by_user_name(&mut *tx, &input.user_name)
            .await?
            .is_some()
        {
            tracing::debug!(user_name = %input.user_name, "User name taken");
            return Err(name_conflict(&input.user_name).into());
        }

        let record = CreateUser {
            password_hash: hash_password(&input.password)?,
            user_name: input.user_name,
        };
        let user = UserRepo::create(&mut *tx, &record, &self.actor).await?;
        tx.commit().await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user.into())
    }

    /// Rename a live user after checking the supplied password.
    ///
    /// The password check runs before the name-conflict check.
    pub async fn update(&self, id: DbId, input: UpdateUserRequest) -> AppResult<UserResponse> {
        let mut tx = self.pool.begin().await?;

        let current = UserRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if !verify_password(&input.password, &current.password_hash)? {
            tracing::warn!(user_id = id, "Password mismatch on user update");
            return Err(CoreError::unauthorized("password", "Invalid password").into());
        }

        if let Some(new_name) = input.user_name.as_deref() {
            if changed(Some(new_name), current.user_name.as_str()) {
                let holder = UserRepo::find_by_user_name(&mut *tx, new_name).await?;
                if conflicts_with(holder.map(|u| u.id), id) {
                    tracing::debug!(user_id = id, user_name = %new_name, "User name taken");
                    return Err(name_conflict(new_name).into());
                }
            }
        }

        let changes = UpdateUser {
            user_name: input.user_name,
        };
        let user = UserRepo::update(&mut *tx, id, &changes, &self.actor)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tx.commit().await?;

        tracing::info!(user_id = id, "User updated");
        Ok(user.into())
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        if !UserRepo::soft_delete(&mut *tx, id, &self.actor).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        tx.commit().await?;

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
