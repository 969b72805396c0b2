//! User repository implementation over the backing store.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{PasswordDigest, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every operation scopes a pooled connection to that single call and
/// releases it on every exit path; nothing is cached or tracked between
/// calls.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record; the store assigns the id.
    ///
    /// The login is not checked against existing records, so two inserts
    /// with the same login both succeed and leave duplicates behind.
    async fn insert(
        &self,
        first_name: String,
        last_name: String,
        login: String,
        password_hash: Option<PasswordDigest>,
    ) -> AppResult<()>;

    /// Find user by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find every record whose login matches, ignoring case.
    ///
    /// Logins are not unique at the store level, so this can return more
    /// than one record.
    async fn find_by_login(&self, login: &str) -> AppResult<Vec<User>>;

    /// Overwrite the three identity fields of an existing record, leaving
    /// the stored credential digest untouched. Fails with `NotFound` if
    /// no record matches.
    async fn update_identity(
        &self,
        id: i32,
        first_name: String,
        last_name: String,
        login: String,
    ) -> AppResult<()>;

    /// Remove a record. Removing an id with no record is a successful
    /// no-op, not an error.
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Replace the stored credential digest, or clear it with `None`.
    /// Fails with `NotFound` if no record matches.
    async fn set_password_hash(&self, id: i32, digest: Option<PasswordDigest>) -> AppResult<()>;

    /// Snapshot of all user records at call time
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(
        &self,
        first_name: String,
        last_name: String,
        login: String,
        password_hash: Option<PasswordDigest>,
    ) -> AppResult<()> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(first_name),
            last_name: Set(last_name),
            login: Set(login),
            password_hash: Set(password_hash.map(PasswordDigest::into_bytes)),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(user::Column::Login)))
                    .eq(login.to_lowercase()),
            )
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update_identity(
        &self,
        id: i32,
        first_name: String,
        last_name: String,
        login: String,
    ) -> AppResult<()> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.first_name = Set(first_name);
        active.last_name = Set(last_name);
        active.login = Set(login);

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        // Zero rows affected is fine: deletion is idempotent
        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn set_password_hash(&self, id: i32, digest: Option<PasswordDigest>) -> AppResult<()> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.password_hash = Set(digest.map(PasswordDigest::into_bytes));

        active.update(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
