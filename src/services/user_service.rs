//! User service - Handles the user identity lifecycle.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{PasswordDigest, UserIdentity, UserView};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::Store;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user record; the store assigns the id.
    ///
    /// `identity.id()` is ignored. The login is not checked against
    /// existing records, so creating the same login twice succeeds and
    /// leaves duplicates behind.
    async fn create_user(
        &self,
        identity: &dyn UserIdentity,
        password: Option<&str>,
    ) -> AppResult<()>;

    /// Get user by id
    async fn get_user(&self, id: i32) -> AppResult<UserView>;

    /// Overwrite an existing record's name and login fields, leaving the
    /// stored credential untouched
    async fn update_user(&self, identity: &dyn UserIdentity) -> AppResult<()>;

    /// Delete a user record. Unknown ids are ignored.
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    /// Replace a user's credential; an empty or absent password clears it
    async fn set_password(&self, id: i32, password: Option<&str>) -> AppResult<()>;

    /// List all user records
    async fn list_users(&self) -> AppResult<Vec<UserView>>;
}

/// Concrete implementation of UserService backed by a store accessor.
pub struct UserManager<S: Store> {
    store: Arc<S>,
}

impl<S: Store> UserManager<S> {
    /// Create new user service instance with a store accessor
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> UserService for UserManager<S> {
    async fn create_user(
        &self,
        identity: &dyn UserIdentity,
        password: Option<&str>,
    ) -> AppResult<()> {
        let digest = PasswordDigest::from_plain(password);

        self.store
            .users()
            .insert(
                identity.first_name().to_owned(),
                identity.last_name().to_owned(),
                identity.login().to_owned(),
                digest,
            )
            .await
    }

    async fn get_user(&self, id: i32) -> AppResult<UserView> {
        self.store
            .users()
            .find_by_id(id)
            .await?
            .map(UserView::from)
            .ok_or_not_found()
    }

    async fn update_user(&self, identity: &dyn UserIdentity) -> AppResult<()> {
        if identity.id() <= 0 {
            return Err(AppError::validation("User id must be a positive integer"));
        }

        self.store
            .users()
            .update_identity(
                identity.id(),
                identity.first_name().to_owned(),
                identity.last_name().to_owned(),
                identity.login().to_owned(),
            )
            .await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if id <= 0 {
            return Err(AppError::validation("User id must be a positive integer"));
        }

        self.store.users().delete(id).await
    }

    async fn set_password(&self, id: i32, password: Option<&str>) -> AppResult<()> {
        let digest = PasswordDigest::from_plain(password);
        self.store.users().set_password_hash(id, digest).await
    }

    async fn list_users(&self) -> AppResult<Vec<UserView>> {
        let users = self.store.users().list().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }
}
