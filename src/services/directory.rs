//! Directory façade - single entry point combining the user and
//! authentication services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{AuthService, Authenticator, UserManager, UserService};
use crate::domain::{UserIdentity, UserView};
use crate::errors::AppResult;
use crate::infra::Persistence;

/// Public surface of the user directory.
///
/// Stateless apart from the service handles: every call scopes its own
/// store connection, so one instance built at process startup can be
/// shared by reference across callers without coordination.
pub struct Directory {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
}

impl Directory {
    /// Create a directory from already-built services
    pub fn new(auth_service: Arc<dyn AuthService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            auth_service,
            user_service,
        }
    }

    /// Wire the directory directly from a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let store = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(store.clone()));
        let user_service = Arc::new(UserManager::new(store));

        Self {
            auth_service,
            user_service,
        }
    }

    /// Create a new user record; the store assigns the id
    pub async fn create_user(
        &self,
        identity: &dyn UserIdentity,
        password: Option<&str>,
    ) -> AppResult<()> {
        self.user_service.create_user(identity, password).await
    }

    /// Get user by id
    pub async fn get_user(&self, id: i32) -> AppResult<UserView> {
        self.user_service.get_user(id).await
    }

    /// Overwrite an existing record's identity fields
    pub async fn update_user(&self, identity: &dyn UserIdentity) -> AppResult<()> {
        self.user_service.update_user(identity).await
    }

    /// Delete a user record; unknown ids are ignored
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.user_service.delete_user(id).await
    }

    /// Replace a user's credential; an empty or absent password clears it
    pub async fn set_password(&self, id: i32, password: Option<&str>) -> AppResult<()> {
        self.user_service.set_password(id, password).await
    }

    /// Check a login/password pair against the stored records
    pub async fn authenticate(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<UserView> {
        self.auth_service.authenticate(login, password).await
    }

    /// List all user records
    pub async fn list_users(&self) -> AppResult<Vec<UserView>> {
        self.user_service.list_users().await
    }
}
