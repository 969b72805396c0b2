//! Authentication service - Matches presented credentials against stored
//! digests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{PasswordDigest, UserView};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check a login/password pair against the stored records.
    ///
    /// Login comparison ignores case. An account with no stored digest
    /// matches an empty or absent password. Fails with
    /// [`AppError::InvalidCredentials`] when no record satisfies both
    /// conditions; that outcome is a normal negative result, distinct
    /// from `NotFound`.
    async fn authenticate(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<UserView>;
}

/// Concrete implementation of AuthService backed by a store accessor.
pub struct Authenticator<S: Store> {
    store: Arc<S>,
}

impl<S: Store> Authenticator<S> {
    /// Create new auth service instance with a store accessor
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store> AuthService for Authenticator<S> {
    async fn authenticate(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<UserView> {
        // An absent or empty login never matches; skip the store round
        // trip entirely.
        let login = match login {
            Some(login) if !login.is_empty() => login,
            _ => return Err(AppError::InvalidCredentials),
        };

        let digest = PasswordDigest::from_plain(password);
        let candidates = self.store.users().find_by_login(login).await?;

        // Logins are not unique, so every case-insensitive match is a
        // candidate; which duplicate wins is unspecified. Two absent
        // digests compare equal, so a passwordless account authenticates
        // with an empty password.
        candidates
            .into_iter()
            .find(|user| user.password_hash == digest)
            .map(UserView::from)
            .ok_or(AppError::InvalidCredentials)
    }
}
