//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::domain::PasswordDigest;

/// Readable identity fields accepted by the create and update operations.
///
/// Any value exposing these four fields can be handed to the directory;
/// [`UserView`] implements it, so a projection read back from the
/// directory round-trips as input. Create ignores `id` (the store assigns
/// one), update requires it.
pub trait UserIdentity: Send + Sync {
    fn id(&self) -> i32;
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn login(&self) -> &str;
}

/// User domain entity
///
/// Carries the stored credential digest and therefore never crosses the
/// crate boundary; callers receive [`UserView`] instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Intended unique, but not enforced by this crate; duplicates can
    /// exist and are handled at authentication time.
    pub login: String,
    /// `None` means no password is set
    pub password_hash: Option<PasswordDigest>,
}

/// User view (safe to return to callers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub login: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            login: user.login,
        }
    }
}

impl UserIdentity for UserView {
    fn id(&self) -> i32 {
        self.id
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn login(&self) -> &str {
        &self.login
    }
}
