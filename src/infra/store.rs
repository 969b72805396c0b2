//! Store accessor - explicit handle to the persisted user collection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{UserRepository, UserStore};

/// Store accessor trait for dependency injection.
///
/// Hands out repositories bound to one connection pool. Services receive
/// this handle at construction time instead of reaching for a process-wide
/// connection factory, and every repository call scopes its own
/// connection.
pub trait Store: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete store accessor backed by a SeaORM connection pool
pub struct Persistence {
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create new store accessor over a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db)),
        }
    }
}

impl Store for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}
