//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the persisted user collection
//! - The store accessor handed to services

pub mod db;
pub mod repositories;
pub mod store;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};
pub use store::{Persistence, Store};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
