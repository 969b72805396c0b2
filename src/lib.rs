//! User Directory - identity records and credential verification.
//!
//! A library-level component for managing user accounts and checking
//! login/password pairs against stored credential digests. It is consumed
//! by a host application and exposes no wire protocol of its own.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and the credential digest
//! - **services**: Use cases (user lifecycle, authentication, the façade)
//! - **infra**: Infrastructure concerns (database, repositories, store)
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```ignore
//! let db = Database::connect(&Config::from_env()).await?;
//! let directory = Directory::from_connection(db.get_connection());
//!
//! directory.create_user(&new_user, Some("secret123")).await?;
//! let user = directory.authenticate(Some("jdoe"), Some("secret123")).await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{PasswordDigest, User, UserIdentity, UserView};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Persistence, Store};
pub use services::{AuthService, Directory, UserService};
