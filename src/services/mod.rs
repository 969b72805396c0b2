//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, receiving the store accessor at construction
//! time.

mod auth_service;
mod directory;
mod user_service;

// Directory façade
pub use directory::Directory;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use user_service::{UserManager, UserService};
