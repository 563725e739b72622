//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod avatar;
mod cache;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use avatar::AvatarGenerator;
pub use cache::{Cache, CacheError};
pub use repository::{PostRepository, ProfileRepository, UserRepository};
