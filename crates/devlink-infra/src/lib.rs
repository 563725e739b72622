//! # DevLink Infrastructure
//!
//! Concrete implementations of the ports defined in `devlink-core`:
//! storage, authentication, avatar derivation, and caching.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory storage only
//! - `postgres` - PostgreSQL storage via SeaORM (one row per aggregate,
//!   sub-lists as JSONB)
//! - `auth` - JWT + Argon2 adapters

pub mod avatar;
pub mod cache;
pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

pub use avatar::Gravatar;
pub use cache::InMemoryCache;
pub use store::{InMemoryPostStore, InMemoryProfileStore, InMemoryUserStore};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
pub use store::{PostgresPostStore, PostgresProfileStore, PostgresUserStore};
