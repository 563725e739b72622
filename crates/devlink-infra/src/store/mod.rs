//! Storage adapters.
//!
//! Each aggregate lives in a single record; likes, comments, experience and
//! education are embedded in their parent. The in-memory store is the
//! default; the SeaORM/Postgres store sits behind the `postgres` feature.

mod memory;

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryPostStore, InMemoryProfileStore, InMemoryUserStore};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres::{PostgresPostStore, PostgresProfileStore, PostgresUserStore};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
