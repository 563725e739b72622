//! SeaORM entities - one table per aggregate, sub-lists as JSONB.

pub mod post;
pub mod profile;
pub mod user;
