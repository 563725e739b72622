//! # DevLink Core
//!
//! The domain layer of the DevLink backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the User/Post/Profile aggregates, the ports infrastructure must implement,
//! and the service layer exposed to the HTTP boundary.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
