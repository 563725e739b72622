//! # DevLink Shared
//!
//! Request/response types shared between the server and any Rust frontend.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
