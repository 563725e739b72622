//! Request middleware: the auth gate and error translation.

pub mod auth;
pub mod error;
