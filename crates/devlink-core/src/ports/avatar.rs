//! Avatar derivation port.

/// Deterministic avatar URI derivation from an email address.
///
/// Same email in, same URI out; the adapter fixes size/rating/default-style.
pub trait AvatarGenerator: Send + Sync {
    fn derive(&self, email: &str) -> String;
}
