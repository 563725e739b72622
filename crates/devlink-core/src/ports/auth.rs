//! Authentication ports: token issuing/verification and password hashing.

use uuid::Uuid;

/// Identity carried by a verified token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub exp: i64,
}

/// Signed, time-limited identity tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token encoding the user id.
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Validate signature and expiry, returning the encoded identity.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Configured token lifetime.
    fn expiration_seconds(&self) -> i64;
}

/// One-way password hashing; the core never sees the algorithm.
pub trait PasswordService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors. The token variants are distinct for logging but
/// all collapse to the same unauthorized outcome at the gate.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("missing authorization credential")]
    MissingAuth,

    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("hashing error: {0}")]
    Hashing(String),
}
