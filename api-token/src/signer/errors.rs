use thiserror::Error;

/// Error type for token signing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("HMAC rejected the secret key: {0}")]
    InvalidKey(String),
}
