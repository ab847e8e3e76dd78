use thiserror::Error;

use crate::signer::SignerError;

/// Reasons a token is not accepted.
///
/// Every variant except `Signing` is an expected negative outcome of
/// validation. `Signing` means the HMAC primitive itself failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Token is malformed: expected three non-empty fields separated by ';'")]
    MalformedToken,

    #[error("Unknown application")]
    UnknownApplication,

    #[error("Token timestamp is malformed: {0}")]
    MalformedTimestamp(String),

    #[error("Token timestamp is outside the accepted window")]
    ExpiredOrFuture,

    #[error("Token signature does not match")]
    SignatureMismatch,

    #[error("Signing error: {0}")]
    Signing(#[from] SignerError),
}

impl ValidationError {
    /// True for ordinary rejections, false for signing faults.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, ValidationError::Signing(_))
    }
}
