use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::SubsecRound;
use chrono::Utc;

use super::errors::ValidationError;
use super::format::TokenParts;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::credentials::Credential;
use crate::credentials::CredentialLookup;
use crate::signer::SignerError;
use crate::signer::TokenSigner;
use crate::timestamp::parse_timestamp;

/// Tolerance applied when none is configured, in seconds.
pub const DEFAULT_EXPIRATION_SECONDS: u32 = 30;

/// Validates application tokens against a credential registry.
///
/// A token is accepted when it is well formed, its application key is
/// registered, its timestamp lies within `[now - tolerance, now + tolerance]`
/// and re-signing it with the registered secret reproduces it exactly.
/// The validator holds no per-request state and can be shared freely.
#[derive(Debug, Clone)]
pub struct TokenValidator {
    expiration_seconds: u32,
    clock: Arc<dyn Clock>,
}

impl TokenValidator {
    /// Create a validator with the given tolerance, reading the system clock.
    ///
    /// # Arguments
    /// * `expiration_seconds` - Accepted clock distance between token and now
    pub fn new(expiration_seconds: u32) -> Self {
        Self {
            expiration_seconds,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn expiration_seconds(&self) -> u32 {
        self.expiration_seconds
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Validate a token and return the credential it was signed with.
    ///
    /// Checks run in order and stop at the first failure: format, credential
    /// lookup, timestamp parsing, freshness, signature.
    ///
    /// # Arguments
    /// * `raw_token` - Token exactly as received
    /// * `credentials` - Registry used to resolve the token's application key
    ///
    /// # Returns
    /// Credential of the authenticated application
    ///
    /// # Errors
    /// * `MalformedToken` - Wrong field count or empty field
    /// * `UnknownApplication` - Application key is not registered
    /// * `MalformedTimestamp` - Timestamp does not follow the wire format
    /// * `ExpiredOrFuture` - Timestamp is outside the tolerance window
    /// * `SignatureMismatch` - Re-signed token differs from the received one
    /// * `Signing` - HMAC primitive failure
    pub fn verify<L>(&self, raw_token: &str, credentials: &L) -> Result<Credential, ValidationError>
    where
        L: CredentialLookup + ?Sized,
    {
        let parts = TokenParts::parse(raw_token)?;

        let credential = credentials
            .lookup(parts.application_key)
            .ok_or(ValidationError::UnknownApplication)?;

        let issued_at = parse_timestamp(parts.timestamp)
            .map_err(|e| ValidationError::MalformedTimestamp(e.to_string()))?;

        if !self.is_fresh(issued_at) {
            return Err(ValidationError::ExpiredOrFuture);
        }

        let expected = TokenSigner::new(
            credential.application_name.as_str(),
            parts.application_key,
            credential.secret_key.as_str(),
        )
        .sign(Some(parts.timestamp))?;

        if expected != raw_token {
            return Err(ValidationError::SignatureMismatch);
        }

        Ok(credential)
    }

    /// Boolean form of [`TokenValidator::verify`].
    ///
    /// # Returns
    /// True if the token is accepted, false for any rejection
    ///
    /// # Errors
    /// * `SignerError` - HMAC primitive failure; never a rejection
    pub fn validate<L>(&self, raw_token: &str, credentials: &L) -> Result<bool, SignerError>
    where
        L: CredentialLookup + ?Sized,
    {
        match self.verify(raw_token, credentials) {
            Ok(credential) => {
                tracing::debug!(
                    application_key = %credential.application_key,
                    "Token accepted"
                );
                Ok(true)
            }
            Err(ValidationError::Signing(e)) => Err(e),
            Err(e) => {
                tracing::debug!(reason = %e, "Token rejected");
                Ok(false)
            }
        }
    }

    /// Check that `issued_at` falls inside the inclusive tolerance window.
    pub fn is_fresh(&self, issued_at: DateTime<Utc>) -> bool {
        let now = self.clock.now().trunc_subsecs(0);
        let tolerance = Duration::seconds(i64::from(self.expiration_seconds));

        let earliest = now
            .checked_sub_signed(tolerance)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let latest = now
            .checked_add_signed(tolerance)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        earliest <= issued_at && issued_at <= latest
    }
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRATION_SECONDS)
    }
}
