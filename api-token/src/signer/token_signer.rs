use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;

use super::errors::SignerError;
use super::TOKEN_SEPARATOR;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::credentials::Credential;
use crate::timestamp::format_timestamp;

type HmacSha256 = Hmac<Sha256>;

/// Builds signed application tokens.
///
/// A token has the form `<application_key>;<signature>;<timestamp>` where the
/// signature is the standard base64 encoding of
/// `HMAC-SHA256(secret_key, uppercase(application_name + timestamp))`.
/// Signing is deterministic for a fixed timestamp.
#[derive(Clone)]
pub struct TokenSigner {
    application_name: String,
    application_key: String,
    secret_key: String,
    clock: Arc<dyn Clock>,
}

impl TokenSigner {
    /// Create a signer reading the current time from the system clock.
    pub fn new(
        application_name: impl Into<String>,
        application_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            application_key: application_key.into(),
            secret_key: secret_key.into(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_credential(credential: &Credential) -> Self {
        Self::new(
            credential.application_name.as_str(),
            credential.application_key.as_str(),
            credential.secret_key.as_str(),
        )
    }

    /// Replace the clock used when no timestamp is supplied.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build a token for `timestamp`, or for the current time when `None`.
    ///
    /// # Arguments
    /// * `timestamp` - Timestamp already formatted as `YYYY-MM-DDTHH:MM:SSZ`
    ///
    /// # Returns
    /// Token string `<application_key>;<signature>;<timestamp>`
    ///
    /// # Errors
    /// * `InvalidKey` - The HMAC primitive rejected the secret key
    pub fn sign(&self, timestamp: Option<&str>) -> Result<String, SignerError> {
        let timestamp = match timestamp {
            Some(timestamp) => Cow::Borrowed(timestamp),
            None => Cow::Owned(format_timestamp(self.clock.now())),
        };

        let signature = self.signature(&timestamp)?;

        Ok(format!(
            "{}{sep}{}{sep}{}",
            self.application_key,
            signature,
            timestamp,
            sep = TOKEN_SEPARATOR
        ))
    }

    /// Build a token stamped with the current time.
    pub fn sign_now(&self) -> Result<String, SignerError> {
        self.sign(None)
    }

    /// Compute the base64 signature for `timestamp`.
    pub fn signature(&self, timestamp: &str) -> Result<String, SignerError> {
        let payload = format!("{}{}", self.application_name, timestamp).to_uppercase();

        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| SignerError::InvalidKey(e.to_string()))?;
        mac.update(payload.as_bytes());

        // STANDARD never wraps lines, so the digest encodes on a single line.
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("application_name", &self.application_name)
            .field("application_key", &self.application_key)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
