use std::fmt;
use std::sync::Arc;

use crate::credentials::Credential;
use crate::credentials::CredentialLookup;
use crate::signer::SignerError;
use crate::signer::TokenSigner;
use crate::validator::TokenValidator;
use crate::validator::ValidationError;

/// Authentication coordinator combining a validator and a credential registry.
///
/// Services hold one `Authenticator` behind an `Arc` and call it from every
/// request; it owns no mutable state.
#[derive(Clone)]
pub struct Authenticator {
    validator: TokenValidator,
    credentials: Arc<dyn CredentialLookup>,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `validator` - Configured token validator
    /// * `credentials` - Registry of known applications
    pub fn new(validator: TokenValidator, credentials: Arc<dyn CredentialLookup>) -> Self {
        Self {
            validator,
            credentials,
        }
    }

    /// Authenticate a raw token.
    ///
    /// # Returns
    /// Credential of the calling application
    ///
    /// # Errors
    /// * `ValidationError` - Token rejected, or signing failed
    pub fn authenticate(&self, raw_token: &str) -> Result<Credential, ValidationError> {
        self.validator.verify(raw_token, self.credentials.as_ref())
    }

    /// Validate a raw token, collapsing every rejection into `false`.
    ///
    /// # Errors
    /// * `SignerError` - HMAC primitive failure
    pub fn validate_token(&self, raw_token: &str) -> Result<bool, SignerError> {
        self.validator.validate(raw_token, self.credentials.as_ref())
    }

    /// Issue a token for a registered application, stamped with the
    /// validator's current time.
    ///
    /// Useful for trusted tooling that shares the registry with the service.
    ///
    /// # Errors
    /// * `UnknownApplication` - Application key is not registered
    /// * `Signing` - HMAC primitive failure
    pub fn issue_token(&self, application_key: &str) -> Result<String, ValidationError> {
        let credential = self
            .credentials
            .lookup(application_key)
            .ok_or(ValidationError::UnknownApplication)?;

        let token = TokenSigner::from_credential(&credential)
            .with_clock(self.validator.clock())
            .sign_now()?;

        Ok(token)
    }

    pub fn validator(&self) -> &TokenValidator {
        &self.validator
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::clock::FixedClock;
    use crate::credentials::InMemoryCredentials;

    fn authenticator() -> Authenticator {
        let now = Utc.with_ymd_and_hms(2019, 1, 29, 23, 32, 30).unwrap();
        let validator = TokenValidator::default().with_clock(Arc::new(FixedClock::new(now)));
        let registry = InMemoryCredentials::new().with_credential(Credential::new(
            "Brasil",
            "Festa",
            "12312312312312312312312312312312312",
        ));

        Authenticator::new(validator, Arc::new(registry))
    }

    #[test]
    fn test_issue_and_authenticate() {
        let authenticator = authenticator();

        let token = authenticator
            .issue_token("Festa")
            .expect("Failed to issue token");
        assert_eq!(
            token,
            "Festa;4QnileeUB0iBt00AVqgctVc1vUfCpIwS/TJjmWnH6SE=;2019-01-29T23:32:30Z"
        );

        let credential = authenticator
            .authenticate(&token)
            .expect("Authentication failed");
        assert_eq!(credential.application_name, "Brasil");
        assert!(authenticator.validate_token(&token).unwrap());
    }

    #[test]
    fn test_issue_unknown_application() {
        let authenticator = authenticator();

        assert_eq!(
            authenticator.issue_token("Samba"),
            Err(ValidationError::UnknownApplication)
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let authenticator = authenticator();
        let issued = Utc.with_ymd_and_hms(2019, 1, 29, 23, 32, 30).unwrap() - Duration::minutes(5);
        let token = TokenSigner::new("Brasil", "Festa", "12312312312312312312312312312312312")
            .with_clock(Arc::new(FixedClock::new(issued)))
            .sign_now()
            .unwrap();

        assert_eq!(
            authenticator.authenticate(&token),
            Err(ValidationError::ExpiredOrFuture)
        );
        assert!(!authenticator.validate_token(&token).unwrap());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let authenticator = authenticator();

        assert!(!authenticator.validate_token("invalid.token.here").unwrap());
        assert!(!authenticator.validate_token("").unwrap());
    }
}
