//! HMAC application tokens
//!
//! Issues and validates short-lived bearer tokens for API callers:
//! - Token signing (HMAC-SHA256, base64)
//! - Token validation (format, registry lookup, freshness window, signature)
//! - Authentication coordination over a credential registry
//!
//! A token is `<application_key>;<signature>;<timestamp>` with the timestamp
//! in `YYYY-MM-DDTHH:MM:SSZ` form. The registry and the clock are injected, so
//! the crate performs no I/O of its own.
//!
//! # Examples
//!
//! ## Signing
//! ```
//! use api_token::TokenSigner;
//!
//! let signer = TokenSigner::new("Brasil", "Festa", "12312312312312312312312312312312312");
//! let token = signer.sign(Some("2019-01-29T23:32:30Z")).unwrap();
//! assert_eq!(
//!     token,
//!     "Festa;4QnileeUB0iBt00AVqgctVc1vUfCpIwS/TJjmWnH6SE=;2019-01-29T23:32:30Z"
//! );
//! ```
//!
//! ## Validation
//! ```
//! use api_token::{Credential, InMemoryCredentials, TokenSigner, TokenValidator};
//!
//! let registry = InMemoryCredentials::new()
//!     .with_credential(Credential::new("Brasil", "Festa", "secret"));
//! let token = TokenSigner::new("Brasil", "Festa", "secret").sign_now().unwrap();
//!
//! let validator = TokenValidator::default();
//! assert!(validator.validate(&token, &registry).unwrap());
//! assert!(!api_token::validate_format("Festa;;2019-01-29T23:32:30Z"));
//! ```

pub mod authenticator;
pub mod clock;
pub mod credentials;
pub mod signer;
pub mod timestamp;
pub mod validator;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use credentials::Credential;
pub use credentials::CredentialLookup;
pub use credentials::InMemoryCredentials;
pub use signer::SignerError;
pub use signer::TokenSigner;
pub use timestamp::format_timestamp;
pub use timestamp::parse_timestamp;
pub use timestamp::TimestampError;
pub use validator::validate_format;
pub use validator::TokenValidator;
pub use validator::ValidationError;
pub use validator::DEFAULT_EXPIRATION_SECONDS;
