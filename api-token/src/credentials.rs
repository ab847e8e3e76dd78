use std::collections::HashMap;
use std::fmt;

/// A registered API consumer.
///
/// The application key is the public identifier embedded in tokens. The secret
/// key is only ever used as the HMAC key and is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub application_name: String,
    pub application_key: String,
    pub secret_key: String,
}

impl Credential {
    pub fn new(
        application_name: impl Into<String>,
        application_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            application_key: application_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("application_name", &self.application_name)
            .field("application_key", &self.application_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Capability to resolve an application key into its registered credential.
///
/// Implementations own their backing store; the validator only needs this
/// lookup and never mutates the registry.
pub trait CredentialLookup: Send + Sync {
    /// Find the credential registered under `application_key`.
    ///
    /// # Returns
    /// The credential, or `None` when the key is not registered
    fn lookup(&self, application_key: &str) -> Option<Credential>;
}

impl<F> CredentialLookup for F
where
    F: Fn(&str) -> Option<Credential> + Send + Sync,
{
    fn lookup(&self, application_key: &str) -> Option<Credential> {
        self(application_key)
    }
}

/// Immutable in-memory registry keyed by application key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    entries: HashMap<String, Credential>,
}

impl InMemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a credential, replacing any previous entry with the same key.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.entries
            .insert(credential.application_key.clone(), credential);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Credential> for InMemoryCredentials {
    fn from_iter<I: IntoIterator<Item = Credential>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |registry, credential| {
                registry.with_credential(credential)
            })
    }
}

impl CredentialLookup for InMemoryCredentials {
    fn lookup(&self, application_key: &str) -> Option<Credential> {
        self.entries.get(application_key).cloned()
    }
}
