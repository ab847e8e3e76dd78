use std::collections::HashMap;

use api_token::Credential;
use api_token::CredentialLookup;
use api_token::InMemoryCredentials;
use thiserror::Error;

/// Error for credential registry loading failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid credential registry JSON: {0}")]
    InvalidJson(String),

    #[error("Credential for application key '{application_key}' has an empty field")]
    EmptyField { application_key: String },
}

/// Credential registry parsed from a JSON document.
///
/// Expected layout: `{"<application_key>": ["<application_name>", "<secret_key>"]}`.
/// The document is parsed once at startup; lookups afterwards are read-only.
#[derive(Debug, Clone, Default)]
pub struct JsonCredentialRegistry {
    credentials: InMemoryCredentials,
}

impl JsonCredentialRegistry {
    /// Parse a registry document.
    ///
    /// # Arguments
    /// * `document` - JSON object mapping application keys to `[name, secret]`
    ///
    /// # Returns
    /// Registry holding every entry of the document
    ///
    /// # Errors
    /// * `InvalidJson` - Document is not an object of two-string arrays
    /// * `EmptyField` - An application key, name or secret is empty
    pub fn from_json(document: &str) -> Result<Self, RegistryError> {
        let entries: HashMap<String, (String, String)> = serde_json::from_str(document)
            .map_err(|e| RegistryError::InvalidJson(e.to_string()))?;

        let credentials = entries
            .into_iter()
            .map(|(application_key, (application_name, secret_key))| {
                if application_key.is_empty()
                    || application_name.is_empty()
                    || secret_key.is_empty()
                {
                    return Err(RegistryError::EmptyField { application_key });
                }
                Ok(Credential::new(application_name, application_key, secret_key))
            })
            .collect::<Result<InMemoryCredentials, RegistryError>>()?;

        if credentials.is_empty() {
            tracing::warn!("Credential registry is empty; every token will be rejected");
        }

        Ok(Self { credentials })
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl CredentialLookup for JsonCredentialRegistry {
    fn lookup(&self, application_key: &str) -> Option<Credential> {
        self.credentials.lookup(application_key)
    }
}
