use super::errors::ValidationError;
use crate::signer::TOKEN_SEPARATOR;

/// Borrowed view over the three fields of a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub application_key: &'a str,
    pub signature: &'a str,
    pub timestamp: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split a raw token into its fields.
    ///
    /// # Errors
    /// * `MalformedToken` - Not exactly three fields, or any field is empty
    pub fn parse(raw_token: &'a str) -> Result<Self, ValidationError> {
        let mut fields = raw_token.split(TOKEN_SEPARATOR);

        let (Some(application_key), Some(signature), Some(timestamp), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ValidationError::MalformedToken);
        };

        if application_key.is_empty() || signature.is_empty() || timestamp.is_empty() {
            return Err(ValidationError::MalformedToken);
        }

        Ok(Self {
            application_key,
            signature,
            timestamp,
        })
    }
}

/// Check the structural format of a token without touching its signature.
pub fn validate_format(raw_token: &str) -> bool {
    TokenParts::parse(raw_token).is_ok()
}
