pub mod errors;
pub mod format;
pub mod token_validator;

pub use errors::ValidationError;
pub use format::validate_format;
pub use format::TokenParts;
pub use token_validator::TokenValidator;
pub use token_validator::DEFAULT_EXPIRATION_SECONDS;
