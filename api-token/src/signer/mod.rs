pub mod errors;
pub mod token_signer;

pub use errors::SignerError;
pub use token_signer::TokenSigner;

/// Separator between the three token fields.
pub const TOKEN_SEPARATOR: char = ';';
