use std::env;
use std::fmt;

use api_token::DEFAULT_EXPIRATION_SECONDS;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    #[serde(default = "default_expiration_seconds")]
    pub expiration_seconds: u32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            expiration_seconds: default_expiration_seconds(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct CredentialsConfig {
    /// JSON object `{"<application_key>": ["<application_name>", "<secret_key>"]}`
    #[serde(default = "default_registry")]
    pub registry: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
        }
    }
}

// The registry carries secrets.
impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("registry", &"<redacted>")
            .finish()
    }
}

fn default_expiration_seconds() -> u32 {
    DEFAULT_EXPIRATION_SECONDS
}

fn default_registry() -> String {
    "{}".to_string()
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GATEWAY__TOKEN__EXPIRATION_SECONDS, GATEWAY__CREDENTIALS__REGISTRY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: GATEWAY__SERVER__HTTP_PORT=9000 overrides server.http_port
            .add_source(Environment::with_prefix("GATEWAY").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
