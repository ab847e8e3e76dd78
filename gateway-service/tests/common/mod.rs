use std::sync::Arc;

use api_token::Authenticator;
use api_token::TokenSigner;
use api_token::TokenValidator;
use gateway_service::inbound::http::router::create_router;
use gateway_service::registry::JsonCredentialRegistry;

pub const APP_NAME: &str = "Brasil";
pub const APP_KEY: &str = "Festa";
pub const SECRET: &str = "12312312312312312312312312312312312";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub signer: TokenSigner,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let registry = JsonCredentialRegistry::from_json(&format!(
            r#"{{"{}": ["{}", "{}"]}}"#,
            APP_KEY, APP_NAME, SECRET
        ))
        .expect("Failed to parse test registry");

        let authenticator = Arc::new(Authenticator::new(
            TokenValidator::new(30),
            Arc::new(registry),
        ));

        let router = create_router(authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            signer: TokenSigner::new(APP_NAME, APP_KEY, SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Sign a token for the registered test application at the current time
    pub fn fresh_token(&self) -> String {
        self.signer.sign_now().expect("Failed to sign token")
    }
}
