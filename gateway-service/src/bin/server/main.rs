use std::sync::Arc;

use api_token::Authenticator;
use api_token::TokenValidator;
use gateway_service::config::Config;
use gateway_service::inbound::http::router::create_router;
use gateway_service::registry::JsonCredentialRegistry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway_service=debug,api_token=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "gateway-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_expiration_seconds = config.token.expiration_seconds,
        "Configuration loaded"
    );

    let registry = JsonCredentialRegistry::from_json(&config.credentials.registry)?;
    tracing::info!(applications = registry.len(), "Credential registry loaded");

    let validator = TokenValidator::new(config.token.expiration_seconds);
    let authenticator = Arc::new(Authenticator::new(validator, Arc::new(registry)));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
