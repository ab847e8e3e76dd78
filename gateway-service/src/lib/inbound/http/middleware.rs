use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use super::handlers::UNAUTHORIZED_MESSAGE;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated application in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedApplication {
    pub application_key: String,
    pub application_name: String,
}

/// Middleware that validates application tokens and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let credential = state.authenticator.authenticate(token).map_err(|e| {
        if e.is_rejection() {
            tracing::warn!(reason = %e, "Token validation failed");
        }
        ApiError::from(e).into_response()
    })?;

    tracing::debug!(
        application_key = %credential.application_key,
        "Application authenticated"
    );

    req.extensions_mut().insert(AuthenticatedApplication {
        application_key: credential.application_key,
        application_name: credential.application_name,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let unauthorized = |reason: &str| {
        tracing::warn!(reason, "Rejected Authorization header");
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
    };

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("missing"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("not visible ASCII"))?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("expected Bearer scheme"))
}
