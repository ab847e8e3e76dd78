mod common;

use api_token::format_timestamp;
use api_token::TokenSigner;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::APP_KEY;
use common::APP_NAME;
use common::SECRET;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_get_current_application_success() {
    let app = TestApp::spawn().await;
    let token = app.fresh_token();

    let response = app
        .get_authenticated("/api/applications/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["application_key"], APP_KEY);
    assert_eq!(body["data"]["application_name"], APP_NAME);
}

#[tokio::test]
async fn test_get_current_application_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/applications/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_get_current_application_with_wrong_scheme() {
    let app = TestApp::spawn().await;
    let token = app.fresh_token();

    let response = app
        .get("/api/applications/me")
        .header("Authorization", format!("Basic {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_get_current_application_with_wrong_secret() {
    let app = TestApp::spawn().await;
    let token = TokenSigner::new(APP_NAME, APP_KEY, "InvalidSecret")
        .sign_now()
        .expect("Failed to sign token");

    let response = app
        .get_authenticated("/api/applications/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_current_application_with_expired_token() {
    let app = TestApp::spawn().await;
    let issued_at = format_timestamp(Utc::now() - Duration::minutes(5));
    let token = app
        .signer
        .sign(Some(&issued_at))
        .expect("Failed to sign token");

    let response = app
        .get_authenticated("/api/applications/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_application_and_bad_signature_look_the_same() {
    let app = TestApp::spawn().await;
    let unknown = TokenSigner::new(APP_NAME, "Samba", SECRET)
        .sign_now()
        .expect("Failed to sign token");
    let forged = TokenSigner::new(APP_NAME, APP_KEY, "InvalidSecret")
        .sign_now()
        .expect("Failed to sign token");

    let mut bodies = Vec::new();
    for token in [unknown, forged] {
        let response = app
            .get_authenticated("/api/applications/me", &token)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(
            response
                .json::<serde_json::Value>()
                .await
                .expect("Failed to parse response"),
        );
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[tokio::test]
async fn test_validate_token_endpoint() {
    let app = TestApp::spawn().await;

    let cases = [
        (app.fresh_token(), true),
        ("Festa;;2019-01-29T23:32:30Z".to_string(), false),
        (
            "Festa;4QnileeUB0iBt00AVqgctVc1vUfCpIwS/TJjmWnH6SE=;2019-01-29T23:32:30Z".to_string(),
            false,
        ),
        (String::new(), false),
    ];

    for (token, expected) in cases {
        let response = app
            .post("/api/tokens/validate")
            .json(&json!({ "token": token }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["data"]["valid"], expected, "token: {}", token);
    }
}

#[tokio::test]
async fn test_validate_token_missing_body_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/tokens/validate")
        .json(&json!({ "jwt": "abc" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
