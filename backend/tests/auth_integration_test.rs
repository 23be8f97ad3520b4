//! Integration tests for the user endpoints against PostgreSQL

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use identity_backend::auth::JwtService;
use secrecy::SecretString;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_success() {
    let app = common::TestApp::new().await;
    let username = common::unique_username("alice");

    let response = app
        .post(
            "/users/action/register",
            &json!({"username": username, "name": "Alice", "password": "secret123"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["code"], 200);
    let doc = &response.body["data"]["doc"];
    assert_eq!(doc["username"], username.as_str());
    assert_eq!(doc["name"], "Alice");
    assert!(doc.get("password").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_username() {
    let app = common::TestApp::new().await;
    let (username, _) = app.create_test_user("secret123").await;

    let response = app
        .post(
            "/users/action/register",
            &json!({"username": username, "name": "Again", "password": "secret123"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.body["data"]["doc"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_and_resolve() {
    let app = common::TestApp::new().await;
    let (username, user_id) = app.create_test_user("secret123").await;

    let login = app
        .post(
            "/users/action/login",
            &json!({"username": username, "password": "secret123"}),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    let opaque = login.body["data"]["doc"]["opaqueToken"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(opaque.len() >= 44);

    let resolved = app.resolve(&opaque).await;
    assert_eq!(resolved.status, StatusCode::OK);
    let signed = resolved.access_token.expect("access_token header");

    let claims = JwtService::new(&SecretString::new(common::TEST_SECRET.to_string()), 7200)
        .verify_signed_token(&signed)
        .unwrap();
    assert_eq!(claims.sub, user_id);
    assert!(claims.exp > Utc::now().timestamp() + 7000);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;
    let (username, _) = app.create_test_user("secret123").await;

    let response = app
        .post(
            "/users/action/login",
            &json!({"username": username, "password": "not-the-password"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_unknown_user() {
    let app = common::TestApp::new().await;

    let response = app
        .post(
            "/users/action/login",
            &json!({"username": common::unique_username("ghost"), "password": "secret123"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_resolve_unknown_handle() {
    let app = common::TestApp::new().await;

    let response = app.resolve("never-issued-handle").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.access_token.is_none());
}
