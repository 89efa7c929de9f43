mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_requires_email_and_password() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/admin/login", server.base_url))
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body.get("error").is_some(), "missing error field: {}", body);
    Ok(())
}

#[tokio::test]
async fn login_rejects_missing_password() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/admin/login", server.base_url))
        .json(&json!({ "email": "admin@example.com" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn login_without_body_is_a_client_error() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/admin/login", server.base_url))
        .send()
        .await?;

    assert!(
        res.status().is_client_error(),
        "expected client error, got {}",
        res.status()
    );
    Ok(())
}

#[tokio::test]
async fn login_failure_never_issues_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Credential check needs the datastore; without one the attempt must
    // still fail closed as an auth or upstream error, never a 2xx
    let res = client
        .post(format!("{}/admin/login", server.base_url))
        .json(&json!({ "email": "nobody@example.com", "password": "wrong-password" }))
        .send()
        .await?;

    assert!(
        res.status() == StatusCode::UNAUTHORIZED
            || res.status() == StatusCode::INTERNAL_SERVER_ERROR
            || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "expected UNAUTHORIZED or an upstream failure, got {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("error").is_some(), "missing error field: {}", body);
    assert!(body.get("token").is_none());
    Ok(())
}
