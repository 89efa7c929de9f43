mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use uuid::Uuid;

#[tokio::test]
async fn reads_are_public() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in ["/experience", "/project", "/skill", "/social", "/about", "/contact"] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;

        // Reads never sit behind the auth gate; without a datastore they may
        // degrade to an upstream error, but never to an auth rejection
        assert!(
            res.status() != StatusCode::UNAUTHORIZED && res.status() != StatusCode::FORBIDDEN,
            "GET {} should be public, got {}",
            path,
            res.status()
        );
    }
    Ok(())
}

#[tokio::test]
async fn writes_require_auth() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let id = Uuid::new_v4();

    let routes = [
        (Method::POST, "/experience".to_string()),
        (Method::DELETE, format!("/experience/{id}")),
        (Method::POST, "/project".to_string()),
        (Method::DELETE, format!("/project/{id}")),
        (Method::POST, "/skill".to_string()),
        (Method::DELETE, format!("/skill/{id}")),
        (Method::POST, "/social".to_string()),
        (Method::PUT, format!("/social/{id}")),
        (Method::POST, "/about".to_string()),
        (Method::PUT, format!("/about/{id}")),
        (Method::POST, "/contact".to_string()),
        (Method::DELETE, format!("/contact/{id}")),
    ];

    for (method, path) in routes {
        let res = client
            .request(method.clone(), format!("{}{}", server.base_url, path))
            .send()
            .await?;

        assert_eq!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "{} {} should require auth",
            method,
            path
        );
    }
    Ok(())
}
