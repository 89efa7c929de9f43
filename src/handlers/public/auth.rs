use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::auth::{self, password, Claims};
use crate::database::models::Admin;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /admin/login - Authenticate an administrator and receive a bearer token
///
/// Expected input:
/// ```json
/// { "email": "string", "password": "string" }
/// ```
///
/// Success:
/// ```json
/// { "message": "Login successful", "token": "eyJhbGciOiJIUzI1NiI..." }
/// ```
///
/// An unknown email and a wrong password produce byte-identical 401 bodies, so
/// a caller cannot probe which admin accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = payload.email.trim();
    if email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::validation_error("email and password required", None));
    }

    let Some(admin) = Admin::find_by_email(&state.pool, email).await? else {
        warn!("Failed login attempt for unknown email");
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    if !password::verify_password(&payload.password, &admin.password_hash)? {
        warn!(admin = %admin.email, "Failed login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(admin.id, &admin.email);
    let token = auth::issue_token(&claims).map_err(|e| {
        tracing::error!("Token issuance failed: {}", e);
        ApiError::internal_server_error("Login failed")
    })?;

    info!(admin = %admin.email, "Admin login successful");
    Ok(Json(json!({ "message": "Login successful", "token": token })))
}
