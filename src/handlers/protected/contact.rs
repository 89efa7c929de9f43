use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::database::models::{contact::NewContact, Contact};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

use super::utils::require_all;

/// POST /contact
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError> {
    require_all(&[
        ("name", &payload.name),
        ("email", &payload.email),
        ("subject", &payload.subject),
        ("message", &payload.message),
    ])?;

    let contact = Contact::create(&state.pool, &payload).await?;
    info!(admin = %admin.email, id = %contact.id, "Created contact message");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// DELETE /contact/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if Contact::delete(&state.pool, id).await? == 0 {
        return Err(ApiError::not_found("Message not found"));
    }

    info!(admin = %admin.email, %id, "Deleted contact message");
    Ok(Json(json!({ "message": "Message deleted successfully" })))
}
