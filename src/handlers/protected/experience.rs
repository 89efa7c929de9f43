use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::database::models::{experience::NewExperience, Experience};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

use super::utils::require_all;

/// POST /experience
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<NewExperience>,
) -> Result<impl IntoResponse, ApiError> {
    require_all(&[
        ("title", &payload.title),
        ("company", &payload.company),
        ("startDate", &payload.start_date),
        ("endDate", &payload.end_date),
        ("description", &payload.description),
    ])?;

    let experience = Experience::create(&state.pool, &payload).await?;
    info!(admin = %admin.email, id = %experience.id, "Created experience entry");
    Ok((StatusCode::CREATED, Json(experience)))
}

/// DELETE /experience/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if Experience::delete(&state.pool, id).await? == 0 {
        return Err(ApiError::not_found("Experience entry not found"));
    }

    info!(admin = %admin.email, %id, "Deleted experience entry");
    Ok(Json(json!({ "message": "Experience deleted successfully" })))
}
