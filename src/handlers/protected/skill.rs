use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::database::models::{skill::NewSkill, Skill};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

use super::utils::require_all;

/// POST /skill
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<NewSkill>,
) -> Result<impl IntoResponse, ApiError> {
    require_all(&[
        ("name", &payload.name),
        ("category", &payload.category),
        ("icon", &payload.icon),
        ("color", &payload.color),
    ])?;

    let skill = Skill::create(&state.pool, &payload).await?;
    info!(admin = %admin.email, id = %skill.id, "Created skill");
    Ok((StatusCode::CREATED, Json(skill)))
}

/// DELETE /skill/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if Skill::delete(&state.pool, id).await? == 0 {
        return Err(ApiError::not_found("Skill not found"));
    }

    info!(admin = %admin.email, %id, "Deleted skill");
    Ok(Json(json!({ "message": "Skill deleted successfully" })))
}
