use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::database::models::{project::NewProject, Project};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

use super::utils::require_all;

/// POST /project
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<NewProject>,
) -> Result<impl IntoResponse, ApiError> {
    require_all(&[
        ("name", &payload.name),
        ("description", &payload.description),
        ("image", &payload.image),
        ("link", &payload.link),
        ("github", &payload.github),
    ])?;

    let project = Project::create(&state.pool, &payload).await?;
    info!(admin = %admin.email, id = %project.id, "Created project");
    Ok((StatusCode::CREATED, Json(project)))
}

/// DELETE /project/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if Project::delete(&state.pool, id).await? == 0 {
        return Err(ApiError::not_found("Project not found"));
    }

    info!(admin = %admin.email, %id, "Deleted project");
    Ok(Json(json!({ "message": "Project deleted successfully" })))
}
