use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tracing::info;
use uuid::Uuid;

use crate::database::models::{
    about::{NewAbout, UpdateAbout},
    About,
};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

use super::utils::require_all;

/// POST /about
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<NewAbout>,
) -> Result<impl IntoResponse, ApiError> {
    require_all(&[
        ("skills", &payload.skills),
        ("description", &payload.description),
        ("image", &payload.image),
    ])?;

    let about = About::create(&state.pool, &payload).await?;
    info!(admin = %admin.email, id = %about.id, "Created about section");
    Ok((StatusCode::CREATED, Json(about)))
}

/// PUT /about/:id - partial update; absent fields keep their stored value
pub async fn update(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateAbout>,
) -> Result<impl IntoResponse, ApiError> {
    let about = About::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| ApiError::not_found("About section not found"))?;

    info!(admin = %admin.email, %id, "Updated about section");
    Ok(Json(about))
}
