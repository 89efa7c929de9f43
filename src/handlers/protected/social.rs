use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tracing::info;
use uuid::Uuid;

use crate::database::models::{
    social::{NewSocial, UpdateSocial},
    Social,
};
use crate::error::ApiError;
use crate::middleware::AuthAdmin;
use crate::state::AppState;

use super::utils::require_all;

/// POST /social
pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Json(payload): Json<NewSocial>,
) -> Result<impl IntoResponse, ApiError> {
    require_all(&[
        ("instagram", &payload.instagram),
        ("github", &payload.github),
        ("linkedin", &payload.linkedin),
        ("pinterest", &payload.pinterest),
    ])?;

    let social = Social::create(&state.pool, &payload).await?;
    info!(admin = %admin.email, id = %social.id, "Created social links");
    Ok((StatusCode::CREATED, Json(social)))
}

/// PUT /social/:id - partial update; absent fields keep their stored value
pub async fn update(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateSocial>,
) -> Result<impl IntoResponse, ApiError> {
    let social = Social::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Social links not found"))?;

    info!(admin = %admin.email, %id, "Updated social links");
    Ok(Json(social))
}
