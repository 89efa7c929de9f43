//! Public read endpoints for the portfolio content. Single-row resources
//! (social links, about section) respond with `null` until one exists.

use axum::{extract::State, Json};

use crate::database::models::{About, Contact, Experience, Project, Skill, Social};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /experience
pub async fn list_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    Ok(Json(Experience::list(&state.pool).await?))
}

/// GET /project
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(Project::list(&state.pool).await?))
}

/// GET /skill
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, ApiError> {
    Ok(Json(Skill::list(&state.pool).await?))
}

/// GET /social
pub async fn get_social(State(state): State<AppState>) -> Result<Json<Option<Social>>, ApiError> {
    Ok(Json(Social::fetch_first(&state.pool).await?))
}

/// GET /about
pub async fn get_about(State(state): State<AppState>) -> Result<Json<Option<About>>, ApiError> {
    Ok(Json(About::fetch_first(&state.pool).await?))
}

/// GET /contact
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(Contact::list(&state.pool).await?))
}
