use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: Uuid,
    pub skills: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewAbout {
    pub skills: String,
    pub description: String,
    pub image: String,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateAbout {
    pub skills: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl About {
    pub async fn fetch_first(pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, skills, description, image, created_at, updated_at \
             FROM about_sections ORDER BY created_at LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, new: &NewAbout) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO about_sections (skills, description, image) \
             VALUES ($1, $2, $3) \
             RETURNING id, skills, description, image, created_at, updated_at",
        )
        .bind(&new.skills)
        .bind(&new.description)
        .bind(&new.image)
        .fetch_one(pool)
        .await
    }

    /// Returns `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: &UpdateAbout,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE about_sections SET \
               skills      = COALESCE($2, skills), \
               description = COALESCE($3, description), \
               image       = COALESCE($4, image), \
               updated_at  = now() \
             WHERE id = $1 \
             RETURNING id, skills, description, image, created_at, updated_at",
        )
        .bind(id)
        .bind(&changes.skills)
        .bind(&changes.description)
        .bind(&changes.image)
        .fetch_optional(pool)
        .await
    }
}
