use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Social link set for the site. The site renders a single row; `fetch_first`
/// mirrors that.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    pub id: Uuid,
    pub instagram: String,
    pub github: String,
    pub linkedin: String,
    pub pinterest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewSocial {
    pub instagram: String,
    pub github: String,
    pub linkedin: String,
    pub pinterest: String,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateSocial {
    pub instagram: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub pinterest: Option<String>,
}

impl Social {
    pub async fn fetch_first(pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, instagram, github, linkedin, pinterest, created_at, updated_at \
             FROM social_links ORDER BY created_at LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, new: &NewSocial) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO social_links (instagram, github, linkedin, pinterest) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, instagram, github, linkedin, pinterest, created_at, updated_at",
        )
        .bind(&new.instagram)
        .bind(&new.github)
        .bind(&new.linkedin)
        .bind(&new.pinterest)
        .fetch_one(pool)
        .await
    }

    /// Returns `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: &UpdateSocial,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE social_links SET \
               instagram = COALESCE($2, instagram), \
               github    = COALESCE($3, github), \
               linkedin  = COALESCE($4, linkedin), \
               pinterest = COALESCE($5, pinterest), \
               updated_at = now() \
             WHERE id = $1 \
             RETURNING id, instagram, github, linkedin, pinterest, created_at, updated_at",
        )
        .bind(id)
        .bind(&changes.instagram)
        .bind(&changes.github)
        .bind(&changes.linkedin)
        .bind(&changes.pinterest)
        .fetch_optional(pool)
        .await
    }
}
