use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub github: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub github: String,
}

impl Project {
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, name, description, image, link, github, created_at \
             FROM projects ORDER BY created_at",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &PgPool, new: &NewProject) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO projects (name, description, image, link, github) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, description, image, link, github, created_at",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.image)
        .bind(&new.link)
        .bind(&new.github)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
