use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Experience {
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, title, company, start_date, end_date, description, created_at \
             FROM experiences ORDER BY created_at",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &PgPool, new: &NewExperience) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO experiences (title, company, start_date, end_date, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, company, start_date, end_date, description, created_at",
        )
        .bind(&new.title)
        .bind(&new.company)
        .bind(&new.start_date)
        .bind(&new.end_date)
        .bind(&new.description)
        .fetch_one(pool)
        .await
    }

    /// Returns the number of rows removed (0 when the id does not exist).
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
