use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub icon: String,
    pub color: String,
}

impl Skill {
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, name, category, icon, color, created_at \
             FROM skills ORDER BY created_at",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &PgPool, new: &NewSkill) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO skills (name, category, icon, color) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, category, icon, color, created_at",
        )
        .bind(&new.name)
        .bind(&new.category)
        .bind(&new.icon)
        .bind(&new.color)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
