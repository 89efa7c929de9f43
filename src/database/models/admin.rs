use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Administrator credential. Deliberately not `Serialize`: the stored hash
/// must never reach a response body. At most one row per email; rows are
/// written only by the provisioning CLI and read during login.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, password_hash, created_at, updated_at \
             FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Create or replace the credential for an email address.
    pub async fn upsert(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO admins (email, password_hash) VALUES ($1, $2) \
             ON CONFLICT (email) DO UPDATE \
             SET password_hash = EXCLUDED.password_hash, updated_at = now() \
             RETURNING id, email, password_hash, created_at, updated_at",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }
}
