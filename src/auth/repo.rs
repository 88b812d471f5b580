use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::dto::UserProfile;
use crate::auth::repo_types::{User, UserRole};

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, role, is_online, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password. Ids are opaque to
    /// clients; we mint them here rather than in the database.
    pub async fn create(
        db: &PgPool,
        email: &str,
        name: &str,
        password_hash: &str,
        role: UserRole,
    ) -> anyhow::Result<User> {
        let id = Uuid::new_v4().to_string();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, name, password_hash, role, is_online)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING id, email, name, password_hash, role, is_online, created_at
            "#,
        )
        .bind(&id)
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(role)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Flip the presence flag. A no-op for unknown ids.
    pub async fn set_online(db: &PgPool, id: &str, online: bool) -> anyhow::Result<()> {
        sqlx::query("UPDATE users SET is_online = $2 WHERE id = $1")
            .bind(id)
            .bind(online)
            .execute(db)
            .await?;
        Ok(())
    }
}

impl UserProfile {
    /// Projected lookup used for session resolution: only the public
    /// columns are requested from the store.
    pub async fn find_by_id(db: &PgPool, id: &str) -> anyhow::Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT id, email, name, role, is_online
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }
}
