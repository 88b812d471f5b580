use sqlx::PgPool;

use crate::jobs::repo_types::{Job, JobStatus};

/// List jobs currently in the given status, newest first.
pub async fn list_with_status(db: &PgPool, status: JobStatus) -> anyhow::Result<Vec<Job>> {
    let rows = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, client_id, title, description, price_cents, status, created_at
        FROM jobs
        WHERE status = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(status)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Jobs whose description exactly matches one of the given strings.
pub async fn list_by_descriptions(db: &PgPool, descriptions: &[String]) -> anyhow::Result<Vec<Job>> {
    let rows = sqlx::query_as::<_, Job>(
        r#"
        SELECT id, client_id, title, description, price_cents, status, created_at
        FROM jobs
        WHERE description = ANY($1)
        ORDER BY created_at ASC
        "#,
    )
    .bind(descriptions)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Delete jobs by exact description match, returning how many rows
/// went away.
pub async fn delete_by_descriptions(db: &PgPool, descriptions: &[String]) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM jobs WHERE description = ANY($1)")
        .bind(descriptions)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
