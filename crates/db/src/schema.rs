use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Users are owned by the upstream identity provider; we only mirror names
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id BIGINT PRIMARY KEY,
            username VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedules table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            schedule_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            schedule_name VARCHAR(255) NOT NULL,
            memo TEXT NOT NULL DEFAULT '',
            created_by BIGINT NOT NULL REFERENCES users(user_id),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create candidates table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS candidates (
            candidate_id BIGSERIAL PRIMARY KEY,
            schedule_id UUID NOT NULL REFERENCES schedules(schedule_id),
            candidate_name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One vote per (schedule, candidate, user); the ordinal is the stored value
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availabilities (
            schedule_id UUID NOT NULL REFERENCES schedules(schedule_id),
            candidate_id BIGINT NOT NULL REFERENCES candidates(candidate_id),
            user_id BIGINT NOT NULL REFERENCES users(user_id),
            availability SMALLINT NOT NULL DEFAULT 0,
            PRIMARY KEY (schedule_id, candidate_id, user_id),
            CONSTRAINT valid_availability CHECK (availability BETWEEN 0 AND 2)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create comments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            schedule_id UUID NOT NULL REFERENCES schedules(schedule_id),
            user_id BIGINT NOT NULL REFERENCES users(user_id),
            comment VARCHAR(255) NOT NULL,
            PRIMARY KEY (schedule_id, user_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_schedules_created_by ON schedules(created_by)",
        "CREATE INDEX IF NOT EXISTS idx_candidates_schedule_id ON candidates(schedule_id)",
        "CREATE INDEX IF NOT EXISTS idx_availabilities_schedule_id ON availabilities(schedule_id)",
        "CREATE INDEX IF NOT EXISTS idx_comments_schedule_id ON comments(schedule_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
