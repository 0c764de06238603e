use crate::models::DbAvailability;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_availability(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    candidate_id: i64,
    user_id: i64,
) -> Result<Option<i16>> {
    let availability = sqlx::query_scalar::<_, i16>(
        r#"
        SELECT availability
        FROM availabilities
        WHERE schedule_id = $1 AND candidate_id = $2 AND user_id = $3
        "#,
    )
    .bind(schedule_id)
    .bind(candidate_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(availability)
}

/// Writes the vote for the key, replacing any existing one, and returns the
/// stored ordinal.
pub async fn upsert_availability(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    candidate_id: i64,
    user_id: i64,
    availability: i16,
) -> Result<i16> {
    tracing::debug!(
        "Upserting availability: schedule_id={}, candidate_id={}, user_id={}, availability={}",
        schedule_id, candidate_id, user_id, availability
    );

    let stored = sqlx::query_scalar::<_, i16>(
        r#"
        INSERT INTO availabilities (schedule_id, candidate_id, user_id, availability)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (schedule_id, candidate_id, user_id)
        DO UPDATE SET availability = EXCLUDED.availability
        RETURNING availability
        "#,
    )
    .bind(schedule_id)
    .bind(candidate_id)
    .bind(user_id)
    .bind(availability)
    .fetch_one(pool)
    .await?;

    Ok(stored)
}

pub async fn get_availabilities_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbAvailability>> {
    let availabilities = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT a.schedule_id, a.candidate_id, a.user_id, u.username, a.availability
        FROM availabilities a
        JOIN users u ON u.user_id = a.user_id
        WHERE a.schedule_id = $1
        ORDER BY a.user_id ASC, a.candidate_id ASC
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(availabilities)
}
