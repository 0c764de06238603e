use crate::models::DbCandidate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_candidates_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbCandidate>> {
    let candidates = sqlx::query_as::<_, DbCandidate>(
        r#"
        SELECT candidate_id, schedule_id, candidate_name
        FROM candidates
        WHERE schedule_id = $1
        ORDER BY candidate_id ASC
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(candidates)
}
