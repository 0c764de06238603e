use crate::models::DbSchedule;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_schedule_by_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Option<DbSchedule>> {
    tracing::debug!("Getting schedule by id: {}", schedule_id);

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT schedule_id, schedule_name, memo, created_by, updated_at
        FROM schedules
        WHERE schedule_id = $1
        "#,
    )
    .bind(schedule_id)
    .fetch_optional(pool)
    .await?;

    if let Some(s) = &schedule {
        tracing::debug!("Schedule found: id={}, name={}", s.schedule_id, s.schedule_name);
    } else {
        tracing::debug!("Schedule not found: id={}", schedule_id);
    }

    Ok(schedule)
}
