use crate::models::DbComment;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn upsert_comment(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
    user_id: i64,
    comment: &str,
) -> Result<DbComment> {
    let comment = sqlx::query_as::<_, DbComment>(
        r#"
        INSERT INTO comments (schedule_id, user_id, comment)
        VALUES ($1, $2, $3)
        ON CONFLICT (schedule_id, user_id)
        DO UPDATE SET comment = EXCLUDED.comment
        RETURNING schedule_id, user_id, comment
        "#,
    )
    .bind(schedule_id)
    .bind(user_id)
    .bind(comment)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

pub async fn get_comments_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbComment>> {
    let comments = sqlx::query_as::<_, DbComment>(
        r#"
        SELECT schedule_id, user_id, comment
        FROM comments
        WHERE schedule_id = $1
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}
