use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn upsert_user(pool: &Pool<Postgres>, user_id: i64, username: &str) -> Result<DbUser> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (user_id, username)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET username = $2
        RETURNING user_id, username
        "#,
    )
    .bind(user_id)
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, user_id: i64) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT user_id, username
        FROM users
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
