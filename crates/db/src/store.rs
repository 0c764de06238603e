//! Postgres adapter for the core storage ports.

use async_trait::async_trait;
use rollcall_core::{
    errors::{RollcallError, RollcallResult},
    models::{
        availability::{Availability, AvailabilityRecord},
        comment::Comment,
        schedule::{Candidate, Schedule},
        user::User,
    },
    store::{CommentStore, ScheduleStore, UserStore, VoteStore},
};
use uuid::Uuid;

use crate::{models::decode_availability, repositories, DbPool};

/// Implements every store trait on top of the repository functions.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgStore {
    async fn get_schedule(&self, schedule_id: Uuid) -> RollcallResult<Option<Schedule>> {
        let schedule = repositories::schedule::get_schedule_by_id(&self.pool, schedule_id)
            .await
            .map_err(RollcallError::Database)?;
        Ok(schedule.map(Schedule::from))
    }

    async fn get_candidates(&self, schedule_id: Uuid) -> RollcallResult<Vec<Candidate>> {
        let candidates =
            repositories::candidate::get_candidates_by_schedule_id(&self.pool, schedule_id)
                .await
                .map_err(RollcallError::Database)?;
        Ok(candidates.into_iter().map(Candidate::from).collect())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn upsert_user(&self, user: &User) -> RollcallResult<User> {
        let user = repositories::user::upsert_user(&self.pool, user.user_id, &user.username)
            .await
            .map_err(RollcallError::Database)?;
        Ok(user.into())
    }

    async fn get_user(&self, user_id: i64) -> RollcallResult<Option<User>> {
        let user = repositories::user::get_user_by_id(&self.pool, user_id)
            .await
            .map_err(RollcallError::Database)?;
        Ok(user.map(User::from))
    }
}

#[async_trait]
impl VoteStore for PgStore {
    async fn get_availability(
        &self,
        schedule_id: Uuid,
        candidate_id: i64,
        user_id: i64,
    ) -> RollcallResult<Option<Availability>> {
        let ordinal = repositories::availability::get_availability(
            &self.pool,
            schedule_id,
            candidate_id,
            user_id,
        )
        .await
        .map_err(RollcallError::Database)?;

        ordinal
            .map(decode_availability)
            .transpose()
            .map_err(RollcallError::Database)
    }

    async fn upsert_availability(
        &self,
        schedule_id: Uuid,
        candidate_id: i64,
        user_id: i64,
        availability: Availability,
    ) -> RollcallResult<Availability> {
        let stored = repositories::availability::upsert_availability(
            &self.pool,
            schedule_id,
            candidate_id,
            user_id,
            availability.ordinal(),
        )
        .await
        .map_err(RollcallError::Database)?;

        decode_availability(stored).map_err(RollcallError::Database)
    }

    async fn get_availabilities(&self, schedule_id: Uuid) -> RollcallResult<Vec<AvailabilityRecord>> {
        let rows =
            repositories::availability::get_availabilities_by_schedule_id(&self.pool, schedule_id)
                .await
                .map_err(RollcallError::Database)?;

        rows.into_iter()
            .map(|row| row.into_record().map_err(RollcallError::Database))
            .collect()
    }
}

#[async_trait]
impl CommentStore for PgStore {
    async fn upsert_comment(
        &self,
        schedule_id: Uuid,
        user_id: i64,
        comment: &str,
    ) -> RollcallResult<Comment> {
        let comment =
            repositories::comment::upsert_comment(&self.pool, schedule_id, user_id, comment)
                .await
                .map_err(RollcallError::Database)?;
        Ok(comment.into())
    }

    async fn get_comments(&self, schedule_id: Uuid) -> RollcallResult<Vec<Comment>> {
        let comments = repositories::comment::get_comments_by_schedule_id(&self.pool, schedule_id)
            .await
            .map_err(RollcallError::Database)?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}
