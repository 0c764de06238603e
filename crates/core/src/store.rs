//! Storage ports.
//!
//! The request layer only talks to persistence through these traits.
//! `rollcall-db` provides the Postgres adapter, an in-memory adapter and
//! mockall mocks.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::RollcallResult;
use crate::models::{
    availability::{Availability, AvailabilityRecord},
    comment::Comment,
    schedule::{Candidate, Schedule},
    user::User,
};

/// Read access to schedules and their candidates.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn get_schedule(&self, schedule_id: Uuid) -> RollcallResult<Option<Schedule>>;

    /// Candidates of a schedule ordered by `candidate_id` ascending.
    async fn get_candidates(&self, schedule_id: Uuid) -> RollcallResult<Vec<Candidate>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts the user or refreshes the stored username.
    async fn upsert_user(&self, user: &User) -> RollcallResult<User>;

    async fn get_user(&self, user_id: i64) -> RollcallResult<Option<User>>;
}

/// Tri-state vote records keyed by (schedule, candidate, user).
///
/// Implementations must keep at most one record per key: writing an existing
/// key replaces its value. Records are never deleted.
#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn get_availability(
        &self,
        schedule_id: Uuid,
        candidate_id: i64,
        user_id: i64,
    ) -> RollcallResult<Option<Availability>>;

    /// Writes the value and returns what was persisted.
    async fn upsert_availability(
        &self,
        schedule_id: Uuid,
        candidate_id: i64,
        user_id: i64,
        availability: Availability,
    ) -> RollcallResult<Availability>;

    async fn get_availabilities(&self, schedule_id: Uuid) -> RollcallResult<Vec<AvailabilityRecord>>;
}

/// One free-text comment per (schedule, user), last write wins.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn upsert_comment(
        &self,
        schedule_id: Uuid,
        user_id: i64,
        comment: &str,
    ) -> RollcallResult<Comment>;

    async fn get_comments(&self, schedule_id: Uuid) -> RollcallResult<Vec<Comment>>;
}
