//! In-process store backed by ordered maps.
//!
//! Honours the same contracts as [`crate::PgStore`]: one vote per
//! (schedule, candidate, user), one comment per (schedule, user), candidates
//! returned by ascending id. Schedules and candidates are seeded directly
//! since the service itself never creates them.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use rollcall_core::{
    errors::RollcallResult,
    models::{
        availability::{Availability, AvailabilityRecord},
        comment::Comment,
        schedule::{Candidate, Schedule},
        user::User,
    },
    store::{CommentStore, ScheduleStore, UserStore, VoteStore},
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    schedules: BTreeMap<Uuid, Schedule>,
    candidates: BTreeMap<i64, Candidate>,
    availabilities: BTreeMap<(Uuid, i64, i64), Availability>,
    comments: BTreeMap<(Uuid, i64), String>,
    next_candidate_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a schedule owned by `created_by` and returns it.
    pub async fn insert_schedule(&self, schedule_name: &str, memo: &str, created_by: &User) -> Schedule {
        let mut tables = self.tables.write().await;
        tables
            .users
            .entry(created_by.user_id)
            .or_insert_with(|| created_by.clone());

        let schedule = Schedule {
            schedule_id: Uuid::new_v4(),
            schedule_name: schedule_name.to_string(),
            memo: memo.to_string(),
            created_by: created_by.user_id,
            updated_at: Utc::now(),
        };
        tables.schedules.insert(schedule.schedule_id, schedule.clone());
        schedule
    }

    /// Seeds a candidate with the next sequential id.
    pub async fn insert_candidate(&self, schedule_id: Uuid, candidate_name: &str) -> Candidate {
        let mut tables = self.tables.write().await;
        tables.next_candidate_id += 1;

        let candidate = Candidate {
            candidate_id: tables.next_candidate_id,
            schedule_id,
            candidate_name: candidate_name.to_string(),
        };
        tables.candidates.insert(candidate.candidate_id, candidate.clone());
        candidate
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    async fn get_schedule(&self, schedule_id: Uuid) -> RollcallResult<Option<Schedule>> {
        Ok(self.tables.read().await.schedules.get(&schedule_id).cloned())
    }

    async fn get_candidates(&self, schedule_id: Uuid) -> RollcallResult<Vec<Candidate>> {
        let tables = self.tables.read().await;
        Ok(tables
            .candidates
            .values()
            .filter(|candidate| candidate.schedule_id == schedule_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn upsert_user(&self, user: &User) -> RollcallResult<User> {
        self.tables
            .write()
            .await
            .users
            .insert(user.user_id, user.clone());
        Ok(user.clone())
    }

    async fn get_user(&self, user_id: i64) -> RollcallResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&user_id).cloned())
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn get_availability(
        &self,
        schedule_id: Uuid,
        candidate_id: i64,
        user_id: i64,
    ) -> RollcallResult<Option<Availability>> {
        let tables = self.tables.read().await;
        Ok(tables
            .availabilities
            .get(&(schedule_id, candidate_id, user_id))
            .copied())
    }

    async fn upsert_availability(
        &self,
        schedule_id: Uuid,
        candidate_id: i64,
        user_id: i64,
        availability: Availability,
    ) -> RollcallResult<Availability> {
        self.tables
            .write()
            .await
            .availabilities
            .insert((schedule_id, candidate_id, user_id), availability);
        Ok(availability)
    }

    async fn get_availabilities(&self, schedule_id: Uuid) -> RollcallResult<Vec<AvailabilityRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .availabilities
            .iter()
            .filter(|((schedule, _, _), _)| *schedule == schedule_id)
            .filter_map(|(&(_, candidate_id, user_id), &availability)| {
                // Same inner join as the SQL query: votes of unknown users are dropped
                tables.users.get(&user_id).map(|user| AvailabilityRecord {
                    schedule_id,
                    candidate_id,
                    user: user.clone(),
                    availability,
                })
            })
            .collect())
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn upsert_comment(
        &self,
        schedule_id: Uuid,
        user_id: i64,
        comment: &str,
    ) -> RollcallResult<Comment> {
        self.tables
            .write()
            .await
            .comments
            .insert((schedule_id, user_id), comment.to_string());
        Ok(Comment {
            schedule_id,
            user_id,
            comment: comment.to_string(),
        })
    }

    async fn get_comments(&self, schedule_id: Uuid) -> RollcallResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|((schedule, _), _)| *schedule == schedule_id)
            .map(|(&(schedule_id, user_id), comment)| Comment {
                schedule_id,
                user_id,
                comment: comment.clone(),
            })
            .collect())
    }
}
