use chrono::{DateTime, Utc};
use eyre::Result;
use rollcall_core::models::{
    availability::{Availability, AvailabilityRecord},
    comment::Comment,
    schedule::{Candidate, Schedule},
    user::User,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub schedule_id: Uuid,
    pub schedule_name: String,
    pub memo: String,
    pub created_by: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCandidate {
    pub candidate_id: i64,
    pub schedule_id: Uuid,
    pub candidate_name: String,
}

/// Vote row joined with the voter's username.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub schedule_id: Uuid,
    pub candidate_id: i64,
    pub user_id: i64,
    pub username: String,
    pub availability: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbComment {
    pub schedule_id: Uuid,
    pub user_id: i64,
    pub comment: String,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            user_id: row.user_id,
            username: row.username,
        }
    }
}

impl From<DbSchedule> for Schedule {
    fn from(row: DbSchedule) -> Self {
        Schedule {
            schedule_id: row.schedule_id,
            schedule_name: row.schedule_name,
            memo: row.memo,
            created_by: row.created_by,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbCandidate> for Candidate {
    fn from(row: DbCandidate) -> Self {
        Candidate {
            candidate_id: row.candidate_id,
            schedule_id: row.schedule_id,
            candidate_name: row.candidate_name,
        }
    }
}

impl From<DbComment> for Comment {
    fn from(row: DbComment) -> Self {
        Comment {
            schedule_id: row.schedule_id,
            user_id: row.user_id,
            comment: row.comment,
        }
    }
}

impl DbAvailability {
    pub fn into_record(self) -> Result<AvailabilityRecord> {
        Ok(AvailabilityRecord {
            schedule_id: self.schedule_id,
            candidate_id: self.candidate_id,
            user: User {
                user_id: self.user_id,
                username: self.username,
            },
            availability: decode_availability(self.availability)?,
        })
    }
}

/// Maps a stored ordinal back to its [`Availability`].
pub fn decode_availability(ordinal: i16) -> Result<Availability> {
    Availability::try_from(ordinal)
        .map_err(|e| eyre::eyre!("Corrupt availability column: {}", e))
}
