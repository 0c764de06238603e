use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::matrix::Participant;
use crate::models::availability::Availability;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub schedule_id: Uuid,
    pub schedule_name: String,
    pub memo: String,
    pub created_by: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: i64,
    pub schedule_id: Uuid,
    pub candidate_name: String,
}

/// Everything needed to render a schedule page: the schedule itself, its
/// candidates in column order, the participant rows and the dense matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetScheduleResponse {
    pub schedule: Schedule,
    pub candidates: Vec<Candidate>,
    pub participants: Vec<Participant>,
    pub matrix: BTreeMap<i64, BTreeMap<i64, Availability>>,
    pub comments: BTreeMap<i64, String>,
}
