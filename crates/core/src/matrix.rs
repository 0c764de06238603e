//! # Availability Matrix
//!
//! Turns the sparse vote records of a schedule into the dense grid shown on
//! the schedule page.
//!
//! ## Algorithm
//!
//! 1. Group records by voter into sparse `candidate_id -> Availability` maps.
//!    Should the store ever hand over two records for one key, the later one
//!    in iteration order wins.
//! 2. Collect the participants: the viewer plus everyone who voted at least
//!    once, deduplicated by `user_id`.
//! 3. Sort participants by username (byte-wise), ties by `user_id`.
//! 4. Fill every participant x candidate cell, defaulting to
//!    [`Availability::Absent`] where no record exists.
//!
//! Runs in O(records + participants x candidates) and touches nothing but
//! its inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{
    availability::{Availability, AvailabilityRecord},
    schedule::Candidate,
    user::User,
};

/// A row of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: i64,
    pub username: String,
    pub is_self: bool,
}

/// Dense participant x candidate grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityMatrix {
    /// Columns, ordered by `candidate_id` ascending.
    pub candidates: Vec<Candidate>,
    /// Rows, ordered by `username` then `user_id`.
    pub participants: Vec<Participant>,
    /// `user_id -> candidate_id -> availability`, one entry per cell.
    pub cells: BTreeMap<i64, BTreeMap<i64, Availability>>,
}

impl AvailabilityMatrix {
    pub fn get(&self, user_id: i64, candidate_id: i64) -> Option<Availability> {
        self.cells.get(&user_id)?.get(&candidate_id).copied()
    }

    /// Availabilities of one participant in column order.
    pub fn row(&self, user_id: i64) -> Option<Vec<Availability>> {
        let row = self.cells.get(&user_id)?;
        Some(
            self.candidates
                .iter()
                .filter_map(|candidate| row.get(&candidate.candidate_id).copied())
                .collect(),
        )
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the dense availability matrix for `viewer`.
///
/// The caller guarantees that `candidates` and `records` belong to the same
/// schedule. Records pointing at a candidate outside `candidates` are
/// ignored, so the grid always has exactly `participants x candidates` cells.
pub fn build_matrix(
    candidates: &[Candidate],
    viewer: &User,
    records: &[AvailabilityRecord],
) -> AvailabilityMatrix {
    let mut candidates = candidates.to_vec();
    candidates.sort_by_key(|candidate| candidate.candidate_id);

    let mut sparse: BTreeMap<i64, BTreeMap<i64, Availability>> = BTreeMap::new();
    let mut users: BTreeMap<i64, &User> = BTreeMap::new();
    users.insert(viewer.user_id, viewer);

    for record in records {
        sparse
            .entry(record.user.user_id)
            .or_default()
            .insert(record.candidate_id, record.availability);
        users.entry(record.user.user_id).or_insert(&record.user);
    }

    let mut participants: Vec<Participant> = users
        .into_values()
        .map(|user| Participant {
            user_id: user.user_id,
            username: user.username.clone(),
            is_self: user.user_id == viewer.user_id,
        })
        .collect();
    participants.sort_by(|a, b| {
        a.username
            .cmp(&b.username)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let cells = participants
        .iter()
        .map(|participant| {
            let votes = sparse.get(&participant.user_id);
            let row = candidates
                .iter()
                .map(|candidate| {
                    let availability = votes
                        .and_then(|votes| votes.get(&candidate.candidate_id))
                        .copied()
                        .unwrap_or_default();
                    (candidate.candidate_id, availability)
                })
                .collect();
            (participant.user_id, row)
        })
        .collect();

    AvailabilityMatrix {
        candidates,
        participants,
        cells,
    }
}
