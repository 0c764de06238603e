use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::RollcallError;
use crate::models::user::User;

/// Tri-state vote of one user on one candidate.
///
/// The discriminants are the storage and wire encoding: votes travel as the
/// small integers `0`, `1` and `2`, never as names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Availability {
    #[default]
    Absent = 0,
    Undecided = 1,
    Attending = 2,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Absent,
        Availability::Undecided,
        Availability::Attending,
    ];

    pub fn ordinal(self) -> i16 {
        self as i16
    }

    /// Successor in the cycle `Absent -> Undecided -> Attending -> Absent`.
    pub fn next(self) -> Self {
        match self {
            Availability::Absent => Availability::Undecided,
            Availability::Undecided => Availability::Attending,
            Availability::Attending => Availability::Absent,
        }
    }
}

impl From<Availability> for i16 {
    fn from(value: Availability) -> Self {
        value.ordinal()
    }
}

impl TryFrom<i16> for Availability {
    type Error = RollcallError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Availability::Absent),
            1 => Ok(Availability::Undecided),
            2 => Ok(Availability::Attending),
            other => Err(RollcallError::Validation(format!(
                "availability must be 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Availability::Absent => "absent",
            Availability::Undecided => "undecided",
            Availability::Attending => "attending",
        };
        f.write_str(label)
    }
}

/// A stored vote, joined with the voter's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub schedule_id: Uuid,
    pub candidate_id: i64,
    pub user: User,
    pub availability: Availability,
}

/// Body of a toggle action. The value is what the client expects to be
/// stored next; the server recomputes it and never persists this field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleAvailabilityRequest {
    #[serde(default)]
    pub availability: Option<Availability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub availability: Availability,
}
