//! Signup domain model and its nested read projections.
//!
//! # Responsibility
//! - Define the camper/activity/hour association record.
//! - Provide cycle-free projections for nested responses.
//!
//! # Invariants
//! - `time` stays within `0..=23`.
//! - Projections embed at most one level: an embedded camper or activity
//!   never carries its own signups.
//! - Duplicate (camper, activity, time) triples are allowed.

use super::activity::{Activity, ActivityId};
use super::camper::{Camper, CamperId};
use super::validation::{validate_signup_time, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned signup identifier.
pub type SignupId = i64;

/// Persisted signup record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    pub id: SignupId,
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
}

/// Input for creating a signup.
///
/// Reference existence is not checked here; storage enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
    pub time: i64,
}

impl NewSignup {
    pub fn new(camper_id: CamperId, activity_id: ActivityId, time: i64) -> Self {
        Self {
            camper_id,
            activity_id,
            time,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_signup_time(self.time)
    }
}

/// Signup as listed under its camper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupWithActivity {
    #[serde(flatten)]
    pub signup: Signup,
    pub activity: Activity,
}

/// Signup as listed under its activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupWithCamper {
    #[serde(flatten)]
    pub signup: Signup,
    pub camper: Camper,
}

/// Signup with both ends embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupDetail {
    #[serde(flatten)]
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}
