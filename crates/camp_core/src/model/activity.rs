//! Activity domain model.
//!
//! Activities carry no semantic validation: `name` and `difficulty` are only
//! required to be present, which the type system and `NOT NULL` columns
//! already guarantee.

use super::signup::SignupWithCamper;
use serde::{Deserialize, Serialize};

/// Storage-assigned activity identifier.
pub type ActivityId = i64;

/// Persisted activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub difficulty: i64,
}

/// Input for creating an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i64,
}

impl NewActivity {
    pub fn new(name: impl Into<String>, difficulty: i64) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }
}

/// Activity together with its signups. Each signup embeds its camper, never
/// the activity again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDetail {
    #[serde(flatten)]
    pub activity: Activity,
    pub signups: Vec<SignupWithCamper>,
}
