//! Camper domain model.
//!
//! # Responsibility
//! - Define the stored camper record and its create/patch inputs.
//! - Route every field assignment through `validation`.
//!
//! # Invariants
//! - `name` is never empty.
//! - `age` stays within `8..=18`.
//! - A rejected patch leaves the source record untouched.

use super::signup::SignupWithActivity;
use super::validation::{validate_camper_age, validate_camper_name, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned camper identifier.
pub type CamperId = i64;

/// Persisted camper record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camper {
    pub id: CamperId,
    pub name: String,
    pub age: i64,
}

/// Input for creating a camper. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    pub name: String,
    pub age: i64,
}

impl NewCamper {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Checks `name` first, then `age`, and reports the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_camper_name(&self.name)?;
        validate_camper_age(self.age)
    }
}

/// Partial camper update. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl CamperPatch {
    /// Returns `camper` with the present fields applied.
    ///
    /// # Errors
    /// - Returns the first failing field check; nothing is applied in that case.
    pub fn apply_to(&self, camper: &Camper) -> Result<Camper, ValidationError> {
        let mut updated = camper.clone();
        if let Some(name) = self.name.as_ref() {
            validate_camper_name(name)?;
            updated.name = name.clone();
        }
        if let Some(age) = self.age {
            validate_camper_age(age)?;
            updated.age = age;
        }
        Ok(updated)
    }
}

/// Camper together with its signups. Each signup embeds its activity, never
/// the camper again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperDetail {
    #[serde(flatten)]
    pub camper: Camper,
    pub signups: Vec<SignupWithActivity>,
}
