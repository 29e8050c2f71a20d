//! Field-level validation rules for camp records.
//!
//! # Responsibility
//! - Hold the pure checks every write path runs before touching storage.
//! - Own the exact human-readable messages surfaced to API clients.
//!
//! # Invariants
//! - Checks never mutate; callers decide whether to apply a value.
//! - Display strings are part of the wire contract and must stay stable.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const CAMPER_MIN_AGE: i64 = 8;
pub const CAMPER_MAX_AGE: i64 = 18;
pub const SIGNUP_FIRST_HOUR: i64 = 0;
pub const SIGNUP_LAST_HOUR: i64 = 23;

/// Field invariant violated by a create or update input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Camper name is empty or absent.
    CamperNameMissing,
    /// Camper age is absent or outside `8..=18`.
    CamperAgeOutOfRange,
    /// Signup hour is absent or outside `0..=23`.
    SignupTimeOutOfRange,
    /// Signup is missing a camper or activity reference.
    SignupReferenceMissing,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CamperNameMissing => write!(f, "Camper must have a name"),
            Self::CamperAgeOutOfRange => write!(f, "Camper's age must be between 8 and 18"),
            Self::SignupTimeOutOfRange => write!(f, "Time must be between 0 and 23"),
            Self::SignupReferenceMissing => {
                write!(f, "Signup must reference an existing camper and activity")
            }
        }
    }
}

impl Error for ValidationError {}

pub fn validate_camper_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::CamperNameMissing);
    }
    Ok(())
}

pub fn validate_camper_age(age: i64) -> Result<(), ValidationError> {
    if !(CAMPER_MIN_AGE..=CAMPER_MAX_AGE).contains(&age) {
        return Err(ValidationError::CamperAgeOutOfRange);
    }
    Ok(())
}

pub fn validate_signup_time(time: i64) -> Result<(), ValidationError> {
    if !(SIGNUP_FIRST_HOUR..=SIGNUP_LAST_HOUR).contains(&time) {
        return Err(ValidationError::SignupTimeOutOfRange);
    }
    Ok(())
}
