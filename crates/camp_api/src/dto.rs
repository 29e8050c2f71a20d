//! Request bodies and their conversion into model inputs.
//!
//! Absent keys and explicit `null` both count as "missing" on create. On
//! patch, an absent key leaves the field alone while `null` is a value that
//! fails validation.

use camp_core::model::validation::{validate_camper_name, validate_signup_time};
use camp_core::{CamperPatch, NewCamper, NewSignup, ValidationError};
use serde::{Deserialize, Deserializer};

/// `POST /campers`
#[derive(Debug, Default, Deserialize)]
pub struct CreateCamperBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl CreateCamperBody {
    pub fn into_new_camper(self) -> Result<NewCamper, ValidationError> {
        let name = self.name.unwrap_or_default();
        validate_camper_name(&name)?;
        let age = self.age.ok_or(ValidationError::CamperAgeOutOfRange)?;
        let camper = NewCamper::new(name, age);
        camper.validate()?;
        Ok(camper)
    }
}

/// `PATCH /campers/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct PatchCamperBody {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<i64>>,
}

impl PatchCamperBody {
    pub fn into_patch(self) -> Result<CamperPatch, ValidationError> {
        let name = self.name.map(Option::unwrap_or_default);
        if let Some(name) = name.as_deref() {
            validate_camper_name(name)?;
        }
        let age = match self.age {
            Some(Some(age)) => Some(age),
            Some(None) => return Err(ValidationError::CamperAgeOutOfRange),
            None => None,
        };
        Ok(CamperPatch { name, age })
    }
}

/// `POST /signups`
#[derive(Debug, Default, Deserialize)]
pub struct CreateSignupBody {
    #[serde(default)]
    pub camper_id: Option<i64>,
    #[serde(default)]
    pub activity_id: Option<i64>,
    #[serde(default)]
    pub time: Option<i64>,
}

impl CreateSignupBody {
    /// Checks the hour first, then the references.
    pub fn into_new_signup(self) -> Result<NewSignup, ValidationError> {
        let time = self.time.ok_or(ValidationError::SignupTimeOutOfRange)?;
        validate_signup_time(time)?;
        match (self.camper_id, self.activity_id) {
            (Some(camper_id), Some(activity_id)) => {
                Ok(NewSignup::new(camper_id, activity_id, time))
            }
            _ => Err(ValidationError::SignupReferenceMissing),
        }
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent key
/// (`None`, via `#[serde(default)]`).
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
