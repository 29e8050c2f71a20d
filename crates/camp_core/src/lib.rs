//! Core domain logic for the camp records service.
//! This crate is the single source of truth for record invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::activity::{Activity, ActivityDetail, ActivityId, NewActivity};
pub use model::camper::{Camper, CamperDetail, CamperId, CamperPatch, NewCamper};
pub use model::signup::{
    NewSignup, Signup, SignupDetail, SignupId, SignupWithActivity, SignupWithCamper,
};
pub use model::validation::ValidationError;
pub use repo::activity_repo::{ActivityRepository, SqliteActivityRepository};
pub use repo::camper_repo::{CamperRepository, SqliteCamperRepository};
pub use repo::signup_repo::{SignupRepository, SqliteSignupRepository};
pub use repo::{EntityKind, RepoError, RepoResult};
pub use service::activity_service::ActivityService;
pub use service::camper_service::CamperService;
pub use service::seed_service::{seed_sample_data, SeedSummary};
pub use service::signup_service::SignupService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
