//! Sample data loader for local development.
//!
//! # Invariants
//! - Seeding replaces all camp records in one transaction.
//! - Every seeded record goes through the normal repository write paths.

use crate::model::activity::NewActivity;
use crate::model::camper::NewCamper;
use crate::model::signup::NewSignup;
use crate::repo::activity_repo::{ActivityRepository, SqliteActivityRepository};
use crate::repo::camper_repo::{CamperRepository, SqliteCamperRepository};
use crate::repo::signup_repo::{SignupRepository, SqliteSignupRepository};
use crate::repo::RepoResult;
use log::info;
use rusqlite::Connection;

const SEED_CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas", 11),
    ("Ashley", 13),
    ("Tyrone", 16),
    ("Joel", 18),
];

const SEED_ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Rock climbing", 5),
    ("Arts and crafts", 1),
    ("Swimming", 2),
];

/// Counts of records written by `seed_sample_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub campers: usize,
    pub activities: usize,
    pub signups: usize,
}

/// Clears all camp tables and inserts the fixed sample set.
pub fn seed_sample_data(conn: &mut Connection) -> RepoResult<SeedSummary> {
    let tx = conn.transaction()?;
    tx.execute_batch(
        "DELETE FROM signups;
         DELETE FROM activities;
         DELETE FROM campers;
         DELETE FROM sqlite_sequence WHERE name IN ('signups', 'activities', 'campers');",
    )?;

    let campers = {
        let repo = SqliteCamperRepository::try_new(&tx)?;
        SEED_CAMPERS
            .iter()
            .map(|(name, age)| repo.create_camper(&NewCamper::new(*name, *age)))
            .collect::<RepoResult<Vec<_>>>()?
    };
    let activities = {
        let repo = SqliteActivityRepository::try_new(&tx)?;
        SEED_ACTIVITIES
            .iter()
            .map(|(name, difficulty)| repo.create_activity(&NewActivity::new(*name, *difficulty)))
            .collect::<RepoResult<Vec<_>>>()?
    };

    let mut signups = 0;
    {
        let repo = SqliteSignupRepository::try_new(&tx)?;
        // Deterministic spread: each camper takes two activities at distinct hours.
        for (index, camper) in campers.iter().enumerate() {
            for offset in 0..2 {
                let activity = &activities[(index + offset * 2) % activities.len()];
                let time = (9 + index as i64 + offset as i64 * 4) % 24;
                repo.create_signup(&NewSignup::new(camper.id, activity.id, time))?;
                signups += 1;
            }
        }
    }
    tx.commit()?;

    let summary = SeedSummary {
        campers: campers.len(),
        activities: activities.len(),
        signups,
    };
    info!(
        "event=seed module=service status=ok campers={} activities={} signups={}",
        summary.campers, summary.activities, summary.signups
    );
    Ok(summary)
}
