//! Activity repository contract and SQLite implementation.
//!
//! # Invariants
//! - `delete_activity` removes every signup referencing the activity, then
//!   the activity row, in one transaction.
//! - Campers referenced by removed signups are never touched.

use super::{ensure_connection_ready, row_exists, EntityKind, RepoError, RepoResult};
use crate::model::activity::{Activity, ActivityDetail, ActivityId, NewActivity};
use crate::model::camper::Camper;
use crate::model::signup::{Signup, SignupWithCamper};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const ACTIVITY_SELECT_SQL: &str = "SELECT id, name, difficulty FROM activities";

/// Repository interface for activity records.
pub trait ActivityRepository {
    fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity>;
    fn get_activity(&self, id: ActivityId) -> RepoResult<Option<Activity>>;
    /// Gets one activity with its signups, each carrying its camper.
    fn get_activity_detail(&self, id: ActivityId) -> RepoResult<Option<ActivityDetail>>;
    /// Lists all activities in insertion order.
    fn list_activities(&self) -> RepoResult<Vec<Activity>>;
    /// Deletes one activity and all signups that reference it.
    fn delete_activity(&self, id: ActivityId) -> RepoResult<()>;
}

/// SQLite-backed activity repository.
pub struct SqliteActivityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ActivityRepository for SqliteActivityRepository<'_> {
    fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity> {
        self.conn.execute(
            "INSERT INTO activities (name, difficulty) VALUES (?1, ?2);",
            params![activity.name.as_str(), activity.difficulty],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=activity_create module=repo status=ok activity_id={id}");

        Ok(Activity {
            id,
            name: activity.name.clone(),
            difficulty: activity.difficulty,
        })
    }

    fn get_activity(&self, id: ActivityId) -> RepoResult<Option<Activity>> {
        let activity = self
            .conn
            .query_row(
                &format!("{ACTIVITY_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_activity_row,
            )
            .optional()?;
        Ok(activity)
    }

    fn get_activity_detail(&self, id: ActivityId) -> RepoResult<Option<ActivityDetail>> {
        let Some(activity) = self.get_activity(id)? else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT
                s.id AS signup_id,
                s.time,
                s.camper_id,
                s.activity_id,
                c.name AS camper_name,
                c.age
             FROM signups s
             INNER JOIN campers c ON c.id = s.camper_id
             WHERE s.activity_id = ?1
             ORDER BY s.id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut signups = Vec::new();
        while let Some(row) = rows.next()? {
            let camper_id: i64 = row.get("camper_id")?;
            signups.push(SignupWithCamper {
                signup: Signup {
                    id: row.get("signup_id")?,
                    time: row.get("time")?,
                    camper_id,
                    activity_id: row.get("activity_id")?,
                },
                camper: Camper {
                    id: camper_id,
                    name: row.get("camper_name")?,
                    age: row.get("age")?,
                },
            });
        }

        Ok(Some(ActivityDetail { activity, signups }))
    }

    fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACTIVITY_SELECT_SQL} ORDER BY id ASC;"))?;
        let activities = stmt
            .query_map([], parse_activity_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(activities)
    }

    fn delete_activity(&self, id: ActivityId) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        if !row_exists(&tx, "activities", id)? {
            return Err(RepoError::NotFound {
                kind: EntityKind::Activity,
                id,
            });
        }

        let removed_signups = tx.execute("DELETE FROM signups WHERE activity_id = ?1;", [id])?;
        tx.execute("DELETE FROM activities WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=activity_delete module=repo status=ok activity_id={id} removed_signups={removed_signups}"
        );
        Ok(())
    }
}

fn parse_activity_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity {
        id: row.get("id")?,
        name: row.get("name")?,
        difficulty: row.get("difficulty")?,
    })
}
