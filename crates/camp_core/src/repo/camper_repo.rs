//! Camper repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_camper` and `update_camper` validate before writing.
//! - `update_camper` loads, patches and writes inside one transaction.
//! - `delete_camper` removes dependent signups before the camper row.

use super::{ensure_connection_ready, row_exists, EntityKind, RepoError, RepoResult};
use crate::model::activity::Activity;
use crate::model::camper::{Camper, CamperDetail, CamperId, CamperPatch, NewCamper};
use crate::model::signup::{Signup, SignupWithActivity};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const CAMPER_SELECT_SQL: &str = "SELECT id, name, age FROM campers";

/// Repository interface for camper records.
pub trait CamperRepository {
    fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper>;
    fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>>;
    /// Gets one camper with its signups, each carrying its activity.
    fn get_camper_detail(&self, id: CamperId) -> RepoResult<Option<CamperDetail>>;
    /// Lists all campers in insertion order.
    fn list_campers(&self) -> RepoResult<Vec<Camper>>;
    /// Applies the present patch fields and returns the stored result.
    fn update_camper(&self, id: CamperId, patch: &CamperPatch) -> RepoResult<Camper>;
    /// Deletes one camper and all signups that reference it.
    fn delete_camper(&self, id: CamperId) -> RepoResult<()>;
}

/// SQLite-backed camper repository.
pub struct SqliteCamperRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCamperRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CamperRepository for SqliteCamperRepository<'_> {
    fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper> {
        camper.validate()?;

        self.conn.execute(
            "INSERT INTO campers (name, age) VALUES (?1, ?2);",
            params![camper.name.as_str(), camper.age],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=camper_create module=repo status=ok camper_id={id}");

        Ok(Camper {
            id,
            name: camper.name.clone(),
            age: camper.age,
        })
    }

    fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>> {
        find_camper(self.conn, id)
    }

    fn get_camper_detail(&self, id: CamperId) -> RepoResult<Option<CamperDetail>> {
        let Some(camper) = find_camper(self.conn, id)? else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT
                s.id AS signup_id,
                s.time,
                s.camper_id,
                s.activity_id,
                a.name AS activity_name,
                a.difficulty
             FROM signups s
             INNER JOIN activities a ON a.id = s.activity_id
             WHERE s.camper_id = ?1
             ORDER BY s.id ASC;",
        )?;
        let mut rows = stmt.query([id])?;
        let mut signups = Vec::new();
        while let Some(row) = rows.next()? {
            let activity_id: i64 = row.get("activity_id")?;
            signups.push(SignupWithActivity {
                signup: Signup {
                    id: row.get("signup_id")?,
                    time: row.get("time")?,
                    camper_id: row.get("camper_id")?,
                    activity_id,
                },
                activity: Activity {
                    id: activity_id,
                    name: row.get("activity_name")?,
                    difficulty: row.get("difficulty")?,
                },
            });
        }

        Ok(Some(CamperDetail { camper, signups }))
    }

    fn list_campers(&self) -> RepoResult<Vec<Camper>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CAMPER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut campers = Vec::new();
        while let Some(row) = rows.next()? {
            campers.push(parse_camper_row(row)?);
        }
        Ok(campers)
    }

    fn update_camper(&self, id: CamperId, patch: &CamperPatch) -> RepoResult<Camper> {
        let tx = self.conn.unchecked_transaction()?;
        let current = find_camper(&tx, id)?.ok_or(RepoError::NotFound {
            kind: EntityKind::Camper,
            id,
        })?;

        // Rollback on drop covers the validation early return.
        let updated = patch.apply_to(&current)?;
        if updated != current {
            tx.execute(
                "UPDATE campers SET name = ?1, age = ?2 WHERE id = ?3;",
                params![updated.name.as_str(), updated.age, id],
            )?;
        }
        tx.commit()?;

        info!(
            "event=camper_update module=repo status=ok camper_id={id} name_changed={} age_changed={}",
            patch.name.is_some(),
            patch.age.is_some()
        );
        Ok(updated)
    }

    fn delete_camper(&self, id: CamperId) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        if !row_exists(&tx, "campers", id)? {
            return Err(RepoError::NotFound {
                kind: EntityKind::Camper,
                id,
            });
        }

        let removed_signups = tx.execute("DELETE FROM signups WHERE camper_id = ?1;", [id])?;
        tx.execute("DELETE FROM campers WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!(
            "event=camper_delete module=repo status=ok camper_id={id} removed_signups={removed_signups}"
        );
        Ok(())
    }
}

fn find_camper(conn: &Connection, id: CamperId) -> RepoResult<Option<Camper>> {
    let camper = conn
        .query_row(
            &format!("{CAMPER_SELECT_SQL} WHERE id = ?1;"),
            [id],
            |row| Ok(parse_camper_row(row)),
        )
        .optional()?;
    camper.transpose()
}

fn parse_camper_row(row: &Row<'_>) -> RepoResult<Camper> {
    let camper = Camper {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
    };
    if camper.name.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty name in campers.name for id {}",
            camper.id
        )));
    }
    Ok(camper)
}
