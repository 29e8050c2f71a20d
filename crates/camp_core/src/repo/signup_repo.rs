//! Signup repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_signup` validates the hour before inserting.
//! - Camper/activity existence is left to the foreign-key constraint; a
//!   dangling reference surfaces as `RepoError::Integrity`.

use super::{ensure_connection_ready, is_foreign_key_violation, RepoError, RepoResult};
use crate::model::activity::Activity;
use crate::model::camper::Camper;
use crate::model::signup::{NewSignup, Signup, SignupDetail, SignupId};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SIGNUP_SELECT_SQL: &str = "SELECT id, time, camper_id, activity_id FROM signups";

/// Repository interface for signup records.
pub trait SignupRepository {
    fn create_signup(&self, signup: &NewSignup) -> RepoResult<Signup>;
    fn get_signup(&self, id: SignupId) -> RepoResult<Option<Signup>>;
    /// Gets one signup with both its camper and its activity embedded.
    fn get_signup_detail(&self, id: SignupId) -> RepoResult<Option<SignupDetail>>;
    /// Lists all signups in insertion order.
    fn list_signups(&self) -> RepoResult<Vec<Signup>>;
}

/// SQLite-backed signup repository.
pub struct SqliteSignupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSignupRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SignupRepository for SqliteSignupRepository<'_> {
    fn create_signup(&self, signup: &NewSignup) -> RepoResult<Signup> {
        signup.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3);",
            params![signup.time, signup.camper_id, signup.activity_id],
        );
        if let Err(err) = inserted {
            if is_foreign_key_violation(&err) {
                warn!(
                    "event=signup_create module=repo status=error error_code=dangling_reference camper_id={} activity_id={}",
                    signup.camper_id, signup.activity_id
                );
                return Err(RepoError::Integrity(format!(
                    "camper {} or activity {} does not exist",
                    signup.camper_id, signup.activity_id
                )));
            }
            return Err(err.into());
        }

        let id = self.conn.last_insert_rowid();
        info!(
            "event=signup_create module=repo status=ok signup_id={id} camper_id={} activity_id={}",
            signup.camper_id, signup.activity_id
        );

        Ok(Signup {
            id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
        })
    }

    fn get_signup(&self, id: SignupId) -> RepoResult<Option<Signup>> {
        let signup = self
            .conn
            .query_row(
                &format!("{SIGNUP_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_signup_row,
            )
            .optional()?;
        Ok(signup)
    }

    fn get_signup_detail(&self, id: SignupId) -> RepoResult<Option<SignupDetail>> {
        let detail = self
            .conn
            .query_row(
                "SELECT
                    s.id,
                    s.time,
                    s.camper_id,
                    s.activity_id,
                    c.name AS camper_name,
                    c.age,
                    a.name AS activity_name,
                    a.difficulty
                 FROM signups s
                 INNER JOIN campers c ON c.id = s.camper_id
                 INNER JOIN activities a ON a.id = s.activity_id
                 WHERE s.id = ?1;",
                [id],
                |row| {
                    let signup = parse_signup_row(row)?;
                    Ok(SignupDetail {
                        camper: Camper {
                            id: signup.camper_id,
                            name: row.get("camper_name")?,
                            age: row.get("age")?,
                        },
                        activity: Activity {
                            id: signup.activity_id,
                            name: row.get("activity_name")?,
                            difficulty: row.get("difficulty")?,
                        },
                        signup,
                    })
                },
            )
            .optional()?;
        Ok(detail)
    }

    fn list_signups(&self) -> RepoResult<Vec<Signup>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SIGNUP_SELECT_SQL} ORDER BY id ASC;"))?;
        let signups = stmt
            .query_map([], parse_signup_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(signups)
    }
}

fn parse_signup_row(row: &Row<'_>) -> rusqlite::Result<Signup> {
    Ok(Signup {
        id: row.get("id")?,
        time: row.get("time")?,
        camper_id: row.get("camper_id")?,
        activity_id: row.get("activity_id")?,
    })
}
