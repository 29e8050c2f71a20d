//! Signup use-case service.
//!
//! # Invariants
//! - A successful create returns the stored signup with its camper and
//!   activity embedded, read back from storage.

use crate::model::signup::{NewSignup, SignupDetail, SignupId};
use crate::repo::signup_repo::SignupRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for signup operations.
pub struct SignupService<R: SignupRepository> {
    repo: R,
}

impl<R: SignupRepository> SignupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one signup and returns it with both ends embedded.
    pub fn create_signup(&self, signup: &NewSignup) -> RepoResult<SignupDetail> {
        let created = self.repo.create_signup(signup)?;
        self.repo
            .get_signup_detail(created.id)?
            .ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "created signup {} not found in read-back",
                    created.id
                ))
            })
    }

    pub fn get_signup_detail(&self, id: SignupId) -> RepoResult<Option<SignupDetail>> {
        self.repo.get_signup_detail(id)
    }
}
