//! Camper use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::camper::{Camper, CamperDetail, CamperId, CamperPatch, NewCamper};
use crate::repo::camper_repo::CamperRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for camper operations.
pub struct CamperService<R: CamperRepository> {
    repo: R,
}

impl<R: CamperRepository> CamperService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new camper.
    pub fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper> {
        self.repo.create_camper(camper)
    }

    pub fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>> {
        self.repo.get_camper(id)
    }

    /// Gets one camper with its signups and their activities.
    pub fn get_camper_detail(&self, id: CamperId) -> RepoResult<Option<CamperDetail>> {
        self.repo.get_camper_detail(id)
    }

    pub fn list_campers(&self) -> RepoResult<Vec<Camper>> {
        self.repo.list_campers()
    }

    /// Applies a partial update.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_camper(&self, id: CamperId, patch: &CamperPatch) -> RepoResult<Camper> {
        self.repo.update_camper(id, patch)
    }

    /// Deletes a camper together with its signups.
    pub fn delete_camper(&self, id: CamperId) -> RepoResult<()> {
        self.repo.delete_camper(id)
    }
}
