//! Activity use-case service.

use crate::model::activity::{Activity, ActivityId, NewActivity};
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for activity operations.
pub struct ActivityService<R: ActivityRepository> {
    repo: R,
}

impl<R: ActivityRepository> ActivityService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity> {
        self.repo.create_activity(activity)
    }

    pub fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        self.repo.list_activities()
    }

    /// Deletes an activity and cascades to its signups.
    ///
    /// Deleting an id that is already gone returns `RepoError::NotFound`.
    pub fn delete_activity(&self, id: ActivityId) -> RepoResult<()> {
        self.repo.delete_activity(id)
    }
}
