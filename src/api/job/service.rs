use std::sync::Arc;
use tracing::debug;

use crate::catalog::JobRepository;
use super::models::JobPosting;

/// Job service exposing the read-only catalog
pub struct JobService {
    repository: Arc<dyn JobRepository>,
}

impl JobService {
    /// Create a new JobService over a shared catalog
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    /// The complete catalog in definition order
    pub fn list_jobs(&self) -> &[JobPosting] {
        let jobs = self.repository.list_jobs();
        debug!("Service: Listing {} jobs", jobs.len());
        jobs
    }
}
