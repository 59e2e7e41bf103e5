use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::api::job::JobPosting;
use crate::catalog::JobRepository;
use super::models::SkillMatchMode;

/// Matches candidate skills against the catalog
pub struct MatchService {
    repository: Arc<dyn JobRepository>,
    mode: SkillMatchMode,
}

impl MatchService {
    pub fn new(repository: Arc<dyn JobRepository>, mode: SkillMatchMode) -> Self {
        Self { repository, mode }
    }

    /// Jobs whose required skills share at least one entry with `skills`
    ///
    /// Result keeps catalog order; jobs are not ranked by overlap size.
    pub fn match_jobs(&self, skills: &[String]) -> Vec<JobPosting> {
        let candidate: HashSet<_> = skills.iter().map(|s| self.mode.normalize(s)).collect();

        let matched: Vec<JobPosting> = self
            .repository
            .list_jobs()
            .iter()
            .filter(|job| {
                job.required_skills
                    .iter()
                    .any(|required| candidate.contains(&self.mode.normalize(required)))
            })
            .cloned()
            .collect();

        info!(
            "Service: Matched {} jobs for {} candidate skills",
            matched.len(),
            skills.len()
        );
        matched
    }
}
