use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::api::job::JobPosting;

/// Errors raised while building a catalog at startup
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    Io(std::io::Error),

    /// Catalog file is not a JSON array of job postings
    Parse(serde_json::Error),

    /// Two postings share an id
    DuplicateId(i32),

    /// Catalog has no postings
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "Failed to read job catalog: {}", e),
            CatalogError::Parse(e) => write!(f, "Failed to parse job catalog: {}", e),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate job id in catalog: {}", id),
            CatalogError::Empty => write!(f, "Job catalog is empty"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only source of job postings
///
/// Built once at startup and shared by every worker as `Arc<dyn JobRepository>`.
pub trait JobRepository: Send + Sync {
    /// All postings in catalog-definition order
    fn list_jobs(&self) -> &[JobPosting];
}

/// Repository backed by a fixed in-memory list
#[derive(Debug)]
pub struct InMemoryJobRepository {
    jobs: Vec<JobPosting>,
}

impl InMemoryJobRepository {
    /// Build a repository, rejecting empty catalogs and duplicate ids
    pub fn new(jobs: Vec<JobPosting>) -> Result<Self, CatalogError> {
        if jobs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !seen.insert(job.id) {
                return Err(CatalogError::DuplicateId(job.id));
            }
        }

        debug!("Catalog built with {} postings", jobs.len());
        Ok(Self { jobs })
    }

    /// Load a catalog from a JSON file holding an array of postings
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading job catalog from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(CatalogError::Io)?;
        let jobs: Vec<JobPosting> = serde_json::from_str(&raw).map_err(CatalogError::Parse)?;

        Self::new(jobs)
    }

    /// Distinct required skills across the catalog, in first-seen order
    pub fn skill_vocabulary(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.jobs
            .iter()
            .flat_map(|job| job.required_skills.iter())
            .filter(|skill| seen.insert(skill.as_str()))
            .cloned()
            .collect()
    }
}

impl JobRepository for InMemoryJobRepository {
    fn list_jobs(&self) -> &[JobPosting] {
        &self.jobs
    }
}
