use actix_web::web;
use std::sync::Arc;
use tracing::info;

use crate::api::{
    self,
    health::root_config,
    job::JobService,
    matching::MatchService,
    resume::{build_extractor, ResumeService},
    validation,
};
use crate::catalog::{default_catalog, InMemoryJobRepository, JobRepository};
use crate::config::Config;

/// Services shared by every server worker, built once at startup
#[derive(Clone)]
pub struct AppServices {
    pub jobs: web::Data<JobService>,
    pub matcher: web::Data<MatchService>,
    pub resumes: web::Data<ResumeService>,
    max_payload_size: usize,
}

impl AppServices {
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let catalog = match &config.job_catalog_path {
            Some(path) => InMemoryJobRepository::from_file(path),
            None => InMemoryJobRepository::new(default_catalog()),
        }
        .map_err(|e| e.to_string())?;
        info!("Job catalog ready with {} postings", catalog.list_jobs().len());

        let extractor = build_extractor(
            config.skill_extractor,
            config.skill_keywords.clone(),
            catalog.skill_vocabulary(),
            config.skill_extractor_url.clone(),
            config.skill_extractor_timeout,
        )?;

        let repository: Arc<dyn JobRepository> = Arc::new(catalog);

        Ok(Self {
            jobs: web::Data::new(JobService::new(repository.clone())),
            matcher: web::Data::new(MatchService::new(repository, config.skill_match_mode)),
            resumes: web::Data::new(ResumeService::new(
                config.allowed_extensions.clone(),
                extractor,
            )),
            max_payload_size: config.max_payload_size,
        })
    }

    /// Register shared services, body limits and all routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.jobs.clone())
            .app_data(self.matcher.clone())
            .app_data(self.resumes.clone())
            .app_data(web::PayloadConfig::default().limit(self.max_payload_size))
            .app_data(validation::multipart_config(self.max_payload_size))
            .app_data(validation::json_config(self.max_payload_size))
            .configure(root_config)
            .configure(api::api_config);
    }
}
