use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiError;
use super::extractor::SkillExtractor;
use super::models::ResumeUploadResult;

/// Resume intake: validation, id assignment and optional skill extraction
pub struct ResumeService {
    allowed_extensions: Vec<String>,
    extractor: Arc<dyn SkillExtractor>,
}

impl ResumeService {
    /// `allowed_extensions` are matched case-insensitively, with or without a leading dot
    pub fn new(allowed_extensions: Vec<String>, extractor: Arc<dyn SkillExtractor>) -> Self {
        let allowed_extensions = allowed_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self {
            allowed_extensions,
            extractor,
        }
    }

    /// Check the upload against the intake policy
    ///
    /// The extension is checked before the content, so a bad extension is
    /// reported regardless of what the file holds.
    pub fn validate(&self, filename: &str, content: &[u8]) -> Result<(), ApiError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let allowed = extension
            .as_deref()
            .is_some_and(|ext| self.allowed_extensions.iter().any(|a| a == ext));

        if !allowed {
            return Err(ApiError::InvalidFileType {
                filename: filename.to_string(),
                allowed: self.allowed_extensions.clone(),
            });
        }

        if content.is_empty() {
            return Err(ApiError::EmptyFile);
        }

        Ok(())
    }

    /// Accept an upload and assign it a fresh id
    ///
    /// # Returns
    /// - `Ok(ResumeUploadResult)` - Upload accepted
    /// - `Err(ApiError)` - Upload rejected or extraction failed
    pub async fn intake(
        &self,
        filename: Option<String>,
        content: &[u8],
    ) -> Result<ResumeUploadResult, ApiError> {
        let filename = filename.unwrap_or_default();
        self.validate(&filename, content)?;

        let resume_id = Uuid::new_v4().to_string();
        info!(
            "Service: Accepted resume upload id={}, filename={}, bytes={}",
            resume_id,
            filename,
            content.len()
        );

        let extracted_skills = self.extractor.extract(&filename, content).await?;

        Ok(ResumeUploadResult {
            resume_id,
            filename,
            extracted_skills,
        })
    }
}
