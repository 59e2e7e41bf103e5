//! Skill extraction backends for uploaded resumes.
//!
//! `ResumeService` holds an `Arc<dyn SkillExtractor>` picked at startup from
//! `SKILL_EXTRACTOR`:
//! - `none`: no extraction, the response omits `extractedSkills`
//! - `keyword`: vocabulary terms present in the decoded upload
//! - `external`: the upload is forwarded to an extraction service

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::api::error::ApiError;

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Backend name, for logs
    fn name(&self) -> &'static str;

    /// `Ok(None)` means extraction is disabled, not that nothing was found
    async fn extract(&self, filename: &str, content: &[u8])
        -> Result<Option<Vec<String>>, ApiError>;
}

/// Which extractor backend to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    None,
    Keyword,
    External,
}

impl FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ExtractorKind::None),
            "keyword" => Ok(ExtractorKind::Keyword),
            "external" => Ok(ExtractorKind::External),
            other => Err(format!(
                "Unknown skill extractor '{}'. Expected 'none', 'keyword' or 'external'",
                other
            )),
        }
    }
}

pub struct NoopSkillExtractor;

#[async_trait]
impl SkillExtractor for NoopSkillExtractor {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn extract(&self, _filename: &str, _content: &[u8]) -> Result<Option<Vec<String>>, ApiError> {
        Ok(None)
    }
}

/// Placeholder extractor: reports vocabulary terms found in the raw upload
///
/// The upload is decoded lossily as UTF-8, so binary PDF/DOCX content only
/// yields terms that happen to appear as plain text. A term counts when it is
/// not embedded in a longer alphanumeric run ("JS" does not match "JSON").
pub struct KeywordSkillExtractor {
    vocabulary: Vec<String>,
}

impl KeywordSkillExtractor {
    pub fn new(vocabulary: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let vocabulary = vocabulary
            .into_iter()
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty() && seen.insert(term.clone()))
            .collect();
        Self { vocabulary }
    }

    fn find_terms(&self, text: &str) -> Vec<String> {
        self.vocabulary
            .iter()
            .filter(|term| contains_term(text, term))
            .cloned()
            .collect()
    }
}

fn contains_term(text: &str, term: &str) -> bool {
    text.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn extract(&self, filename: &str, content: &[u8]) -> Result<Option<Vec<String>>, ApiError> {
        let text = String::from_utf8_lossy(content);
        let skills = self.find_terms(&text);
        debug!("Keyword extractor found {} skills in {}", skills.len(), filename);
        Ok(Some(skills))
    }
}

#[derive(Deserialize)]
struct ExtractionResponse {
    skills: Vec<String>,
}

/// Forwards the upload to an extraction service as multipart field `file`
/// and expects `{"skills": [..]}` back.
pub struct ExternalSkillExtractor {
    client: reqwest::Client,
    url: String,
}

impl ExternalSkillExtractor {
    pub fn new(url: String, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to create extraction HTTP client: {}", e))?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl SkillExtractor for ExternalSkillExtractor {
    fn name(&self) -> &'static str {
        "external"
    }

    async fn extract(&self, filename: &str, content: &[u8]) -> Result<Option<Vec<String>>, ApiError> {
        let form = Form::new().part(
            "file",
            Part::bytes(content.to_vec()).file_name(filename.to_string()),
        );

        debug!("Calling skill extraction service: {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Internal(format!("Skill extraction request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Internal(format!(
                "Skill extraction service returned {}: {}",
                status, error_text
            )));
        }

        let extracted: ExtractionResponse = response.json().await.map_err(|e| {
            ApiError::Internal(format!("Failed to parse skill extraction response: {}", e))
        })?;

        Ok(Some(extracted.skills))
    }
}

/// Build the configured extractor
///
/// `keywords` overrides `default_vocabulary` for the keyword backend.
pub fn build_extractor(
    kind: ExtractorKind,
    keywords: Option<Vec<String>>,
    default_vocabulary: Vec<String>,
    url: Option<String>,
    timeout: Duration,
) -> Result<Arc<dyn SkillExtractor>, String> {
    let extractor: Arc<dyn SkillExtractor> = match kind {
        ExtractorKind::None => Arc::new(NoopSkillExtractor),
        ExtractorKind::Keyword => {
            Arc::new(KeywordSkillExtractor::new(keywords.unwrap_or(default_vocabulary)))
        }
        ExtractorKind::External => {
            let url = url.ok_or_else(|| {
                "SKILL_EXTRACTOR_URL must be set when SKILL_EXTRACTOR=external".to_string()
            })?;
            Arc::new(ExternalSkillExtractor::new(url, timeout)?)
        }
    };

    info!("Using '{}' skill extractor", extractor.name());
    Ok(extractor)
}
