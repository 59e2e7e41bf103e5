use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::matching::SkillMatchMode;
use crate::api::resume::ExtractorKind;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Bind address
    /// Default: 127.0.0.1
    pub host: String,

    /// Bind port
    /// Default: 8080
    pub port: u16,

    /// Maximum payload size for all requests, file uploads included (in bytes)
    /// Default: 10MB (10 * 1024 * 1024)
    pub max_payload_size: usize,

    /// Directory for rolling log files
    pub log_dir: PathBuf,

    /// Resume extensions accepted by intake, lowercase without the dot
    pub allowed_extensions: Vec<String>,

    pub skill_extractor: ExtractorKind,

    /// Keyword extractor vocabulary; `None` uses the catalog's skills
    pub skill_keywords: Option<Vec<String>>,

    pub skill_extractor_url: Option<String>,

    pub skill_extractor_timeout: Duration,

    /// JSON catalog file; `None` serves the built-in catalog
    pub job_catalog_path: Option<PathBuf>,

    pub skill_match_mode: SkillMatchMode,
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - HOST, PORT: bind address (default: 127.0.0.1:8080)
    /// - MAX_PAYLOAD_SIZE: Maximum request payload size in bytes (default: 10485760 = 10MB)
    /// - LOG_DIR: rolling log directory (default: logs)
    /// - ALLOWED_RESUME_EXTENSIONS: comma list (default: pdf,docx)
    /// - SKILL_EXTRACTOR: none | keyword | external (default: keyword)
    /// - SKILL_KEYWORDS: comma list for the keyword extractor
    /// - SKILL_EXTRACTOR_URL: required for the external extractor
    /// - SKILL_EXTRACTOR_TIMEOUT_SECS: external extractor timeout (default: 30)
    /// - JOB_CATALOG_PATH: JSON file with the job catalog
    /// - SKILL_MATCH_MODE: exact | case_insensitive (default: exact)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => 8080,
        };

        let max_payload_size = match lookup("MAX_PAYLOAD_SIZE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("MAX_PAYLOAD_SIZE must be a byte count, got '{}'", raw))?,
            None => 10 * 1024 * 1024, // Default: 10MB
        };

        let log_dir = lookup("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        let allowed_extensions: Vec<String> = lookup("ALLOWED_RESUME_EXTENSIONS")
            .map(|raw| parse_list(&raw))
            .unwrap_or_else(|| vec!["pdf".to_string(), "docx".to_string()])
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if allowed_extensions.is_empty() {
            return Err("ALLOWED_RESUME_EXTENSIONS must list at least one extension".to_string());
        }

        let skill_extractor = match lookup("SKILL_EXTRACTOR") {
            Some(raw) => raw.parse()?,
            None => ExtractorKind::Keyword,
        };

        let skill_keywords = lookup("SKILL_KEYWORDS").map(|raw| parse_list(&raw));

        let skill_extractor_url = lookup("SKILL_EXTRACTOR_URL").filter(|url| !url.trim().is_empty());
        if skill_extractor == ExtractorKind::External && skill_extractor_url.is_none() {
            return Err("SKILL_EXTRACTOR_URL must be set when SKILL_EXTRACTOR=external".to_string());
        }

        let skill_extractor_timeout = match lookup("SKILL_EXTRACTOR_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                format!("SKILL_EXTRACTOR_TIMEOUT_SECS must be whole seconds, got '{}'", raw)
            })?),
            None => Duration::from_secs(30),
        };

        let job_catalog_path = lookup("JOB_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let skill_match_mode = match lookup("SKILL_MATCH_MODE") {
            Some(raw) => raw.parse()?,
            None => SkillMatchMode::Exact,
        };

        Ok(Config {
            host,
            port,
            max_payload_size,
            log_dir,
            allowed_extensions,
            skill_extractor,
            skill_keywords,
            skill_extractor_url,
            skill_extractor_timeout,
            job_catalog_path,
            skill_match_mode,
        })
    }
}
