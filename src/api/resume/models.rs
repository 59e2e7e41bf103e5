use actix_multipart::form::{bytes::Bytes, MultipartForm};
use serde::Serialize;

/// Multipart upload carrying a single resume under field `file`
#[derive(MultipartForm)]
pub struct ResumeUploadForm {
    pub file: Bytes,
}

/// Result of an accepted upload; never stored
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadResult {
    pub resume_id: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_skills: Option<Vec<String>>,
}
