use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;
use tracing::{error, warn};

use crate::api::validation::ErrorResponse;

/// Errors surfaced to API callers
#[derive(Debug)]
pub enum ApiError {
    /// Upload filename extension is not on the allow-list
    InvalidFileType {
        filename: String,
        allowed: Vec<String>,
    },

    /// Upload carried zero bytes
    EmptyFile,

    /// Multipart request had no `file` part
    MissingFile,

    /// Request body has the wrong shape
    Validation(String),

    /// Anything unexpected; details are logged, never returned
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidFileType { filename, .. } => {
                write!(f, "Unsupported file type: {}", filename)
            }
            ApiError::EmptyFile => write!(f, "Empty file uploaded"),
            ApiError::MissingFile => write!(f, "No file part in upload"),
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFileType { .. } | ApiError::EmptyFile | ApiError::MissingFile => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::InvalidFileType { filename, allowed } => {
                warn!("Rejected upload with unsupported file type: {}", filename);
                let allowed = allowed
                    .iter()
                    .map(|ext| format!(".{}", ext))
                    .collect::<Vec<_>>()
                    .join(", ");
                ErrorResponse {
                    error: "Invalid file type".to_string(),
                    fields: serde_json::json!({
                        "message": format!("Only {} files are supported.", allowed),
                        "filename": filename,
                    }),
                }
            }
            ApiError::EmptyFile => {
                warn!("Rejected empty upload");
                ErrorResponse {
                    error: "Empty file".to_string(),
                    fields: serde_json::json!({"message": "Empty file uploaded."}),
                }
            }
            ApiError::MissingFile => {
                warn!("Rejected upload without a file part");
                ErrorResponse {
                    error: "Missing file".to_string(),
                    fields: serde_json::json!({"message": "Expected a multipart field named 'file'"}),
                }
            }
            ApiError::Validation(msg) => {
                warn!("Validation error: {}", msg);
                ErrorResponse {
                    error: "Validation failed".to_string(),
                    fields: serde_json::json!({"message": msg}),
                }
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    fields: serde_json::json!({"message": "An unexpected error occurred"}),
                }
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_are_bad_requests() {
        let invalid = ApiError::InvalidFileType {
            filename: "resume.txt".to_string(),
            allowed: vec!["pdf".to_string()],
        };
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmptyFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_is_unprocessable() {
        let err = ApiError::Validation("skills must be a list".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn internal_errors_hide_details() {
        let err = ApiError::Internal("connection refused by 10.0.0.4".to_string());
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(!body.contains("10.0.0.4"));
        assert!(body.contains("Internal server error"));
    }
}
