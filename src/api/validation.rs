use actix_multipart::{form::MultipartFormConfig, MultipartError};
use actix_web::{error::JsonPayloadError, http::StatusCode, mime, HttpResponse};
use serde::Serialize;

use crate::api::error::ApiError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fields: serde_json::Value,
}

fn unprocessable(error: &str, fields: serde_json::Map<String, serde_json::Value>) -> actix_web::Error {
    let error_response = ErrorResponse {
        error: error.to_string(),
        fields: serde_json::Value::Object(fields),
    };
    actix_web::error::InternalError::from_response(
        "",
        HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY).json(error_response),
    )
    .into()
}

fn describe_body_error(err_string: &str) -> String {
    let message = if err_string.contains("EOF while parsing") {
        "Request body is empty. Expected JSON payload"
    } else if err_string.contains("missing field") {
        "Missing required field. Expected {\"skills\": [..]}"
    } else if err_string.contains("invalid type") {
        "Invalid field type. Check the expected payload shape"
    } else {
        "Invalid JSON format"
    };
    message.to_string()
}

/// Creates a configured JsonConfig with standardized error handling for the entire project
///
/// Every body error (bad JSON, wrong shape, non-JSON content type, oversized
/// body, failed field validation) answers 422.
pub fn json_config(limit: usize) -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default()
        .limit(limit)
        .content_type(|ct| ct.subtype() == mime::JSON || ct.suffix() == Some(mime::JSON))
        .error_handler(|err, _req| {
            let mut fields = serde_json::Map::new();

            match err {
                actix_web_validator::Error::Validate(validation_errors) => {
                    for (field, errors) in validation_errors.field_errors() {
                        let messages: Vec<String> = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| format!("Validation error in field: {}", field))
                            })
                            .collect();
                        fields.insert(field.to_string(), serde_json::json!({"errors": messages}));
                    }
                    unprocessable("Validation failed", fields)
                }
                actix_web_validator::Error::Deserialize(de_err) => {
                    ApiError::Validation(describe_body_error(&de_err.to_string())).into()
                }
                actix_web_validator::Error::JsonPayloadError(payload_err) => {
                    let message = match &payload_err {
                        JsonPayloadError::Overflow { limit }
                        | JsonPayloadError::OverflowKnownLength { limit, .. } => {
                            format!("Payload too large. Limit is {} bytes", limit)
                        }
                        JsonPayloadError::ContentType => {
                            "Expected Content-Type: application/json".to_string()
                        }
                        other => describe_body_error(&other.to_string()),
                    };
                    ApiError::Validation(message).into()
                }
                _ => ApiError::Validation("Validation error".to_string()).into(),
            }
        })
}

/// Multipart limits and error shaping for file uploads
///
/// Upload bytes are held in memory, so the memory limit tracks the total limit.
pub fn multipart_config(limit: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(limit)
        .memory_limit(limit)
        .error_handler(|err, _req| match err {
            MultipartError::MissingField(_) => ApiError::MissingFile.into(),
            other => {
                let error_response = ErrorResponse {
                    error: "Invalid upload".to_string(),
                    fields: serde_json::json!({"message": other.to_string()}),
                };
                actix_web::error::InternalError::from_response(
                    "",
                    HttpResponse::BadRequest().json(error_response),
                )
                .into()
            }
        })
}
