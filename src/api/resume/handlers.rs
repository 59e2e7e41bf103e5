use actix_multipart::form::MultipartForm;
use actix_web::{
    post,
    web::{scope, Data, ServiceConfig},
    HttpResponse,
};

use crate::api::error::ApiError;
use super::models::ResumeUploadForm;
use super::service::ResumeService;

#[post("/upload")]
async fn upload_resume(
    service: Data<ResumeService>,
    MultipartForm(form): MultipartForm<ResumeUploadForm>,
) -> Result<HttpResponse, ApiError> {
    let result = service.intake(form.file.file_name, &form.file.data).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn resume_config(config: &mut ServiceConfig) {
    config.service(scope("/resume").service(upload_resume));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::resume::extractor::{KeywordSkillExtractor, NoopSkillExtractor, SkillExtractor};
    use crate::api::validation;
    use actix_web::{
        http::{header, StatusCode},
        test, web, App,
    };
    use std::sync::Arc;

    const BOUNDARY: &str = "----jobmatcherboundary";

    fn multipart_upload(field: &str, filename: &str, content: &[u8]) -> test::TestRequest {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        test::TestRequest::post()
            .uri("/api/v1/resume/upload")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    fn resume_service(extractor: Arc<dyn SkillExtractor>) -> Data<ResumeService> {
        Data::new(ResumeService::new(
            vec!["pdf".to_string(), "docx".to_string()],
            extractor,
        ))
    }

    macro_rules! upload_app {
        ($extractor:expr) => {
            upload_app!($extractor, 1024 * 1024)
        };
        ($extractor:expr, $limit:expr) => {
            test::init_service(
                App::new()
                    .app_data(resume_service($extractor))
                    .app_data(validation::multipart_config($limit))
                    .service(web::scope("/api/v1").configure(resume_config)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn accepts_pdf_upload() {
        let app = upload_app!(Arc::new(NoopSkillExtractor));
        let req = multipart_upload("file", "cv.pdf", b"%PDF-1.7 resume").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["filename"], "cv.pdf");
        assert!(body["resumeId"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body.get("extractedSkills").is_none());
    }

    #[actix_web::test]
    async fn repeated_uploads_get_new_ids() {
        let app = upload_app!(Arc::new(NoopSkillExtractor));

        let first: serde_json::Value = test::call_and_read_body_json(
            &app,
            multipart_upload("file", "cv.docx", b"same bytes").to_request(),
        )
        .await;
        let second: serde_json::Value = test::call_and_read_body_json(
            &app,
            multipart_upload("file", "cv.docx", b"same bytes").to_request(),
        )
        .await;

        assert_ne!(first["resumeId"], second["resumeId"]);
    }

    #[actix_web::test]
    async fn includes_extracted_skills_when_enabled() {
        let extractor = Arc::new(KeywordSkillExtractor::new(vec![
            "Python".to_string(),
            "React".to_string(),
        ]));
        let app = upload_app!(extractor);
        let req = multipart_upload("file", "cv.pdf", b"Senior Python engineer").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["extractedSkills"], serde_json::json!(["Python"]));
    }

    #[actix_web::test]
    async fn rejects_unsupported_extension() {
        let app = upload_app!(Arc::new(NoopSkillExtractor));
        let req = multipart_upload("file", "cv.txt", b"plain text").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid file type");
    }

    #[actix_web::test]
    async fn rejects_empty_file() {
        let app = upload_app!(Arc::new(NoopSkillExtractor));
        let req = multipart_upload("file", "cv.pdf", b"").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Empty file");
    }

    #[actix_web::test]
    async fn rejects_missing_file_part() {
        let app = upload_app!(Arc::new(NoopSkillExtractor));
        let req = multipart_upload("document", "cv.pdf", b"data").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing file");
    }

    #[actix_web::test]
    async fn rejects_upload_over_payload_limit() {
        let app = upload_app!(Arc::new(NoopSkillExtractor), 64);
        let req = multipart_upload("file", "cv.pdf", &[b'x'; 500]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid upload");
    }
}
