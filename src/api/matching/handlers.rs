use actix_web::{
    post,
    web::{scope, Data, ServiceConfig},
    HttpResponse, Responder,
};
use actix_web_validator::Json;

use super::models::SkillQuery;
use super::service::MatchService;

#[post("/")]
async fn match_jobs(service: Data<MatchService>, query: Json<SkillQuery>) -> impl Responder {
    HttpResponse::Ok().json(service.match_jobs(&query.skills))
}

pub fn match_config(config: &mut ServiceConfig) {
    config.service(scope("/match").service(match_jobs));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::job::JobPosting;
    use crate::api::matching::SkillMatchMode;
    use crate::api::validation;
    use crate::catalog::{default_catalog, InMemoryJobRepository};
    use actix_web::{
        http::{header, StatusCode},
        test, web, App,
    };
    use std::sync::Arc;

    macro_rules! match_app {
        () => {
            match_app!(1024 * 1024)
        };
        ($limit:expr) => {{
            let repo = InMemoryJobRepository::new(default_catalog()).unwrap();
            test::init_service(
                App::new()
                    .app_data(Data::new(MatchService::new(
                        Arc::new(repo),
                        SkillMatchMode::Exact,
                    )))
                    .app_data(validation::json_config($limit))
                    .service(web::scope("/api/v1").configure(match_config)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn matches_python_jobs() {
        let app = match_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .set_json(serde_json::json!({"skills": ["Python"]}))
            .to_request();
        let jobs: Vec<JobPosting> = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<i32> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[actix_web::test]
    async fn no_overlap_returns_empty_array() {
        let app = match_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .set_json(serde_json::json!({"skills": ["Go"]}))
            .to_request();
        let jobs: Vec<JobPosting> = test::call_and_read_body_json(&app, req).await;

        assert!(jobs.is_empty());
    }

    #[actix_web::test]
    async fn wrong_shape_is_unprocessable() {
        let app = match_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .set_json(serde_json::json!({"skills": "Python"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn missing_field_is_unprocessable() {
        let app = match_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .set_json(serde_json::json!({"skill": ["Python"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn empty_skill_is_unprocessable() {
        let app = match_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .set_json(serde_json::json!({"skills": ["Python", ""]}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation failed");
        assert!(body["fields"]["skills"].is_object());
    }

    #[actix_web::test]
    async fn non_json_content_type_is_unprocessable() {
        let app = match_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .set_payload(r#"{"skills": ["Python"]}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["fields"]["message"], "Expected Content-Type: application/json");
    }

    #[actix_web::test]
    async fn json_suffix_content_type_is_accepted() {
        let app = match_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .insert_header((header::CONTENT_TYPE, "application/vnd.api+json"))
            .set_payload(r#"{"skills": ["React"]}"#)
            .to_request();
        let jobs: Vec<JobPosting> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![3]);
    }

    #[actix_web::test]
    async fn oversized_body_reports_payload_too_large() {
        let app = match_app!(32);
        let req = test::TestRequest::post()
            .uri("/api/v1/match/")
            .set_json(serde_json::json!({"skills": ["Python", "FastAPI", "Pandas", "Tailwind"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let message = body["fields"]["message"].as_str().unwrap_or_default();
        assert!(message.starts_with("Payload too large"), "got {}", message);
    }
}
