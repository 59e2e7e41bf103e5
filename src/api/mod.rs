pub mod error;
pub mod health;
pub mod job;
pub mod matching;
pub mod resume;
pub mod validation;

use actix_web::{http::header, web, HttpRequest, HttpResponse};

use self::validation::ErrorResponse;

/// Collection routes answer on the trailing-slash path; the bare path redirects there
const SLASH_REDIRECTS: [&str; 3] = ["/health", "/jobs", "/match"];

/// 307 keeps the method and body, so a bare-path POST is replayed as-is
async fn redirect_to_slash(req: HttpRequest) -> HttpResponse {
    let location = match req.uri().query() {
        Some(query) => format!("{}/?{}", req.path(), query),
        None => format!("{}/", req.path()),
    };
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Versioned API surface
pub fn api_config(config: &mut web::ServiceConfig) {
    // registered ahead of the scopes, which would otherwise claim the bare paths
    let mut api = web::scope("/api/v1");
    for path in SLASH_REDIRECTS {
        api = api.service(web::resource(path).to(redirect_to_slash));
    }

    config.service(
        api.configure(health::health_config)
            .configure(job::handlers::job_config)
            .configure(matching::handlers::match_config)
            .configure(resume::handlers::resume_config),
    );
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        fields: serde_json::json!({"message": "No route matches this request"}),
    })
}
