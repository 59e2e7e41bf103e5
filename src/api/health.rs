use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to the AI Job Matching API",
    })
}

/// Liveness check endpoint
///
/// Fixed payload, no dependencies checked.
/// Use for load balancers and Kubernetes liveness probes.
#[get("/")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        message: "API is healthy",
    })
}

/// Mounted at the application root
pub fn root_config(config: &mut web::ServiceConfig) {
    config.service(root);
}

/// Mounted under the versioned API scope
pub fn health_config(config: &mut web::ServiceConfig) {
    config.service(web::scope("/health").service(health_check));
}
