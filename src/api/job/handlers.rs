use actix_web::{
    get,
    web::{scope, Data, ServiceConfig},
    HttpResponse, Responder,
};

use super::service::JobService;

#[get("/")]
async fn list_jobs(service: Data<JobService>) -> impl Responder {
    HttpResponse::Ok().json(service.list_jobs())
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(scope("/jobs").service(list_jobs));
}
