use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "status": "OK",
            "message": "API is working properly"
        }))
    ),
    tag = "Health"
)]
pub async fn check_status() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "API is working properly"
    }))
}
