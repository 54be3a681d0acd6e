use actix_web::{get, web, HttpResponse, Responder};
use std::env;

use crate::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to the {} API!", state.config.name),
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/projects",
            "/api/search",
            "/api/analytics",
            "/api/timeline",
            "/api/skills",
            "/api/testimonials",
            "/api/blog",
            "/api/contact"
        ]
    }))
}
