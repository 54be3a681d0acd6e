use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct ContentCounts {
    projects: usize,
    blog_posts: usize,
    timeline: usize,
    testimonials: usize,
    skills: usize,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: &'static str,
    environment: String,
    content: ContentCounts,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;
    let store = &state.store;

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.env.to_string(),
        content: ContentCounts {
            projects: store.projects().len(),
            blog_posts: store.blog_posts().len(),
            timeline: store.timeline().len(),
            testimonials: store.testimonials().len(),
            skills: store.skills().len(),
        },
    })
}
