use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    errors::AppError,
    use_cases::aggregate::{category_distribution, tag_distribution, technology_distribution},
    AppState,
};

#[instrument(skip(state))]
pub async fn technology_chart(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(technology_distribution(state.store.projects())))
}

#[instrument(skip(state))]
pub async fn category_chart(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(category_distribution(state.store.projects())))
}

#[instrument(skip(state))]
pub async fn tag_chart(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(tag_distribution(state.store.blog_posts())))
}
