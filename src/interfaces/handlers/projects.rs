use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{ProjectDetailResponse, ProjectFilterOptions},
    errors::AppError,
    use_cases::{
        filter::{featured_projects, related_projects, unique_categories, unique_technologies},
        sort::ProjectQuery,
    },
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> Result<impl Responder, AppError> {
    let projects = query.run(state.store.projects());
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_filter_options(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.store.projects();
    Ok(HttpResponse::Ok().json(ProjectFilterOptions {
        categories: unique_categories(projects),
        technologies: unique_technologies(projects),
    }))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(featured_projects(state.store.projects())))
}

#[instrument(skip(state))]
pub async fn get_project_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state
        .store
        .project_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Project '{}'", slug)))?;

    Ok(HttpResponse::Ok().json(ProjectDetailResponse {
        project,
        related: related_projects(state.store.projects(), project),
    }))
}
