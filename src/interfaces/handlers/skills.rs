use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{entities::skill::SkillCategory, errors::AppError, use_cases::skills::top_skills, AppState};

#[derive(Debug, Deserialize)]
pub struct SkillParams {
    pub category: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_skills(
    state: web::Data<AppState>,
    params: web::Query<SkillParams>,
) -> Result<impl Responder, AppError> {
    let category = match params.category.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<SkillCategory>().map_err(AppError::BadRequest)?),
    };

    Ok(HttpResponse::Ok().json(top_skills(state.store.skills(), category)))
}
