use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    errors::AppError,
    use_cases::search::{search, SearchResult},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    total: usize,
    results: Vec<SearchResult<'a>>,
}

/// Results are capped at the configured limit; `total` counts every match.
#[instrument(skip(state))]
pub async fn search_projects(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> Result<impl Responder, AppError> {
    let mut results = search(state.store.projects(), &params.q);
    let total = results.len();
    results.truncate(state.config.search_result_limit);

    Ok(HttpResponse::Ok().json(SearchResponse {
        query: &params.q,
        total,
        results,
    }))
}
