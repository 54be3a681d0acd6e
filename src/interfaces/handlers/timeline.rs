use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    entities::timeline::{TimelineEvent, TimelineEventResponse, TimelineEventType},
    errors::AppError,
    use_cases::timeline::{filter_events, group_by_year, milestones, timeline_years},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct TimelineParams {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

impl TimelineParams {
    fn event_type(&self) -> Result<Option<TimelineEventType>, AppError> {
        match self.event_type.as_deref() {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(AppError::BadRequest),
        }
    }
}

#[derive(Serialize)]
struct TimelineYearResponse<'a> {
    year: i32,
    events: Vec<TimelineEventResponse<'a>>,
}

fn to_responses<'a>(events: &[&'a TimelineEvent]) -> Vec<TimelineEventResponse<'a>> {
    events.iter().map(|&event| event.to_response()).collect()
}

#[instrument(skip(state))]
pub async fn get_timeline(
    state: web::Data<AppState>,
    params: web::Query<TimelineParams>,
) -> Result<impl Responder, AppError> {
    let events = filter_events(state.store.timeline(), params.event_type()?);
    Ok(HttpResponse::Ok().json(to_responses(&events)))
}

#[instrument(skip(state))]
pub async fn get_timeline_by_year(
    state: web::Data<AppState>,
    params: web::Query<TimelineParams>,
) -> Result<impl Responder, AppError> {
    let events = filter_events(state.store.timeline(), params.event_type()?);
    let groups: Vec<TimelineYearResponse> = group_by_year(&events)
        .into_iter()
        .map(|group| TimelineYearResponse {
            year: group.year,
            events: to_responses(&group.events),
        })
        .collect();

    Ok(HttpResponse::Ok().json(groups))
}

#[instrument(skip(state))]
pub async fn get_timeline_years(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(timeline_years(state.store.timeline())))
}

#[instrument(skip(state))]
pub async fn get_milestones(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(to_responses(&milestones(state.store.timeline()))))
}
