use serde::Serialize;

use crate::entities::timeline::{TimelineEvent, TimelineEventType};

/// Most recent start month first. Events starting the same month keep their order.
pub fn sort_events(events: &[TimelineEvent]) -> Vec<&TimelineEvent> {
    let mut sorted: Vec<&TimelineEvent> = events.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted
}

/// Sorted events, optionally restricted to one type (`None` shows all).
pub fn filter_events(
    events: &[TimelineEvent],
    event_type: Option<TimelineEventType>,
) -> Vec<&TimelineEvent> {
    sort_events(events)
        .into_iter()
        .filter(|event| event_type.is_none_or(|t| event.event_type == t))
        .collect()
}

/// Distinct start years, newest first, for year navigation.
pub fn timeline_years(events: &[TimelineEvent]) -> Vec<i32> {
    let mut years: Vec<i32> = sort_events(events)
        .into_iter()
        .map(|event| event.start_date.year())
        .collect();
    years.dedup();
    years
}

#[derive(Debug, Serialize)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub events: Vec<&'a TimelineEvent>,
}

/// Groups already-sorted events under their start year.
pub fn group_by_year<'a>(events: &[&'a TimelineEvent]) -> Vec<YearGroup<'a>> {
    let mut groups: Vec<YearGroup<'a>> = Vec::new();

    for &event in events {
        let year = event.start_date.year();
        match groups.last_mut() {
            Some(group) if group.year == year => group.events.push(event),
            _ => groups.push(YearGroup { year, events: vec![event] }),
        }
    }

    groups
}

pub fn milestones(events: &[TimelineEvent]) -> Vec<&TimelineEvent> {
    sort_events(events)
        .into_iter()
        .filter(|event| event.is_milestone)
        .collect()
}
