use chrono::NaiveDate;

use crate::schedule::event::{DepartmentFilter, Event};
use crate::schedule::window::DayWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEvent {
    pub event: Event,
    pub top: f64,
    pub height: f64,
    pub has_conflict: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub events: Vec<PlacedEvent>,
}

pub fn place_events(
    events: &[Event],
    filter: DepartmentFilter,
    visible: &[NaiveDate],
    window: &DayWindow,
) -> Vec<DayColumn> {
    visible
        .iter()
        .map(|&date| {
            let mut bucket: Vec<&Event> = events
                .iter()
                .filter(|event| event.date == date && filter.matches(event.department))
                .collect();
            bucket.sort_by_key(|event| event.id);

            let placed = bucket
                .iter()
                .map(|event| place_one(event, &bucket, window))
                .collect();

            DayColumn {
                date,
                events: placed,
            }
        })
        .collect()
}

fn place_one(event: &Event, bucket: &[&Event], window: &DayWindow) -> PlacedEvent {
    let span = window.span() as f64;
    let top = event.start_minute.saturating_sub(window.start) as f64 / span;
    let height = event.duration_minutes() as f64 / span;
    let has_conflict = bucket
        .iter()
        .any(|other| other.id != event.id && event.overlaps(other));

    PlacedEvent {
        event: event.clone(),
        top,
        height,
        has_conflict,
    }
}
