use chrono::NaiveDate;

use super::event::{Event, EventId};

pub fn overlaps(a_start: u16, a_end: u16, b_start: u16, b_end: u16) -> bool {
    a_start < b_end && b_start < a_end
}

pub fn find_conflicts<'a>(
    date: NaiveDate,
    start_minute: u16,
    end_minute: u16,
    events: &'a [Event],
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            event.date == date
                && overlaps(
                    start_minute,
                    end_minute,
                    event.start_minute,
                    event.end_minute,
                )
        })
        .collect()
}

pub fn conflicts_of(event: &Event, events: &[Event]) -> Vec<EventId> {
    events
        .iter()
        .filter(|other| other.id != event.id && event.overlaps(other))
        .map(|other| other.id)
        .collect()
}
