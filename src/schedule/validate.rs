use chrono::NaiveDate;
use thiserror::Error;

use super::time::{TimeError, parse_hhmm};
use super::window::DayWindow;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error(transparent)]
    BadTime(#[from] TimeError),
    #[error("end time must be after start time")]
    EndBeforeStart,
    #[error("event must lie within the schedulable day window")]
    OutsideWindow,
    #[error("event length must be a whole number of slots")]
    BadGranularity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_minute: u16,
    pub end_minute: u16,
}

pub fn validate_event(
    title: &str,
    date: NaiveDate,
    start: &str,
    end: &str,
    window: &DayWindow,
) -> Result<EventDraft, RejectReason> {
    let title = title.trim();
    if title.is_empty() {
        return Err(RejectReason::EmptyTitle);
    }

    let start_minute = parse_hhmm(start)?;
    let end_minute = parse_hhmm(end)?;

    if end_minute <= start_minute {
        return Err(RejectReason::EndBeforeStart);
    }

    if !window.contains(start_minute, end_minute) {
        return Err(RejectReason::OutsideWindow);
    }

    if (end_minute - start_minute) % window.step != 0 {
        return Err(RejectReason::BadGranularity);
    }

    Ok(EventDraft {
        title: title.to_string(),
        date,
        start_minute,
        end_minute,
    })
}
