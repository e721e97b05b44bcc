use chrono::NaiveDate;

use crate::app::ScheduleState;
use crate::grid::layout::{DayColumn, place_events};
use crate::navigate;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

pub fn calculate_layout(state: &ScheduleState) -> WeekLayout {
    let dates = navigate::visible_week(state.anchor, state.week_start);
    let week_start = dates.first().copied().unwrap_or(state.anchor);
    let days = place_events(&state.events, state.filter, &dates, &state.window);

    WeekLayout { week_start, days }
}
