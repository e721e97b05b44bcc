use chrono::NaiveDate;

use crate::app::ScheduleState;
use crate::grid::layout::{PlacedEvent, place_events};

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub events: Vec<PlacedEvent>,
}

pub fn calculate_layout(state: &ScheduleState) -> DayLayout {
    let date = state.anchor;
    let mut columns = place_events(&state.events, state.filter, &[date], &state.window);
    let events = columns
        .pop()
        .map(|column| column.events)
        .unwrap_or_default();

    DayLayout { date, events }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::EventForm;
    use crate::schedule::event::{Category, Department, DepartmentFilter};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn submit(
        state: &mut ScheduleState,
        title: &str,
        date: NaiveDate,
        start: &str,
        end: &str,
        department: Department,
    ) {
        state
            .submit(&EventForm {
                title: title.to_string(),
                date,
                start: start.to_string(),
                end: end.to_string(),
                category: Category::Work,
                department,
            })
            .unwrap();
    }

    #[test]
    fn layout_shows_the_anchor_date() {
        let state = ScheduleState::new(date(2024, 6, 12));

        let layout = calculate_layout(&state);

        assert_eq!(layout.date, date(2024, 6, 12));
        assert!(layout.events.is_empty());
    }

    #[test]
    fn only_anchor_day_events_appear() {
        let mut state = ScheduleState::new(date(2024, 6, 12));
        submit(
            &mut state,
            "Here",
            date(2024, 6, 12),
            "09:00",
            "10:00",
            Department::Engineering,
        );
        submit(
            &mut state,
            "Tomorrow",
            date(2024, 6, 13),
            "09:00",
            "10:00",
            Department::Engineering,
        );

        let layout = calculate_layout(&state);

        assert_eq!(layout.events.len(), 1);
        assert_eq!(layout.events[0].event.title, "Here");
    }

    #[test]
    fn fractions_follow_the_state_window() {
        let mut state = ScheduleState::new(date(2024, 6, 12));
        submit(
            &mut state,
            "First",
            date(2024, 6, 12),
            "08:00",
            "09:00",
            Department::Engineering,
        );

        let layout = calculate_layout(&state);

        assert_eq!(layout.events[0].top, 0.0);
        assert_eq!(layout.events[0].height, 60.0 / 720.0);
    }

    #[test]
    fn overlapping_events_are_flagged() {
        let mut state = ScheduleState::new(date(2024, 6, 12));
        submit(
            &mut state,
            "Demo",
            date(2024, 6, 12),
            "08:00",
            "09:00",
            Department::Engineering,
        );
        submit(
            &mut state,
            "Review",
            date(2024, 6, 12),
            "08:30",
            "09:30",
            Department::Engineering,
        );

        let layout = calculate_layout(&state);

        assert!(layout.events.iter().all(|placed| placed.has_conflict));
    }

    #[test]
    fn department_filter_narrows_the_day() {
        let mut state = ScheduleState::new(date(2024, 6, 12));
        submit(
            &mut state,
            "Pipeline",
            date(2024, 6, 12),
            "09:00",
            "10:00",
            Department::Engineering,
        );
        submit(
            &mut state,
            "Benefits",
            date(2024, 6, 12),
            "11:00",
            "12:00",
            Department::HR,
        );
        state.filter = DepartmentFilter::Only(Department::Engineering);

        let layout = calculate_layout(&state);

        assert_eq!(layout.events.len(), 1);
        assert_eq!(layout.events[0].event.title, "Pipeline");
    }
}
