use chrono::{Local, NaiveDate, Weekday};

use crate::navigate::{self, Direction, StepUnit};
use crate::schedule::conflict::find_conflicts;
use crate::schedule::event::{Category, Department, DepartmentFilter, Event, EventId};
use crate::schedule::validate::{EventDraft, RejectReason, validate_event};
use crate::schedule::window::DayWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub category: Category,
    pub department: Department,
}

impl EventForm {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date,
            start: "09:00".to_string(),
            end: "10:00".to_string(),
            category: Category::Work,
            department: Department::Engineering,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: EventId,
    pub conflicts: Vec<EventId>,
}

#[derive(Debug, Clone)]
pub struct ScheduleState {
    pub events: Vec<Event>,
    pub filter: DepartmentFilter,
    pub anchor: NaiveDate,
    pub window: DayWindow,
    pub week_start: Weekday,
    pub form: Option<EventForm>,
    next_id: u64,
}

impl ScheduleState {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            events: Vec::new(),
            filter: DepartmentFilter::All,
            anchor,
            window: DayWindow::standard(),
            week_start: Weekday::Sun,
            form: None,
            next_id: 1,
        }
    }

    pub fn with_window(mut self, window: DayWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn open_form(&mut self) -> &mut EventForm {
        let anchor = self.anchor;
        self.form.get_or_insert_with(|| EventForm::new(anchor))
    }

    pub fn submit_form(&mut self) -> Option<Result<Submission, RejectReason>> {
        let form = self.form.take()?;
        let result = self.submit(&form);
        if result.is_err() {
            self.form = Some(form);
        }

        Some(result)
    }

    pub fn submit(&mut self, form: &EventForm) -> Result<Submission, RejectReason> {
        let draft =
            match validate_event(&form.title, form.date, &form.start, &form.end, &self.window) {
                Ok(draft) => draft,
                Err(reason) => {
                    tracing::debug!("event rejected: {}", reason);
                    return Err(reason);
                }
            };

        let conflicts: Vec<EventId> =
            find_conflicts(draft.date, draft.start_minute, draft.end_minute, &self.events)
                .into_iter()
                .map(|event| event.id)
                .collect();

        let id = self.add_event(draft, form.category, form.department);

        if !conflicts.is_empty() {
            tracing::info!(
                "event {} double-books {} existing event(s)",
                id.0,
                conflicts.len()
            );
        }

        Ok(Submission { id, conflicts })
    }

    pub fn add_event(
        &mut self,
        draft: EventDraft,
        category: Category,
        department: Department,
    ) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;

        tracing::debug!("adding event {} '{}' on {}", id.0, draft.title, draft.date);

        self.events.push(Event {
            id,
            title: draft.title,
            date: draft.date,
            start_minute: draft.start_minute,
            end_minute: draft.end_minute,
            category,
            department,
        });

        id
    }

    pub fn remove_event(&mut self, id: EventId) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;

        tracing::debug!("removing event {}", id.0);
        Some(self.events.remove(index))
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|event| event.date == date)
            .collect();
        events.sort_by_key(|event| event.start_minute);
        events
    }

    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        navigate::visible_week(self.anchor, self.week_start)
    }

    pub fn advance(&mut self, unit: StepUnit, direction: Direction) {
        self.anchor = navigate::advance(self.anchor, unit, direction);
    }
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
