pub mod schedule;
pub mod navigate;
pub mod grid;
pub mod config;
pub mod sample;
pub mod app;

pub use schedule::{Category, Department, DepartmentFilter, Event, EventId};
pub use app::{EventForm, ScheduleState, Submission};

pub use grid::{DayColumn, DayLayout, PlacedEvent, WeekLayout};
