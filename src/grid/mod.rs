pub mod day;
pub mod layout;
pub mod week;

pub use day::DayLayout;
pub use layout::{DayColumn, PlacedEvent, place_events};
pub use week::WeekLayout;
