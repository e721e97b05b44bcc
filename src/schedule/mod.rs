pub mod conflict;
pub mod event;
pub mod time;
pub mod validate;
pub mod window;

pub use conflict::{conflicts_of, find_conflicts, overlaps};
pub use event::{Category, Department, DepartmentFilter, Event, EventId};
pub use time::{MINUTES_PER_DAY, TimeError, format_hhmm, parse_hhmm};
pub use validate::{EventDraft, RejectReason, validate_event};
pub use window::{DEFAULT_STEP_MINUTES, DayWindow};
