use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::conflict::overlaps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Health,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    HR,
    Engineering,
    Marketing,
    Sales,
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::HR => "HR",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
        }
    }

    pub fn from_label(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "hr" => Some(Department::HR),
            "engineering" => Some(Department::Engineering),
            "marketing" => Some(Department::Marketing),
            "sales" => Some(Department::Sales),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentFilter {
    All,
    Only(Department),
}

impl DepartmentFilter {
    pub fn matches(&self, department: Department) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(only) => *only == department,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("all") {
            return Some(DepartmentFilter::All);
        }
        Department::from_label(text).map(DepartmentFilter::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DepartmentFilter::All => "all",
            DepartmentFilter::Only(department) => department.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "start", with = "crate::schedule::time::hhmm")]
    pub start_minute: u16,
    #[serde(rename = "end", with = "crate::schedule::time::hhmm")]
    pub end_minute: u16,
    pub category: Category,
    pub department: Department,
}

impl Event {
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }

    pub fn overlaps(&self, other: &Event) -> bool {
        self.date == other.date
            && overlaps(
                self.start_minute,
                self.end_minute,
                other.start_minute,
                other.end_minute,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_test_event(id: u64, date: NaiveDate, start_minute: u16, end_minute: u16) -> Event {
        Event {
            id: EventId(id),
            title: "Standup".to_string(),
            date,
            start_minute,
            end_minute,
            category: Category::Work,
            department: Department::Engineering,
        }
    }

    #[test]
    fn event_duration_calculated_correctly() {
        let event = create_test_event(1, date(2024, 6, 10), 540, 630);

        assert_eq!(event.duration_minutes(), 90);
    }

    #[test]
    fn event_overlaps_with_another_event_on_same_date() {
        let first = create_test_event(1, date(2024, 6, 10), 480, 600);
        let second = create_test_event(2, date(2024, 6, 10), 540, 660);

        assert!(first.overlaps(&second));
    }

    #[test]
    fn event_does_not_overlap_when_adjacent() {
        let first = create_test_event(1, date(2024, 6, 10), 480, 540);
        let second = create_test_event(2, date(2024, 6, 10), 540, 600);

        assert!(!first.overlaps(&second));
    }

    #[test]
    fn event_does_not_overlap_across_dates() {
        let first = create_test_event(1, date(2024, 6, 10), 480, 540);
        let second = create_test_event(2, date(2024, 6, 11), 480, 540);

        assert!(!first.overlaps(&second));
    }

    #[test]
    fn event_serializes_with_wire_encodings() {
        let event = Event {
            id: EventId(1),
            title: "Standup".to_string(),
            date: date(2024, 6, 10),
            start_minute: 540,
            end_minute: 570,
            category: Category::Work,
            department: Department::Engineering,
        };

        let json = serde_json::to_string(&event).unwrap();

        assert_eq!(
            json,
            r#"{"id":1,"title":"Standup","date":"2024-06-10","start":"09:00","end":"09:30","category":"Work","department":"Engineering"}"#
        );
    }

    #[test]
    fn event_deserializes_from_wire_encodings() {
        let json = r#"{"id":7,"title":"Review","date":"2024-06-11","start":"14:00","end":"15:30","category":"Personal","department":"Sales"}"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, EventId(7));
        assert_eq!(event.date, date(2024, 6, 11));
        assert_eq!(event.start_minute, 840);
        assert_eq!(event.end_minute, 930);
        assert_eq!(event.department, Department::Sales);
    }

    #[test]
    fn event_deserialization_rejects_malformed_time() {
        let json = r#"{"id":1,"title":"X","date":"2024-06-10","start":"9:00","end":"10:00","category":"Work","department":"HR"}"#;

        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn department_labels_round_trip() {
        for department in [
            Department::HR,
            Department::Engineering,
            Department::Marketing,
            Department::Sales,
        ] {
            assert_eq!(Department::from_label(department.label()), Some(department));
        }
    }

    #[test]
    fn filter_all_matches_every_department() {
        assert!(DepartmentFilter::All.matches(Department::HR));
        assert!(DepartmentFilter::All.matches(Department::Sales));
    }

    #[test]
    fn filter_only_matches_single_department() {
        let filter = DepartmentFilter::Only(Department::Engineering);

        assert!(filter.matches(Department::Engineering));
        assert!(!filter.matches(Department::Marketing));
    }

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!(DepartmentFilter::parse("ALL"), Some(DepartmentFilter::All));
        assert_eq!(
            DepartmentFilter::parse("hr"),
            Some(DepartmentFilter::Only(Department::HR))
        );
        assert_eq!(DepartmentFilter::parse("finance"), None);
    }

    #[test]
    fn filter_labels_name_the_selection() {
        assert_eq!(DepartmentFilter::All.label(), "all");
        assert_eq!(
            DepartmentFilter::Only(Department::Marketing).label(),
            "Marketing"
        );
    }

    #[test]
    fn category_labels_match_their_variants() {
        assert_eq!(Category::Work.label(), "Work");
        assert_eq!(Category::Personal.label(), "Personal");
        assert_eq!(Category::Health.label(), "Health");
        assert_eq!(Category::Other.label(), "Other");
    }
}
