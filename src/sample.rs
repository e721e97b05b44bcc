use chrono::Days;

use crate::app::{EventForm, ScheduleState};
use crate::schedule::event::{Category, Department};

pub fn sample_schedule(state: &mut ScheduleState) {
    let anchor = state.anchor;

    let Some(tomorrow) = anchor.checked_add_days(Days::new(1)) else {
        return;
    };
    let Some(yesterday) = anchor.checked_sub_days(Days::new(1)) else {
        return;
    };

    let events = vec![
        ("Morning Standup", anchor, "09:00", "09:30", Category::Work, Department::Engineering),
        ("Design Review", anchor, "10:00", "11:00", Category::Work, Department::Engineering),
        ("Marketing Sync", anchor, "10:30", "11:30", Category::Work, Department::Marketing),
        ("Gym", tomorrow, "08:00", "09:00", Category::Health, Department::Engineering),
        ("Sprint Planning", tomorrow, "14:00", "15:30", Category::Work, Department::Engineering),
        ("Benefits Enrollment", tomorrow, "15:00", "16:00", Category::Other, Department::HR),
        ("Pipeline Review", yesterday, "11:00", "12:00", Category::Work, Department::Sales),
        ("Lunch with Team", yesterday, "12:30", "13:30", Category::Personal, Department::Engineering),
    ];

    for (title, date, start, end, category, department) in events {
        let form = EventForm {
            title: title.to_string(),
            date,
            start: start.to_string(),
            end: end.to_string(),
            category,
            department,
        };

        let _ = state.submit(&form);
    }
}
