use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepUnit {
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

pub fn advance(anchor: NaiveDate, unit: StepUnit, direction: Direction) -> NaiveDate {
    let stepped = match (unit, direction) {
        (StepUnit::Day, Direction::Forward) => anchor.checked_add_days(Days::new(1)),
        (StepUnit::Day, Direction::Backward) => anchor.checked_sub_days(Days::new(1)),
        (StepUnit::Week, Direction::Forward) => anchor.checked_add_days(Days::new(7)),
        (StepUnit::Week, Direction::Backward) => anchor.checked_sub_days(Days::new(7)),
        (StepUnit::Month, Direction::Forward) => anchor.checked_add_months(Months::new(1)),
        (StepUnit::Month, Direction::Backward) => anchor.checked_sub_months(Months::new(1)),
        (StepUnit::Year, Direction::Forward) => anchor.checked_add_months(Months::new(12)),
        (StepUnit::Year, Direction::Backward) => anchor.checked_sub_months(Months::new(12)),
    };

    stepped.unwrap_or(anchor)
}

pub fn week_of(anchor: NaiveDate, week_start: Weekday) -> NaiveDate {
    let days_back =
        (7 + anchor.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;

    anchor
        .checked_sub_days(Days::new(days_back as u64))
        .unwrap_or(anchor)
}

pub fn visible_week(anchor: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let start = week_of(anchor, week_start);

    (0..7)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}
