use super::time::MINUTES_PER_DAY;

pub const DEFAULT_STEP_MINUTES: u16 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: u16,
    pub end: u16,
    pub step: u16,
}

impl DayWindow {
    pub fn new(start: u16, end: u16, step: u16) -> Self {
        assert!(step > 0, "day window step must be positive");
        assert!(start < end, "day window start must precede its end");
        assert!(end <= MINUTES_PER_DAY, "day window must end within the day");
        assert!(
            (end - start) % step == 0,
            "day window span must be a whole number of steps"
        );
        Self { start, end, step }
    }

    pub fn standard() -> Self {
        Self::new(8 * 60, 20 * 60, DEFAULT_STEP_MINUTES)
    }

    pub fn full_day() -> Self {
        Self::new(0, MINUTES_PER_DAY, DEFAULT_STEP_MINUTES)
    }

    pub fn span(&self) -> u16 {
        self.end - self.start
    }

    pub fn slot_count(&self) -> u16 {
        self.span() / self.step
    }

    pub fn slots(&self) -> Vec<u16> {
        (self.start..self.end).step_by(self.step as usize).collect()
    }

    pub fn contains(&self, start_minute: u16, end_minute: u16) -> bool {
        start_minute >= self.start && end_minute <= self.end
    }

    pub fn slot_index(&self, minute: u16) -> u16 {
        minute.saturating_sub(self.start) / self.step
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self::standard()
    }
}
