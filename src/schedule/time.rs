use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

static HHMM_RE: OnceLock<Regex> = OnceLock::new();

fn hhmm_pattern() -> &'static Regex {
    HHMM_RE.get_or_init(|| {
        Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$")
            .expect("invalid time-of-day regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("invalid time '{0}': expected HH:MM between 00:00 and 23:59")]
    Format(String),
    #[error("minute offset {0} is outside the day range 0..{MINUTES_PER_DAY}")]
    Range(u16),
}

pub fn parse_hhmm(text: &str) -> Result<u16, TimeError> {
    let Some(captures) = hhmm_pattern().captures(text) else {
        return Err(TimeError::Format(text.to_string()));
    };

    let hours: u16 = captures[1].parse().map_err(|_| TimeError::Format(text.to_string()))?;
    let minutes: u16 = captures[2].parse().map_err(|_| TimeError::Format(text.to_string()))?;

    Ok(hours * 60 + minutes)
}

pub fn format_hhmm(minutes: u16) -> Result<String, TimeError> {
    if minutes >= MINUTES_PER_DAY {
        return Err(TimeError::Range(minutes));
    }

    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

pub mod hhmm {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_hhmm, parse_hhmm};

    pub fn serialize<S: Serializer>(minutes: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        let text = format_hhmm(*minutes).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_hhmm(&text).map_err(serde::de::Error::custom)
    }
}
