//! Output options for document generation.

use chrono::{FixedOffset, NaiveTime};
use serde::{Deserialize, Deserializer};

use crate::error::{PromptCalError, PromptCalResult};

/// Line terminator placed after each document line.
///
/// The reference output joins lines with bare `\n`; RFC 5545 requires
/// CRLF. Both stay available, LF being the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Knobs for the generated document.
///
/// `Default` reproduces the reference output: alarms at 08:30 local,
/// converted through a fixed -07:00 offset, LF line endings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IcsOptions {
    /// PRODID property value emitted in the calendar header.
    pub prod_id: String,

    /// Local wall-clock time of the reminder alarm, "HH:MM".
    #[serde(deserialize_with = "de_alarm_time")]
    pub alarm_time: NaiveTime,

    /// Fixed offset the alarm trigger is converted through, "±HH:MM".
    /// Applied to the whole document; no DST adjustment.
    #[serde(deserialize_with = "de_utc_offset")]
    pub utc_offset: FixedOffset,

    pub line_ending: LineEnding,
}

impl Default for IcsOptions {
    fn default() -> Self {
        Self {
            prod_id: "-//PromptCal//PromptCal//EN".to_string(),
            alarm_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            utc_offset: FixedOffset::west_opt(7 * 3600).unwrap(),
            line_ending: LineEnding::Lf,
        }
    }
}

/// Parse an alarm time like "08:30" (seconds optional).
pub fn parse_alarm_time(s: &str) -> PromptCalResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| {
            PromptCalError::Config(format!("Invalid alarm time '{}', expected HH:MM", s))
        })
}

/// Parse a UTC offset like "-07:00" or "+05:30".
pub fn parse_utc_offset(s: &str) -> PromptCalResult<FixedOffset> {
    let invalid =
        || PromptCalError::Config(format!("Invalid UTC offset '{}', expected ±HH:MM", s));

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60) as i32).ok_or_else(invalid)
}

fn de_alarm_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_alarm_time(&s).map_err(serde::de::Error::custom)
}

fn de_utc_offset<'de, D>(deserializer: D) -> Result<FixedOffset, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_utc_offset(&s).map_err(serde::de::Error::custom)
}
