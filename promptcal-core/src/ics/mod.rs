//! ICS document generation.
//!
//! Writes calendar documents following the RFC 5545 line grammar.

mod escape;
mod generate;
mod options;

pub use escape::escape_text;
pub use generate::generate_ics;
pub use options::{parse_alarm_time, parse_utc_offset, IcsOptions, LineEnding};
