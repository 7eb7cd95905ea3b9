//! Core types for the promptcal ecosystem.
//!
//! This crate turns an ordered list of prompts plus a start date into an
//! iCalendar document: one all-day event per prompt on consecutive days,
//! each with a display alarm at a fixed morning time.
//! - `schedule` holds the prompt list and derives events from it
//! - `ics` serializes events into the .ics line grammar
//! - `uid` provides swappable event identifier generation

pub mod error;
pub mod ics;
pub mod schedule;
pub mod uid;

pub use error::{PromptCalError, PromptCalResult};
pub use ics::{generate_ics, IcsOptions, LineEnding};
pub use schedule::{Alarm, PromptEvent, PromptSchedule};
pub use uid::{SequentialUidSource, UidSource, UuidSource};
