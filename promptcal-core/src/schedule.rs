//! Prompt schedules and the events derived from them.
//!
//! A schedule is just an ordered prompt list anchored to a start date.
//! Position determines the calendar date: prompt i lands on
//! `start_date + i` days.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PromptCalError, PromptCalResult};
use crate::ics::IcsOptions;
use crate::uid::UidSource;

/// An ordered list of prompts anchored to a start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSchedule {
    pub start_date: NaiveDate,
    pub prompts: Vec<String>,
}

/// One all-day calendar event derived from a prompt.
///
/// `end` is exclusive, one day after `start` (all-day convention).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptEvent {
    pub uid: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub summary: String,
    pub alarm: Alarm,
}

/// A display reminder attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alarm {
    /// Absolute trigger instant, already converted to UTC.
    pub trigger: NaiveDateTime,
    pub description: String,
}

impl PromptSchedule {
    pub fn new(start_date: NaiveDate, prompts: Vec<String>) -> Self {
        Self {
            start_date,
            prompts,
        }
    }

    /// Derive one event per prompt, pulling a fresh UID for each.
    ///
    /// The alarm trigger is the event date at `options.alarm_time`,
    /// shifted through `options.utc_offset` into UTC. The offset is
    /// applied uniformly to every event in the schedule.
    ///
    /// Fails with `InvalidInput` when the prompt list is empty.
    pub fn events(
        &self,
        uids: &mut dyn UidSource,
        options: &IcsOptions,
    ) -> PromptCalResult<Vec<PromptEvent>> {
        if self.prompts.is_empty() {
            return Err(PromptCalError::InvalidInput(
                "prompt list is empty".to_string(),
            ));
        }

        let offset_secs = i64::from(options.utc_offset.local_minus_utc());

        let mut events = Vec::with_capacity(self.prompts.len());
        for (i, prompt) in self.prompts.iter().enumerate() {
            let date = self.start_date + Duration::days(i as i64);
            let local_trigger = date.and_time(options.alarm_time);

            events.push(PromptEvent {
                uid: uids.next_uid(),
                start: date,
                end: date + Duration::days(1),
                summary: prompt.clone(),
                alarm: Alarm {
                    trigger: local_trigger - Duration::seconds(offset_secs),
                    description: prompt.clone(),
                },
            });
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uid::SequentialUidSource;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn events_land_on_consecutive_days() {
        let schedule = PromptSchedule::new(
            date(2025, 7, 31),
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
        );
        let events = schedule
            .events(&mut SequentialUidSource::new(), &IcsOptions::default())
            .unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].start, date(2025, 7, 31));
        assert_eq!(events[1].start, date(2025, 8, 1));
        assert_eq!(events[2].start, date(2025, 8, 2));
        for event in &events {
            assert_eq!(event.end, event.start + Duration::days(1));
        }
    }

    #[test]
    fn summary_and_alarm_carry_prompt_text() {
        let schedule = PromptSchedule::new(date(2025, 7, 31), vec!["Ship the work".to_string()]);
        let events = schedule
            .events(&mut SequentialUidSource::new(), &IcsOptions::default())
            .unwrap();

        assert_eq!(events[0].summary, "Ship the work");
        assert_eq!(events[0].alarm.description, "Ship the work");
    }

    #[test]
    fn alarm_trigger_shifts_through_offset() {
        // 08:30 at -07:00 is 15:30 UTC
        let schedule = PromptSchedule::new(date(2025, 7, 31), vec!["A".to_string()]);
        let events = schedule
            .events(&mut SequentialUidSource::new(), &IcsOptions::default())
            .unwrap();

        assert_eq!(
            events[0].alarm.trigger,
            date(2025, 7, 31).and_hms_opt(15, 30, 0).unwrap()
        );
    }

    #[test]
    fn empty_prompt_list_is_rejected() {
        let schedule = PromptSchedule::new(date(2025, 7, 31), vec![]);
        let err = schedule
            .events(&mut SequentialUidSource::new(), &IcsOptions::default())
            .unwrap_err();

        assert!(matches!(err, PromptCalError::InvalidInput(_)));
    }

    #[test]
    fn month_boundary_rolls_over() {
        let schedule = PromptSchedule::new(
            date(2025, 12, 31),
            vec!["A".to_string(), "B".to_string()],
        );
        let events = schedule
            .events(&mut SequentialUidSource::new(), &IcsOptions::default())
            .unwrap();

        assert_eq!(events[1].start, date(2026, 1, 1));
        assert_eq!(events[1].end, date(2026, 1, 2));
    }
}
