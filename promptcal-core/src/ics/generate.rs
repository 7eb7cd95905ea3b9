//! ICS document generation.

use crate::error::PromptCalResult;
use crate::schedule::{PromptEvent, PromptSchedule};
use crate::uid::UidSource;

use super::escape::escape_text;
use super::options::IcsOptions;

/// Generate the full .ics document for a prompt schedule.
///
/// One VEVENT/VALARM pair per prompt, in prompt order. Pure aside from
/// the UIDs pulled from `uids`: two calls with the same inputs differ
/// only in UID values, and not at all under a deterministic source.
pub fn generate_ics(
    schedule: &PromptSchedule,
    uids: &mut dyn UidSource,
    options: &IcsOptions,
) -> PromptCalResult<String> {
    let events = schedule.events(uids, options)?;
    Ok(render(&events, options))
}

fn render(events: &[PromptEvent], options: &IcsOptions) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        format!("PRODID:{}", options.prod_id),
    ];

    for event in events {
        push_event_lines(&mut lines, event);
    }

    lines.push("END:VCALENDAR".to_string());

    let eol = options.line_ending.as_str();
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        out.push_str(line);
        out.push_str(eol);
    }
    out
}

fn push_event_lines(lines: &mut Vec<String>, event: &PromptEvent) {
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", event.uid));
    lines.push(format!(
        "DTSTART;VALUE=DATE:{}",
        event.start.format("%Y%m%d")
    ));
    lines.push(format!("DTEND;VALUE=DATE:{}", event.end.format("%Y%m%d")));
    lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
    lines.push("TRANSP:TRANSPARENT".to_string());
    lines.push("STATUS:CONFIRMED".to_string());
    lines.push("SEQUENCE:0".to_string());
    lines.push("BEGIN:VALARM".to_string());
    lines.push(format!(
        "TRIGGER;VALUE=DATE-TIME:{}",
        event.alarm.trigger.format("%Y%m%dT%H%M%SZ")
    ));
    lines.push("ACTION:DISPLAY".to_string());
    lines.push(format!(
        "DESCRIPTION:{}",
        escape_text(&event.alarm.description)
    ));
    lines.push("END:VALARM".to_string());
    lines.push("END:VEVENT".to_string());
}
