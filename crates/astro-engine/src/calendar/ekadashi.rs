//! Forward search for ekadashi occurrences.

use chrono::{Duration, NaiveDateTime};

use crate::calendar::lunar::{ekadashi_name, julian_date_of, lunar_phase, SYNODIC_MONTH_DAYS};
use crate::calendar::types::CalendarEvent;

const SHUKLA_EKADASHI_PHASE: f64 = 11.0 / 30.0;
const KRISHNA_EKADASHI_PHASE: f64 = 26.0 / 30.0;

/// Phase of the next ekadashi strictly after `phase`, possibly in the next
/// cycle (then greater than 1).
fn next_threshold(phase: f64) -> f64 {
    if phase < SHUKLA_EKADASHI_PHASE {
        SHUKLA_EKADASHI_PHASE
    } else if phase < KRISHNA_EKADASHI_PHASE {
        KRISHNA_EKADASHI_PHASE
    } else {
        SHUKLA_EKADASHI_PHASE + 1.0
    }
}

/// Whole days from a phase to the next ekadashi threshold. Always at least 1.
pub fn days_until_next_ekadashi(phase: f64) -> i64 {
    ((next_threshold(phase) - phase) * SYNODIC_MONTH_DAYS).ceil() as i64
}

/// The next ekadashi after `from`, at calendar-day granularity.
pub fn next_ekadashi(from: NaiveDateTime) -> CalendarEvent {
    let phase = lunar_phase(julian_date_of(from));
    let days_until = days_until_next_ekadashi(phase);
    let occurrence_date = from + Duration::days(days_until);

    CalendarEvent {
        occurrence_date,
        name: ekadashi_name(occurrence_date).to_string(),
        days_until,
    }
}

/// The next `count` ekadashis after `from`, in strictly increasing order.
///
/// After each hit the anchor moves to the following day. `days_until` is
/// measured from `from`, not from the moving anchor.
pub fn upcoming_ekadashis(from: NaiveDateTime, count: usize) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(count);
    let mut anchor = from;

    for _ in 0..count {
        let hit = next_ekadashi(anchor);
        anchor = hit.occurrence_date + Duration::days(1);
        events.push(CalendarEvent {
            days_until: (hit.occurrence_date - from).num_days(),
            ..hit
        });
    }

    events
}

/// The next five ekadashis after `from`.
pub fn next_five_ekadashis(from: NaiveDateTime) -> Vec<CalendarEvent> {
    upcoming_ekadashis(from, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(next_threshold(0.0), 11.0 / 30.0);
        assert_eq!(next_threshold(11.0 / 30.0), 26.0 / 30.0);
        assert_eq!(next_threshold(0.5), 26.0 / 30.0);
        assert_eq!(next_threshold(26.0 / 30.0), 11.0 / 30.0 + 1.0);
        assert_eq!(next_threshold(0.95), 11.0 / 30.0 + 1.0);
    }

    #[test]
    fn test_days_until_next_ekadashi() {
        // 11/30 of a month ≈ 10.83 days → 11
        assert_eq!(days_until_next_ekadashi(0.0), 11);
        // Sitting exactly on a threshold looks forward to the next one.
        let from_shukla = days_until_next_ekadashi(11.0 / 30.0);
        assert_eq!(from_shukla, ((15.0 / 30.0) * SYNODIC_MONTH_DAYS).ceil() as i64);
        for step in 0..1000 {
            let phase = step as f64 / 1000.0;
            let days = days_until_next_ekadashi(phase);
            assert!((1..=15).contains(&days), "phase {phase} gave {days}");
        }
    }
}
