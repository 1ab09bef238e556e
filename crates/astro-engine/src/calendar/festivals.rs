//! Fixed-date annual festivals.
//!
//! Dates are civil (Gregorian) approximations and do not follow the lunar
//! calendar.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::calendar::types::CalendarEvent;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// (name, month 1..=12, day)
pub const FESTIVALS: [(&str, u32, u32); 15] = [
    ("Makar Sankranti", 1, 14),
    ("Vasant Panchami", 2, 5),
    ("Maha Shivaratri", 2, 14),
    ("Holi", 3, 8),
    ("Rama Navami", 4, 9),
    ("Akshaya Tritiya", 5, 3),
    ("Rath Yatra", 6, 2),
    ("Raksha Bandhan", 7, 15),
    ("Krishna Janmashtami", 8, 19),
    ("Ganesh Chaturthi", 8, 22),
    ("Navaratri", 9, 1),
    ("Dussehra", 9, 10),
    ("Karva Chauth", 10, 4),
    ("Diwali", 10, 12),
    ("Guru Nanak Jayanti", 11, 8),
];

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

/// Next midnight occurrence of (month, day) at or after `anchor`.
///
/// A festival whose midnight is already behind `anchor` rolls to next year.
fn next_occurrence(anchor: NaiveDateTime, month: u32, day: u32) -> Option<NaiveDateTime> {
    let this_year = midnight(anchor.year(), month, day)?;
    if this_year < anchor {
        midnight(anchor.year() + 1, month, day)
    } else {
        Some(this_year)
    }
}

/// Whole days from `from` to `to`, rounding partial days up.
fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    ((to - from).num_seconds() as f64 / SECONDS_PER_DAY).ceil() as i64
}

/// The soonest festival at or after `anchor`. Ties go to the earlier table entry.
pub fn next_festival(anchor: NaiveDateTime) -> Option<(&'static str, NaiveDateTime)> {
    let mut best: Option<(&'static str, NaiveDateTime)> = None;
    for (name, month, day) in FESTIVALS {
        let Some(date) = next_occurrence(anchor, month, day) else {
            continue;
        };
        if best.map_or(true, |(_, best_date)| date < best_date) {
            best = Some((name, date));
        }
    }
    best
}

/// The next `count` festivals after `from`, in chronological order.
///
/// The anchor moves to the day after each selected festival, so a festival
/// repeats only once the search has wrapped a full year. `days_until` is
/// measured from `from`.
pub fn upcoming_festivals(from: NaiveDateTime, count: usize) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(count);
    let mut anchor = from;

    for _ in 0..count {
        let Some((name, date)) = next_festival(anchor) else {
            log::warn!("no festival occurrence found after {anchor}");
            break;
        };
        events.push(CalendarEvent {
            occurrence_date: date,
            name: name.to_string(),
            days_until: days_between(from, date),
        });
        anchor = date + Duration::days(1);
    }

    events
}

/// The next five festivals after `from`.
pub fn next_five_festivals(from: NaiveDateTime) -> Vec<CalendarEvent> {
    upcoming_festivals(from, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_occurrence_rolls_year() {
        let anchor = midnight(2024, 11, 20).unwrap();
        assert_eq!(next_occurrence(anchor, 1, 14), midnight(2025, 1, 14));
        assert_eq!(next_occurrence(anchor, 12, 1), midnight(2024, 12, 1));
        // Same day at midnight counts as not yet passed.
        assert_eq!(next_occurrence(anchor, 11, 20), Some(anchor));
    }

    #[test]
    fn test_same_day_after_midnight_rolls_over() {
        let anchor = midnight(2024, 10, 12).unwrap() + Duration::hours(9);
        let (name, date) = next_festival(anchor).unwrap();
        assert_eq!(name, "Guru Nanak Jayanti");
        assert_eq!(date, midnight(2024, 11, 8).unwrap());
    }

    #[test]
    fn test_days_between_rounds_up() {
        let from = midnight(2024, 1, 1).unwrap() + Duration::hours(6);
        assert_eq!(days_between(from, midnight(2024, 1, 14).unwrap()), 13);
        assert_eq!(days_between(midnight(2024, 1, 1).unwrap(), midnight(2024, 1, 14).unwrap()), 13);
    }
}
