//! Caller-facing input shapes and their validation.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ephemeris::types::BirthDetails;
use crate::error::BoundaryError;

/// Timezone as callers send it: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimezoneField {
    Hours(f64),
    Text(String),
}

impl TimezoneField {
    fn to_hours(&self) -> Result<f64, BoundaryError> {
        match self {
            TimezoneField::Hours(hours) => Ok(*hours),
            TimezoneField::Text(text) => text.trim().parse::<f64>().map_err(|e| {
                BoundaryError::MalformedInput {
                    field: "timezone",
                    reason: format!("{text:?} is not a number ({e})"),
                }
            }),
        }
    }
}

/// Birth details in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetailsInput {
    pub year: i32,
    pub month: i32,
    pub date: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: TimezoneField,
}

// (field, min, max), inclusive
const YEAR_RANGE: (&str, f64, f64) = ("year", 1900.0, 2100.0);
const MONTH_RANGE: (&str, f64, f64) = ("month", 1.0, 12.0);
const DAY_RANGE: (&str, f64, f64) = ("date", 1.0, 31.0);
const HOUR_RANGE: (&str, f64, f64) = ("hours", 0.0, 23.0);
const MINUTE_RANGE: (&str, f64, f64) = ("minutes", 0.0, 59.0);
const SECOND_RANGE: (&str, f64, f64) = ("seconds", 0.0, 59.0);
const LATITUDE_RANGE: (&str, f64, f64) = ("latitude", -90.0, 90.0);
const LONGITUDE_RANGE: (&str, f64, f64) = ("longitude", -180.0, 180.0);
const TIMEZONE_RANGE: (&str, f64, f64) = ("timezone", -12.0, 14.0);
// Calendar queries share the birth-year bounds.
const CALENDAR_YEAR_RANGE: (&str, f64, f64) = ("date", 1900.0, 2100.0);

fn check_range(value: f64, (field, min, max): (&'static str, f64, f64)) -> Result<(), BoundaryError> {
    // NaN fails both comparisons, so test for containment.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(BoundaryError::InvalidInputRange { field, value, min, max })
    }
}

impl BirthDetailsInput {
    /// Check every field against its documented range.
    ///
    /// A non-numeric timezone is reported first, then ranges are checked in
    /// wire order and the first failure is returned.
    pub fn validate(&self) -> Result<BirthDetails, BoundaryError> {
        let timezone_offset_hours = self.timezone.to_hours()?;

        check_range(self.year as f64, YEAR_RANGE)?;
        check_range(self.month as f64, MONTH_RANGE)?;
        check_range(self.date as f64, DAY_RANGE)?;
        check_range(self.hours as f64, HOUR_RANGE)?;
        check_range(self.minutes as f64, MINUTE_RANGE)?;
        check_range(self.seconds as f64, SECOND_RANGE)?;
        check_range(self.latitude, LATITUDE_RANGE)?;
        check_range(self.longitude, LONGITUDE_RANGE)?;
        check_range(timezone_offset_hours, TIMEZONE_RANGE)?;

        Ok(BirthDetails {
            year: self.year,
            month: self.month,
            day: self.date,
            hour: self.hours,
            minute: self.minutes,
            second: self.seconds,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone_offset_hours,
        })
    }
}

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a calendar query date.
///
/// Accepts `YYYY-MM-DD` (midnight) or a date with `HH:MM:SS`, separated by
/// `T` or a space. The year must fall in 1900..=2100.
pub fn parse_calendar_date(text: &str) -> Result<NaiveDateTime, BoundaryError> {
    let text = text.trim();
    let parsed = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| BoundaryError::MalformedInput {
            field: "date",
            reason: format!("{text:?} is not YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"),
        })?;

    check_range(parsed.year() as f64, CALENDAR_YEAR_RANGE)?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_field_forms() {
        assert_eq!(TimezoneField::Hours(5.5).to_hours(), Ok(5.5));
        assert_eq!(TimezoneField::Text(" -3.5 ".to_string()).to_hours(), Ok(-3.5));
        assert!(matches!(
            TimezoneField::Text("UTC".to_string()).to_hours(),
            Err(BoundaryError::MalformedInput { field: "timezone", .. })
        ));
    }

    #[test]
    fn test_check_range_rejects_nan() {
        assert!(check_range(f64::NAN, LATITUDE_RANGE).is_err());
        assert!(check_range(90.0, LATITUDE_RANGE).is_ok());
        assert!(check_range(-90.0, LATITUDE_RANGE).is_ok());
    }
}
