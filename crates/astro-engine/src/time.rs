//! Civil time to Julian Date and sidereal time conversion.
//!
//! The Julian Date here is computed from the civil components exactly as
//! given. The timezone offset travels alongside in [`BirthDetails`] and is
//! never folded into the Julian Date; the position generator and the lunar
//! calendar both rely on that convention.

use crate::ephemeris::types::BirthDetails;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Convert birth details to a Julian Date.
///
/// Uses `367·Y − ⌊7·(Y + ⌊(M+9)/12⌋)/4⌋ + ⌊275·M/9⌋ + D + 1721013.5` and adds
/// the time of day as a fraction of 24 hours. Accepts any integers, including
/// out-of-calendar values; range checks belong to the boundary layer.
pub fn to_julian_date(details: &BirthDetails) -> f64 {
    let year = details.year as f64;
    let month = details.month as f64;
    let day = details.day as f64;

    let mut jd = 367.0 * year - (7.0 * (year + ((month + 9.0) / 12.0).floor()) / 4.0).floor();
    jd += (275.0 * month / 9.0).floor() + day + 1_721_013.5;

    let hours = details.hour as f64 + details.minute as f64 / 60.0 + details.second as f64 / 3600.0;
    jd + hours / 24.0
}

/// Local mean sidereal time in degrees, `[0, 360)`.
///
/// Greenwich mean sidereal time from the polynomial in Julian centuries since
/// J2000.0, shifted by the observer's east longitude.
pub fn to_sidereal_time(julian_date: f64, longitude: f64) -> f64 {
    let days = julian_date - J2000_JD;
    let t = days / DAYS_PER_JULIAN_CENTURY;

    let mut theta = 280.460_618_37 + 360.985_647_366_29 * days;
    theta += 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    theta += longitude;

    normalize_degrees(theta)
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // A tiny negative remainder plus 360 can round up to exactly 360.
    if normalized >= 360.0 {
        normalized = 0.0;
    }
    normalized
}

/// Shortest arc between two longitudes, in `[0, 180]`.
pub fn angle_difference(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}
