use serde::{Deserialize, Serialize};
use std::fmt;

/// Civil birth (or observation) moment and place.
///
/// Built once per request by the boundary layer; the engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Degrees, −90..90
    pub latitude: f64,
    /// Degrees east, −180..180
    pub longitude: f64,
    /// Hours from UTC, may be fractional
    pub timezone_offset_hours: f64,
}

impl BirthDetails {
    /// Calendar-only moment: location and offset zeroed.
    pub fn from_naive(dt: chrono::NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            year: dt.year(),
            month: dt.month() as i32,
            day: dt.day() as i32,
            hour: dt.hour() as i32,
            minute: dt.minute() as i32,
            second: dt.second() as i32,
            latitude: 0.0,
            longitude: 0.0,
            timezone_offset_hours: 0.0,
        }
    }

    /// Sum of every numeric field, the generator's seed.
    pub fn seed(&self) -> f64 {
        self.year as f64
            + self.month as f64
            + self.day as f64
            + self.hour as f64
            + self.minute as f64
            + self.second as f64
            + self.latitude
            + self.longitude
            + self.timezone_offset_hours
    }
}

/// The ten bodies, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// 0-based position in [`Body::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const SIGN_NAMES: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer",
    "Leo", "Virgo", "Libra", "Scorpio",
    "Sagittarius", "Capricorn", "Aquarius", "Pisces",
];

/// Name of the zodiac sign with 1-based index `sign_index`.
///
/// Indices outside 1..=12 wrap around the zodiac.
pub fn sign_name(sign_index: u8) -> &'static str {
    let idx = (sign_index as usize + 11) % 12;
    SIGN_NAMES[idx]
}

/// 1-based sign index for an ecliptic longitude in [0, 360).
pub fn sign_index_for_longitude(longitude: f64) -> u8 {
    (longitude / 30.0).floor() as u8 + 1
}

/// One generated body placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude, degrees
    pub full_degree: f64,
    /// Degrees into the sign, [0, 30)
    pub in_sign_degree: f64,
    /// 1..=12, Aries = 1
    pub sign_index: u8,
    pub is_retrograde: bool,
}

impl BodyPosition {
    pub fn sign_name(&self) -> &'static str {
        sign_name(self.sign_index)
    }
}
