//! Deterministic chart and Hindu calendar engine.
//!
//! Everything under [`time`], [`ephemeris`], [`aspects`], [`houses`] and
//! [`calendar`] is a pure function of its arguments. [`input`] and
//! [`response`] hold the caller-facing shapes.

pub mod aspects;
pub mod calendar;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod input;
pub mod response;
pub mod time;

pub use aspects::{detect_aspects, Aspect, AspectKind};
pub use calendar::{
    current_tithi, lunar_phase, next_ekadashi, next_five_ekadashis, next_five_festivals,
    CalendarEvent, Paksha, TithiInfo,
};
pub use ephemeris::{generate_positions, BirthDetails, Body, BodyPosition};
pub use error::BoundaryError;
pub use houses::{placeholder_house_cusps, HouseCusp};
pub use input::{parse_calendar_date, BirthDetailsInput, TimezoneField};
pub use response::{compute_chart, ChartConfig, ChartResponse};
pub use time::{to_julian_date, to_sidereal_time};
