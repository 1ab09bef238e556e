//! Lunar phase and tithi.
//!
//! The phase is the Julian Date folded over one synodic month. It is not
//! anchored to any real new moon, so it is a stand-in for the true
//! elongation rather than an astronomical phase.

use chrono::{Datelike, NaiveDateTime};

use crate::calendar::types::{Paksha, TithiInfo};
use crate::ephemeris::types::BirthDetails;
use crate::time::to_julian_date;

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Tithis per synodic month.
pub const TITHIS_PER_MONTH: u8 = 30;

const TITHI_NAMES: [&str; 30] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami",
    "Shashthi", "Saptami", "Ashtami", "Navami", "Dashami",
    "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Purnima",
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami",
    "Shashthi", "Saptami", "Ashtami", "Navami", "Dashami",
    "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Amavasya",
];

// Two names per civil month; "Kamada" opens and closes the cycle.
const EKADASHI_NAMES: [&str; 24] = [
    "Kamada Ekadashi",
    "Varuthini Ekadashi",
    "Mohini Ekadashi",
    "Apara Ekadashi",
    "Nirjala Ekadashi",
    "Yogini Ekadashi",
    "Devshayani Ekadashi",
    "Kamika Ekadashi",
    "Padmini Ekadashi",
    "Parama Ekadashi",
    "Indira Ekadashi",
    "Papankusha Ekadashi",
    "Rama Ekadashi",
    "Devutthana Ekadashi",
    "Utpanna Ekadashi",
    "Mokshada Ekadashi",
    "Saphala Ekadashi",
    "Putrada Ekadashi",
    "Satila Ekadashi",
    "Jaya Ekadashi",
    "Vijaya Ekadashi",
    "Amalaki Ekadashi",
    "Papamochani Ekadashi",
    "Kamada Ekadashi",
];

/// Tithi numbers that are ekadashi (Shukla 11, Krishna 11).
pub const EKADASHI_TITHIS: [u8; 2] = [11, 26];

/// Julian Date of a civil moment, with no location or offset.
pub fn julian_date_of(at: NaiveDateTime) -> f64 {
    to_julian_date(&BirthDetails::from_naive(at))
}

/// Fraction of the synodic month elapsed, in `[0, 1)`.
pub fn lunar_phase(julian_date: f64) -> f64 {
    let phase = julian_date.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    // rem_euclid may round up to the modulus itself for tiny negative inputs.
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

/// Tithi number (1..=30) and paksha for a phase.
pub fn tithi_for_phase(phase: f64) -> (u8, Paksha) {
    let number = ((phase * TITHIS_PER_MONTH as f64).floor() as u8 + 1).min(TITHIS_PER_MONTH);
    let paksha = if phase < 0.5 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    (number, paksha)
}

/// Name of tithi `number` (1..=30).
pub fn tithi_name(number: u8) -> &'static str {
    let idx = (number.clamp(1, TITHIS_PER_MONTH) - 1) as usize;
    TITHI_NAMES[idx]
}

pub fn is_ekadashi(tithi_number: u8) -> bool {
    EKADASHI_TITHIS.contains(&tithi_number)
}

/// Ekadashi name for a civil date: `(month0·2 + ⌊day/15⌋) mod 24`.
///
/// `month0` is the 0-based month (January = 0).
pub fn ekadashi_name(at: NaiveDateTime) -> &'static str {
    let index = (at.month0() as usize * 2 + at.day() as usize / 15) % EKADASHI_NAMES.len();
    EKADASHI_NAMES[index]
}

/// Tithi at `at`, with the following ekadashi.
pub fn current_tithi(at: NaiveDateTime) -> TithiInfo {
    let phase = lunar_phase(julian_date_of(at));
    let (tithi_number, paksha) = tithi_for_phase(phase);
    let is_ekadashi = is_ekadashi(tithi_number);
    log::debug!(
        "{at}: phase {phase:.4}, {paksha} {}",
        tithi_name(tithi_number)
    );

    TithiInfo {
        tithi_name: tithi_name(tithi_number).to_string(),
        tithi_number,
        paksha,
        is_ekadashi,
        ekadashi_name: is_ekadashi.then(|| ekadashi_name(at).to_string()),
        next_ekadashi: crate::calendar::ekadashi::next_ekadashi(at),
    }
}
