//! House cusps.
//!
//! Placeholder only: no house system (Placidus or otherwise) is computed.
//! Every chart gets the same two cusps so existing consumers keep seeing a
//! stable shape.

use crate::ephemeris::types::{sign_name, BirthDetails};
use crate::time::{to_julian_date, to_sidereal_time};
use serde::{Deserialize, Serialize};

/// A single house cusp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    #[serde(rename = "houseNumber")]
    pub house_number: u8,
    /// Cusp longitude, degrees
    #[serde(rename = "longitude")]
    pub cusp_longitude: f64,
    #[serde(rename = "sign")]
    pub sign_at_cusp: String,
    #[serde(rename = "degree")]
    pub degree_within_sign: f64,
}

const STUB_CUSPS: [(u8, f64, u8); 2] = [(1, 0.0, 1), (2, 30.0, 2)];

/// Fixed placeholder cusps: house 1 at 0° Aries, house 2 at 30° (Taurus).
///
/// The input does not affect the result.
pub fn placeholder_house_cusps(details: &BirthDetails) -> Vec<HouseCusp> {
    let lst = to_sidereal_time(to_julian_date(details), details.longitude);
    log::debug!("house cusps are stubbed; local sidereal time {lst:.4}° unused");

    STUB_CUSPS
        .iter()
        .map(|&(house_number, cusp_longitude, sign_index)| HouseCusp {
            house_number,
            cusp_longitude,
            sign_at_cusp: sign_name(sign_index).to_string(),
            degree_within_sign: 0.0,
        })
        .collect()
}
