//! Wire records and chart assembly.
//!
//! Field names here are a compatibility contract with existing consumers
//! and must not change.

use serde::{Deserialize, Serialize};

use crate::aspects::{detect_aspects, Aspect};
use crate::ephemeris::{generate_positions, BirthDetails, BodyPosition};
use crate::houses::{placeholder_house_cusps, HouseCusp};

/// Body placement as sent to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    #[serde(rename = "fullDegree")]
    pub full_degree: f64,
    #[serde(rename = "normDegree")]
    pub norm_degree: f64,
    /// "true" or "false"
    #[serde(rename = "isRetro")]
    pub is_retro: String,
    pub current_sign: u8,
}

impl From<&BodyPosition> for PlanetRecord {
    fn from(pos: &BodyPosition) -> Self {
        Self {
            name: pos.body.name().to_string(),
            full_degree: pos.full_degree,
            norm_degree: pos.in_sign_degree,
            is_retro: pos.is_retrograde.to_string(),
            current_sign: pos.sign_index,
        }
    }
}

/// Aspect as sent to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub planet1: String,
    pub planet2: String,
    pub angle: f64,
    pub orb: f64,
    #[serde(rename = "aspectName")]
    pub aspect_name: String,
    #[serde(rename = "isApplying")]
    pub is_applying: bool,
    #[serde(rename = "isSeparating")]
    pub is_separating: bool,
}

impl From<&Aspect> for AspectRecord {
    fn from(aspect: &Aspect) -> Self {
        Self {
            planet1: aspect.body_a.name().to_string(),
            planet2: aspect.body_b.name().to_string(),
            angle: aspect.angle,
            orb: aspect.orb,
            aspect_name: aspect.kind.name().to_string(),
            is_applying: aspect.is_applying,
            is_separating: aspect.is_separating,
        }
    }
}

/// Chart metadata echoed back to callers. Does not affect any computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub observation_point: String,
    pub ayanamsha: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            observation_point: "geocentric".to_string(),
            ayanamsha: "lahiri".to_string(),
        }
    }
}

/// Echo of the request inside a chart response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub year: i32,
    pub month: i32,
    pub date: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
    pub config: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub input: ChartInput,
    pub output: Vec<PlanetRecord>,
    pub aspects: Vec<AspectRecord>,
    #[serde(rename = "houseCusps")]
    pub house_cusps: Vec<HouseCusp>,
}

pub fn planet_records(positions: &[BodyPosition]) -> Vec<PlanetRecord> {
    positions.iter().map(PlanetRecord::from).collect()
}

pub fn aspect_records(aspects: &[Aspect]) -> Vec<AspectRecord> {
    aspects.iter().map(AspectRecord::from).collect()
}

/// Positions, aspects and house cusps for validated birth details.
pub fn compute_chart(details: &BirthDetails, config: &ChartConfig) -> ChartResponse {
    let positions = generate_positions(details);
    let aspects = detect_aspects(&positions);
    log::debug!(
        "chart {}-{:02}-{:02}: {} aspects",
        details.year,
        details.month,
        details.day,
        aspects.len()
    );
    for aspect in &aspects {
        log::trace!(
            "{} {} {} (orb {:.2})",
            aspect.body_a,
            aspect.kind,
            aspect.body_b,
            aspect.orb
        );
    }

    ChartResponse {
        status_code: 200,
        input: ChartInput {
            year: details.year,
            month: details.month,
            date: details.day,
            hours: details.hour,
            minutes: details.minute,
            seconds: details.second,
            latitude: details.latitude,
            longitude: details.longitude,
            timezone: details.timezone_offset_hours,
            config: config.clone(),
        },
        output: planet_records(&positions),
        aspects: aspect_records(&aspects),
        house_cusps: placeholder_house_cusps(details),
    }
}
