//! Deterministic placeholder positions.
//!
//! There is no ephemeris behind these numbers. Each body's placement is a
//! trigonometric projection of a seed built from the birth details, so the
//! same input always yields the same chart. Consumers depend on this exact
//! derivation; do not swap in an astronomical model here.

use crate::ephemeris::types::{sign_index_for_longitude, BirthDetails, Body, BodyPosition};
use crate::time::normalize_degrees;

/// Threshold on `sin(2·seed·(i+1))` above which a body is reported retrograde.
const RETROGRADE_THRESHOLD: f64 = 0.7;

/// Generates body positions from a birth-detail seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionGenerator;

impl PositionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Positions for all ten bodies, in canonical order.
    pub fn calc_positions(&self, details: &BirthDetails) -> [BodyPosition; 10] {
        let seed = details.seed();
        Body::ALL.map(|body| self.calc_body_position(body, seed))
    }

    /// Position for a single body given a precomputed seed.
    pub fn calc_body_position(&self, body: Body, seed: f64) -> BodyPosition {
        let factor = (body.index() + 1) as f64;
        let normalized_value = (seed * factor).sin() * 0.5 + 0.5;

        let scaled = normalized_value * 12.0;
        let mut sign_index = scaled.floor() as u8 + 1;
        let mut in_sign_degree = (scaled - scaled.floor()) * 30.0;
        let mut full_degree = (sign_index - 1) as f64 * 30.0 + in_sign_degree;

        // Rounding can push the sum onto the next sign boundary (or onto 360
        // when the sine hits 1.0). Re-derive from the rounded longitude.
        let mut crossed_from = None;
        if full_degree >= 360.0 || sign_index_for_longitude(full_degree) != sign_index {
            crossed_from = Some(full_degree);
            full_degree = normalize_degrees(full_degree);
            sign_index = sign_index_for_longitude(full_degree);
            in_sign_degree = (full_degree - (sign_index - 1) as f64 * 30.0).max(0.0);
        }

        let is_retrograde = (seed * factor * 2.0).sin() > RETROGRADE_THRESHOLD;

        let pos = BodyPosition {
            body,
            full_degree,
            in_sign_degree,
            sign_index,
            is_retrograde,
        };
        if let Some(raw) = crossed_from {
            log::debug!(
                "{body}: longitude {raw} crossed a sign boundary, normalized to {full_degree} in {}",
                pos.sign_name()
            );
        }
        pos
    }
}

/// Positions for all ten bodies, in canonical order.
pub fn generate_positions(details: &BirthDetails) -> [BodyPosition; 10] {
    PositionGenerator::new().calc_positions(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_is_mid_zodiac() {
        // sin(0) = 0, so every body sits at 0.5 → 0° Libra.
        let generator = PositionGenerator::new();
        for body in Body::ALL {
            let pos = generator.calc_body_position(body, 0.0);
            assert_eq!(pos.sign_index, 7);
            assert_eq!(pos.in_sign_degree, 0.0);
            assert_eq!(pos.full_degree, 180.0);
            assert_eq!(pos.sign_name(), "Libra");
            assert!(!pos.is_retrograde);
        }
    }

    #[test]
    fn test_matches_raw_formula() {
        let seed = 2042.75;
        let pos = PositionGenerator::new().calc_body_position(Body::Mars, seed);

        let v = (seed * 5.0).sin() * 0.5 + 0.5;
        let sign = (v * 12.0).floor() + 1.0;
        let in_sign = (v * 12.0 - (v * 12.0).floor()) * 30.0;
        assert_eq!(pos.sign_index as f64, sign);
        assert_eq!(pos.in_sign_degree, in_sign);
        assert_eq!(pos.full_degree, (sign - 1.0) * 30.0 + in_sign);
        assert_eq!(pos.is_retrograde, (seed * 10.0).sin() > 0.7);
    }

    #[test]
    fn test_sine_peak_wraps_to_aries() {
        // seed·1 = π/2 puts the Sun at the top of the sine.
        let seed = std::f64::consts::FRAC_PI_2;
        let pos = PositionGenerator::new().calc_body_position(Body::Sun, seed);
        assert_eq!(pos.sign_index, 1);
        assert_eq!(pos.full_degree, 0.0);
        assert_eq!(pos.in_sign_degree, 0.0);
        assert_eq!(pos.sign_name(), "Aries");
    }
}
