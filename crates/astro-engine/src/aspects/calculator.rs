use crate::aspects::types::{Aspect, AspectKind};
use crate::ephemeris::types::BodyPosition;
use crate::time::angle_difference;

/// Orb allowed around every major aspect, in degrees.
pub const DEFAULT_ORB: f64 = 8.0;

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Find aspects between every pair of positions.
    ///
    /// Pairs are visited as (i, j > i) in input order. A pair within orb of
    /// more than one aspect angle yields one record per matching angle.
    pub fn detect_aspects(&self, positions: &[BodyPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        if positions.len() < 2 {
            return aspects;
        }

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let p1 = &positions[i];
                let p2 = &positions[j];
                let angle = angle_difference(p1.full_degree, p2.full_degree);

                for (kind, orb) in self.calculate_aspects(p1.full_degree, p2.full_degree) {
                    aspects.push(Aspect {
                        body_a: p1.body,
                        body_b: p2.body,
                        angle,
                        orb,
                        kind,
                        is_applying: false,
                        is_separating: false,
                    });
                }
            }
        }

        aspects
    }

    /// Every aspect two longitudes form, with its orb.
    pub fn calculate_aspects(&self, lon1: f64, lon2: f64) -> Vec<(AspectKind, f64)> {
        let angle_diff = angle_difference(lon1, lon2);

        AspectKind::ALL
            .iter()
            .filter_map(|kind| {
                let orb_value = (angle_diff - kind.exact_angle()).abs();
                (orb_value <= DEFAULT_ORB).then_some((*kind, orb_value))
            })
            .collect()
    }
}

/// Aspects between every pair of positions, in (i, j > i) order.
pub fn detect_aspects(positions: &[BodyPosition]) -> Vec<Aspect> {
    AspectCalculator::new().detect_aspects(positions)
}
