use crate::ephemeris::types::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// In the order the detector checks them.
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    /// Lower canonical index of the pair
    pub body_a: Body,
    pub body_b: Body,
    /// Shortest-arc separation, [0, 180]
    pub angle: f64,
    /// Deviation from the exact aspect angle
    pub orb: f64,
    pub kind: AspectKind,
    /// Direction of motion is not modelled; always false.
    pub is_applying: bool,
    /// Direction of motion is not modelled; always false.
    pub is_separating: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_matches_name() {
        for kind in AspectKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(format!("{}", AspectKind::Trine), "Trine");
    }
}
