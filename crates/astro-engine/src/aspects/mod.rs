pub mod calculator;
pub mod types;

pub use calculator::{detect_aspects, AspectCalculator, DEFAULT_ORB};
pub use types::{Aspect, AspectKind};
