use thiserror::Error;

/// Errors raised while turning caller input into engine input.
///
/// The engine itself never fails; every variant here is detected before it
/// runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundaryError {
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    InvalidInputRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("malformed {field}: {reason}")]
    MalformedInput { field: &'static str, reason: String },
}
