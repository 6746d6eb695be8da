//! Error types for coil calculations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A geometric or winding parameter is out of range.
    /// Reported for the first offending field only.
    #[error("invalid geometry: {field} must be {requirement}, got {value}")]
    InvalidGeometry {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("input length mismatch: {0}")]
    LengthMismatch(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
