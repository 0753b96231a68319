//! Error types for lattice and honeycomb construction.

use thiserror::Error;

/// Errors that can occur while building lattices or honeycomb fills.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexcombError {
    /// A construction parameter is out of range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The geometry handed to an operation cannot be processed.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Result type for hexcomb operations.
pub type Result<T> = std::result::Result<T, HexcombError>;
