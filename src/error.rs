//! Error type shared by the distance table and the solvers.

use std::fmt;

/// Errors surfaced by table accessors and solver construction.
///
/// Degenerate runtime conditions (an unreachable city during nearest-neighbor
/// construction, an invalid chromosome during evaluation) are handled by
/// fallback policies and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TspError {
    /// The requested city name is not in the table.
    CityNotFound(String),
    /// A city index outside `0..len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cities in the table.
        len: usize,
    },
    /// A solver configuration that fails validation.
    InvalidConfig(String),
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::CityNotFound(name) => write!(f, "city '{name}' not found"),
            TspError::IndexOutOfRange { index, len } => {
                write!(f, "city index {index} out of range for {len} cities")
            }
            TspError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for TspError {}
