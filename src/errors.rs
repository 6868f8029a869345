//! Error types.

use displaydoc::Display;

/// Failure modes of parameter handling and input classification. Once a
/// parameter set has been constructed, hashing itself cannot fail.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum RescuePrimeError {
    /// invalid parameter set: {0}
    InvalidParameterSet(String),
    /// unsupported input type: {0}
    UnsupportedInput(String),
}

impl std::error::Error for RescuePrimeError {}
