use num_bigint::BigUint;
use thiserror::Error;

/// Errors returned when building or materializing a selection generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The element set is empty or the selection size is outside `1..=n`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `collect` would need more slots than a 32-bit indexed vector provides.
    ///
    /// Enumerate with `output` or `iter` instead.
    #[error("Capacity exceeded: {count} results, at most {max} can be collected")]
    CapacityExceeded {
        /// Number of results the generator would produce
        count: BigUint,
        /// Largest number of results `collect` accepts
        max: usize,
    },
}

/// Convenience type alias for Results with `Error`
pub type Result<T> = std::result::Result<T, Error>;
