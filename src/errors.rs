use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, AlgsError>;

/// Errors that can occur when operating on the collections and algorithms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgsError {
    /// A node was constructed without a value.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// A positional operation was given an index outside the permitted range.
    #[error("{index} is out of bounds; the size of the sequence is: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Primes are counted from 1.
    #[error("prime indices start at 1")]
    ZeroPrimeIndex,

    /// A bulk sieve was asked to cover more than its table may hold.
    #[error("cannot sieve up to {limit}; the largest supported limit is {max}")]
    SieveLimitTooLarge { limit: u64, max: u64 },
}

impl AlgsError {
    /// Creates an IndexOutOfRange error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
