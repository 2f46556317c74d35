//! Error type for cache construction and access.

/// Errors raised by [`DynFibonacci`](crate::DynFibonacci) and its driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Capacity cannot hold the two seed values.
    #[error("capacity {0} is below the minimum of 2")]
    CapacityTooSmall(usize),

    /// The mutating accessor was asked for an index past the allocation.
    #[error("index {index} is out of capacity {capacity}")]
    OutOfCapacity {
        /// Requested index.
        index: usize,
        /// Capacity allocated at construction.
        capacity: usize,
    },

    /// F(index) does not fit in a `u64`.
    #[error("F({0}) overflows u64")]
    Overflow(usize),

    /// The instance no longer owns a buffer.
    #[error("instance has been moved from")]
    MovedFrom,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A driver step observed something other than what it expected.
    #[error("scenario failed: {0}")]
    ScenarioFailed(String),
}

impl FibError {
    /// Whether this error is a violation of the cache's access contract.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::OutOfCapacity { .. } | Self::Overflow(_) | Self::MovedFrom
        )
    }
}
