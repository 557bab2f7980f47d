use thiserror::Error;

/// Error types for `RingDeque` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RingDequeError {
    /// The allocator could not provide a block of the requested size
    #[error("Allocation failed: could not acquire a block of {slots} slots")]
    AllocationFailed {
        /// Number of element slots requested
        slots: usize,
    },
    /// The requested capacity exceeds the maximum allocation size
    #[error("Capacity overflow: {requested} slots exceed the maximum allocation size")]
    CapacityOverflow {
        /// Capacity that was requested
        requested: usize,
    },
    /// Index is beyond the current length of the deque
    #[error("Index out of bounds: index {index} is beyond deque length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the deque
        length: usize,
    },
}
