//! Slot list errors

use thiserror::Error;

/// Slot list errors
///
/// Routine inventory outcomes (full stack, rejected placement, not enough
/// items to remove) are not errors; they surface as `TransferResult::None`
/// or as a remainder. Only broken preconditions end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Slot index outside `0..max_count`
    #[error("Slot index {index} out of range (max count {max_count})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of slots in the list
        max_count: usize,
    },
    /// A list must have at least one slot
    #[error("Slot list capacity must be greater than zero")]
    ZeroCapacity,
    /// Configuration could not be parsed
    #[error("Invalid slot list config: {0}")]
    Config(String),
}

/// Result type for slot list operations
pub type SlotResult<T> = Result<T, SlotError>;
