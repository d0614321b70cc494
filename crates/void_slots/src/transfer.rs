//! Transfer outcomes

/// How a transfer into a slot resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransferResult {
    /// Rejected or nothing to move; the slot is unchanged
    #[default]
    None,
    /// Merged into an occupant of the same item
    Stacked,
    /// The slot's occupant changed (possibly to empty)
    Replaced,
}

/// Outcome of a single-slot transfer
///
/// The offered item is never modified. `moved` is what entered the slot and
/// `remainder` is what stays with the caller, so
/// `offered == moved + remainder` for every non-clearing transfer.
#[derive(Debug, Clone)]
pub struct Transfer<I> {
    /// How the transfer resolved
    pub result: TransferResult,
    /// Quantity that entered the slot
    pub moved: u32,
    /// Quantity left on the caller's side
    pub remainder: u32,
    /// Previous occupant, evicted by a replace or a clear
    pub displaced: Option<I>,
}

impl<I> Transfer<I> {
    /// A transfer that did nothing; the whole offer stays with the caller
    pub(crate) fn rejected(offered: u32) -> Self {
        Self {
            result: TransferResult::None,
            moved: 0,
            remainder: offered,
            displaced: None,
        }
    }

    /// Check if nothing happened
    pub fn is_none(&self) -> bool {
        self.result == TransferResult::None
    }

    /// Check if the offer merged into an existing stack
    pub fn is_stacked(&self) -> bool {
        self.result == TransferResult::Stacked
    }

    /// Check if the slot's occupant changed
    pub fn is_replaced(&self) -> bool {
        self.result == TransferResult::Replaced
    }

    /// Check if the whole offer was accepted
    pub fn is_complete(&self) -> bool {
        self.remainder == 0
    }
}
