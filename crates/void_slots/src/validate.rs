//! Placement validation hooks

/// Decides whether an item (or emptiness) may be placed at a slot index
///
/// Consulted before any validated set, every swap and each step of a bulk
/// add. Nothing is mutated when it returns `false`.
pub trait SlotValidator<I> {
    /// Check if `item` may go into slot `index`
    fn validate(&self, item: Option<&I>, index: usize) -> bool;
}

/// Permits every placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<I> SlotValidator<I> for AcceptAll {
    fn validate(&self, _item: Option<&I>, _index: usize) -> bool {
        true
    }
}

impl<I, F> SlotValidator<I> for F
where
    F: Fn(Option<&I>, usize) -> bool,
{
    fn validate(&self, item: Option<&I>, index: usize) -> bool {
        self(item, index)
    }
}

/// Pin a closure to the validator signature so its argument types infer
pub fn from_fn<I, F>(f: F) -> F
where
    F: Fn(Option<&I>, usize) -> bool,
{
    f
}
