//! Item stacks and the capability contract slot lists consume

use crate::events::SlotRef;
use serde::{Deserialize, Serialize};

/// Max stack used when an item doesn't specify one
pub const DEFAULT_MAX_STACK: u32 = 99;

/// What a slot list needs from the items it stores
///
/// Identity is the string id: two stacks with the same id merge, anything
/// else replaces. The owner back-reference is written only by the list that
/// currently holds the item.
pub trait Stackable: Clone {
    /// Stable identity used for stacking and matching
    fn id(&self) -> &str;

    /// Current quantity
    fn quantity(&self) -> u32;

    /// Overwrite the quantity
    fn set_quantity(&mut self, quantity: u32);

    /// Largest quantity one stack may hold
    fn quantity_max(&self) -> u32;

    /// Slot currently holding this item
    fn owner(&self) -> Option<SlotRef>;

    /// Install or clear the owner back-reference
    fn set_owner(&mut self, owner: Option<SlotRef>);

    /// Room left before the stack is full
    fn space_left(&self) -> u32 {
        self.quantity_max().saturating_sub(self.quantity())
    }

    /// Merge up to `amount` into this stack, returning what was absorbed
    fn add_to_stack(&mut self, amount: u32) -> u32 {
        let absorbed = amount.min(self.space_left());
        self.set_quantity(self.quantity() + absorbed);
        absorbed
    }

    /// Check if both stacks are the same item
    fn stacks_with(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Independent copy holding `quantity` and no owner
    fn clone_with_quantity(&self, quantity: u32) -> Self {
        let mut copy = self.clone();
        copy.set_quantity(quantity);
        copy.set_owner(None);
        copy
    }
}

/// A stack of one item kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item ID
    pub item_id: String,
    /// Quantity
    pub quantity: u32,
    /// Maximum stack size (1 = not stackable)
    pub max_stack: u32,
    /// Owning slot, maintained by the slot list
    #[serde(skip)]
    owner: Option<SlotRef>,
}

impl ItemStack {
    /// Create a new item stack
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: quantity.max(1),
            max_stack: DEFAULT_MAX_STACK,
            owner: None,
        }
    }

    /// Create a single, non-stackable item
    pub fn single(item_id: impl Into<String>) -> Self {
        Self::new(item_id, 1).with_max_stack(1)
    }

    /// Set max stack size
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack = max.max(1);
        self
    }

    /// Check if this stack is empty
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Check if this stack is full
    pub fn is_full(&self) -> bool {
        self.quantity >= self.max_stack
    }

    /// Remove from this stack (returns amount actually removed)
    pub fn remove(&mut self, amount: u32) -> u32 {
        let to_remove = amount.min(self.quantity);
        self.quantity -= to_remove;
        to_remove
    }

    /// Split `amount` off into a new, unowned stack
    ///
    /// Only splits when something is left behind; use the whole stack otherwise.
    pub fn split(&mut self, amount: u32) -> Option<ItemStack> {
        if amount == 0 || amount >= self.quantity {
            return None;
        }
        self.quantity -= amount;
        Some(self.clone_with_quantity(amount))
    }
}

impl Stackable for ItemStack {
    fn id(&self) -> &str {
        &self.item_id
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    fn quantity_max(&self) -> u32 {
        self.max_stack
    }

    fn owner(&self) -> Option<SlotRef> {
        self.owner
    }

    fn set_owner(&mut self, owner: Option<SlotRef>) {
        self.owner = owner;
    }
}
