//! Void Slots - Slot List Inventory Engine
//!
//! A slot list is a fixed number of slots, each empty or holding one item
//! stack. Items are stacked, replaced, removed and swapped between lists
//! while keeping every stack within its max size.
//!
//! # Features
//!
//! - Validated transfers that report how much moved and how much is left
//! - Cross-list swaps validated on both sides before anything moves
//! - First-fit bulk insertion and best-effort removal
//! - Depleted stacks clear their slot automatically
//! - Item-set and quantity-changed notifications keyed by list and index
//! - Pluggable placement rules (equipment slots, closures)
//!
//! # Example
//!
//! ```
//! use void_slots::prelude::*;
//!
//! let mut inventory: Inventory = SlotList::inventory();
//! let wood = ItemStack::new("wood", 5).with_max_stack(10);
//!
//! let left = inventory.add_item(&wood);
//! assert_eq!(left, 0);
//! assert_eq!(inventory.count_item("wood"), 5);
//! ```

pub mod config;
pub mod equipment;
pub mod error;
pub mod events;
pub mod item;
pub mod slot_list;
pub mod transfer;
pub mod validate;

pub mod prelude {
    pub use crate::config::{SlotListConfig, BASE_SLOT_COUNT, INVENTORY_SLOT_COUNT};
    pub use crate::equipment::{EquipmentSlot, EquipmentValidator};
    pub use crate::error::{SlotError, SlotResult};
    pub use crate::events::{ListId, SlotEventKind, SlotRef, SubscriberId};
    pub use crate::item::{ItemStack, Stackable};
    pub use crate::slot_list::{Inventory, SlotList};
    pub use crate::transfer::{Transfer, TransferResult};
    pub use crate::validate::{AcceptAll, SlotValidator};
}

pub use prelude::*;
