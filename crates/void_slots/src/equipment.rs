//! Equipment slot restrictions
//!
//! An equipment list is a slot list where each index has a fixed slot kind
//! and only items registered for that kind may be placed there.

use crate::item::Stackable;
use crate::slot_list::SlotList;
use crate::validate::SlotValidator;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Equipment slot types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    /// Head armor (helmet, hat)
    Head,
    /// Chest armor
    Chest,
    /// Leg armor
    Legs,
    /// Foot armor (boots)
    Feet,
    /// Hand armor (gloves)
    Hands,
    /// Main hand weapon
    MainHand,
    /// Off hand (shield, second weapon)
    OffHand,
    /// Ring, amulet
    Accessory,
    /// Back slot (cape, backpack)
    Back,
    /// Custom slot
    Custom(u32),
}

impl EquipmentSlot {
    /// Standard layout (two accessory slots)
    pub fn all_standard() -> Vec<Self> {
        vec![
            Self::Head,
            Self::Chest,
            Self::Legs,
            Self::Feet,
            Self::Hands,
            Self::MainHand,
            Self::OffHand,
            Self::Accessory,
            Self::Accessory,
            Self::Back,
        ]
    }
}

/// Validator that only admits registered items into matching slot kinds
///
/// Clearing a slot is always allowed.
#[derive(Debug, Clone, Default)]
pub struct EquipmentValidator {
    /// Slot kind per index
    layout: Vec<EquipmentSlot>,
    /// Item ID -> kinds it can be worn in
    fits: HashMap<String, HashSet<EquipmentSlot>>,
}

impl EquipmentValidator {
    /// Create with an explicit layout
    pub fn new(layout: Vec<EquipmentSlot>) -> Self {
        Self {
            layout,
            fits: HashMap::new(),
        }
    }

    /// Create with the standard layout
    pub fn standard() -> Self {
        Self::new(EquipmentSlot::all_standard())
    }

    /// Register an item for a slot kind
    pub fn allow(&mut self, item_id: impl Into<String>, slot: EquipmentSlot) {
        self.fits.entry(item_id.into()).or_default().insert(slot);
    }

    /// Builder form of [`allow`](Self::allow)
    pub fn with_item(mut self, item_id: impl Into<String>, slot: EquipmentSlot) -> Self {
        self.allow(item_id, slot);
        self
    }

    /// Number of slots in the layout
    pub fn slot_count(&self) -> usize {
        self.layout.len()
    }

    /// Slot kind at an index
    pub fn slot_kind(&self, index: usize) -> Option<EquipmentSlot> {
        self.layout.get(index).copied()
    }

    /// First index with the given kind
    pub fn index_of(&self, slot: EquipmentSlot) -> Option<usize> {
        self.layout.iter().position(|s| *s == slot)
    }

    /// Check if an item can be worn in a slot kind
    pub fn fits(&self, item_id: &str, slot: EquipmentSlot) -> bool {
        self.fits
            .get(item_id)
            .is_some_and(|kinds| kinds.contains(&slot))
    }
}

impl<I: Stackable> SlotValidator<I> for EquipmentValidator {
    fn validate(&self, item: Option<&I>, index: usize) -> bool {
        let Some(item) = item else {
            return true;
        };
        self.slot_kind(index)
            .is_some_and(|kind| self.fits(item.id(), kind))
    }
}

impl<I: Stackable> SlotList<I, EquipmentValidator> {
    /// Create an equipment list sized to the validator's layout
    pub fn equipment(validator: EquipmentValidator) -> Self {
        let max_count = validator.slot_count();
        Self::with_validator(max_count, validator).with_label("equipment")
    }
}
