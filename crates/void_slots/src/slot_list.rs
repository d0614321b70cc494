//! Slot list: a fixed number of slots, each empty or holding one stack

use crate::config::SlotListConfig;
use crate::error::{SlotError, SlotResult};
use crate::events::{ListId, SlotEventKind, SlotEvents, SlotRef, SubscriberId};
use crate::item::{ItemStack, Stackable};
use crate::transfer::{Transfer, TransferResult};
use crate::validate::{AcceptAll, SlotValidator};

/// A player inventory: a slot list with 40 slots and no placement rules
pub type Inventory<I = ItemStack> = SlotList<I, AcceptAll>;

/// Ordered, fixed-length collection of item stacks
///
/// Every occupant has a quantity between 1 and its max stack. Items handed
/// in are never stored; they are copied into a slot or merged into an
/// occupant, and the caller learns how much moved from the returned
/// [`Transfer`].
#[derive(Debug)]
pub struct SlotList<I: Stackable = ItemStack, V = AcceptAll> {
    id: ListId,
    label: String,
    /// Slots (None = empty)
    slots: Vec<Option<I>>,
    validator: V,
    events: SlotEvents,
}

impl<I: Stackable> SlotList<I, AcceptAll> {
    /// Create a list with `max_count` empty slots
    pub fn new(max_count: usize) -> Self {
        Self::with_validator(max_count, AcceptAll)
    }

    /// Create a list with the player inventory size
    pub fn inventory() -> Self {
        let config = SlotListConfig::inventory();
        Self::with_validator(config.max_count, AcceptAll).with_label(config.label)
    }

    /// Create a list from a config
    pub fn from_config(config: &SlotListConfig) -> SlotResult<Self> {
        config.validate()?;
        Ok(Self::new(config.max_count).with_label(config.label.clone()))
    }
}

impl<I: Stackable> Default for SlotList<I, AcceptAll> {
    fn default() -> Self {
        let config = SlotListConfig::default();
        Self::new(config.max_count).with_label(config.label)
    }
}

impl<I: Stackable, V: SlotValidator<I>> SlotList<I, V> {
    /// Create a list whose placements go through `validator`
    pub fn with_validator(max_count: usize, validator: V) -> Self {
        Self {
            id: ListId::next(),
            label: SlotListConfig::default().label,
            slots: vec![None; max_count],
            validator,
            events: SlotEvents::new(),
        }
    }

    /// Set the name used in log output
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Identity carried by this list's notifications
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Log label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of slots
    pub fn max_count(&self) -> usize {
        self.slots.len()
    }

    /// All slots in order, empty ones included
    pub fn items(&self) -> &[Option<I>] {
        &self.slots
    }

    /// Get slot contents
    pub fn get(&self, index: usize) -> Option<&I> {
        self.slots.get(index)?.as_ref()
    }

    /// Placement validator
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Get number of used slots
    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Get number of free slots
    pub fn free_slots(&self) -> usize {
        self.max_count() - self.used_slots()
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.free_slots() == 0
    }

    /// Check if every slot is empty
    pub fn is_empty(&self) -> bool {
        self.used_slots() == 0
    }

    /// Find first empty slot
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Find first slot holding `item_id`
    pub fn find_item(&self, item_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|i| i.id() == item_id))
    }

    /// Occupied slots with their indices
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, &I)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    /// Total quantity of an item across all slots
    ///
    /// Summed as `u64` so several full `u32` stacks can't overflow.
    pub fn count_item(&self, item_id: &str) -> u64 {
        self.slots
            .iter()
            .filter_map(|s| s.as_ref())
            .filter(|i| i.id() == item_id)
            .map(|i| u64::from(i.quantity()))
            .sum()
    }

    /// How much of `item`'s kind the list could absorb without new slots
    pub fn count_space_for(&self, item: &I) -> u64 {
        self.slots
            .iter()
            .map(|slot| match slot {
                None => u64::from(item.quantity_max()),
                Some(occupant) if occupant.stacks_with(item) => u64::from(occupant.space_left()),
                Some(_) => 0,
            })
            .sum()
    }

    /// Index an item snapshot claims to occupy in this list, if still true
    ///
    /// The slot must still hold the same item with the same quantity; a
    /// snapshot taken before the stack changed no longer resolves.
    pub fn resolve(&self, item: &I) -> Option<usize> {
        let slot = item.owner()?;
        if slot.list != self.id {
            return None;
        }
        self.get(slot.index)
            .filter(|occupant| {
                occupant.stacks_with(item) && occupant.quantity() == item.quantity()
            })
            .map(|_| slot.index)
    }

    /// Ask the validator whether `item` may go into slot `index`
    pub fn validate(&self, item: Option<&I>, index: usize) -> bool {
        self.validator.validate(item, index)
    }

    /// Subscribe to occupant changes
    pub fn on_item_set<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(SlotRef) + 'static,
    {
        self.events.subscribe(SlotEventKind::ItemSet, handler)
    }

    /// Subscribe to quantity changes of a staying occupant
    pub fn on_quantity_changed<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(SlotRef) + 'static,
    {
        self.events.subscribe(SlotEventKind::QuantityChanged, handler)
    }

    /// Remove a subscriber
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Transfer into a slot without consulting the validator
    ///
    /// `None` clears the slot. A different item (or an empty slot) gets an
    /// independent copy of up to one full stack; the same item merges into
    /// the occupant as far as its space allows.
    pub fn set_item(&mut self, index: usize, item: Option<&I>) -> SlotResult<Transfer<I>> {
        self.check_index(index)?;
        Ok(self.transfer_into(index, item))
    }

    /// Transfer into a slot if the validator allows it
    pub fn validate_and_set_item(
        &mut self,
        index: usize,
        item: Option<&I>,
    ) -> SlotResult<Transfer<I>> {
        self.check_index(index)?;
        if !self.validate(item, index) {
            log::trace!("{}: slot {} rejected placement", self.label, index);
            return Ok(Transfer::rejected(item.map_or(0, |i| i.quantity())));
        }
        Ok(self.transfer_into(index, item))
    }

    /// Exchange a slot of this list with a slot of another list
    ///
    /// Both placements are validated before anything moves. The other list's
    /// occupant goes into `this_index`; if that replaced this slot's occupant,
    /// the displaced stack goes to `other_index`. A merge sends nothing back.
    pub fn swap_items<W: SlotValidator<I>>(
        &mut self,
        other: &mut SlotList<I, W>,
        other_index: usize,
        this_index: usize,
    ) -> SlotResult<TransferResult> {
        self.check_index(this_index)?;
        other.check_index(other_index)?;

        let incoming = other.slots[other_index].as_ref();
        let outgoing = self.slots[this_index].as_ref();
        if !self.validate(incoming, this_index) || !other.validate(outgoing, other_index) {
            log::trace!(
                "{}: swap slot {} with {}[{}] rejected",
                self.label,
                this_index,
                other.label,
                other_index
            );
            return Ok(TransferResult::None);
        }

        let transfer = self.transfer_into(this_index, incoming);
        other.drain(other_index, transfer.moved);

        if transfer.result == TransferResult::Replaced {
            if let Some(displaced) = transfer.displaced.as_ref() {
                other.transfer_into(other_index, Some(displaced));
            }
        }

        log::debug!(
            "{}: swapped slot {} with {}[{}] ({:?})",
            self.label,
            this_index,
            other.label,
            other_index,
            transfer.result
        );
        Ok(transfer.result)
    }

    /// Exchange two slots of this list, with the same rules as `swap_items`
    pub fn swap_slots(&mut self, a: usize, b: usize) -> SlotResult<TransferResult> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a == b {
            return Ok(TransferResult::None);
        }

        if !self.validate(self.slots[b].as_ref(), a) || !self.validate(self.slots[a].as_ref(), b)
        {
            return Ok(TransferResult::None);
        }

        let incoming = self.slots[b].clone();
        let transfer = self.transfer_into(a, incoming.as_ref());
        self.drain(b, transfer.moved);

        if transfer.result == TransferResult::Replaced {
            if let Some(displaced) = transfer.displaced.as_ref() {
                self.transfer_into(b, Some(displaced));
            }
        }

        log::debug!("{}: swapped slots {} and {}", self.label, a, b);
        Ok(transfer.result)
    }

    /// Spread `item` over the list, first fit in index order
    ///
    /// Each empty or same-item slot gets a validated transfer until nothing
    /// is left. Returns the quantity that did not fit.
    pub fn add_item(&mut self, item: &I) -> u32 {
        let mut pending = item.clone_with_quantity(item.quantity());

        for index in 0..self.slots.len() {
            if pending.quantity() == 0 {
                break;
            }

            let eligible = match &self.slots[index] {
                None => true,
                Some(occupant) => occupant.stacks_with(&pending),
            };
            if !eligible || !self.validate(Some(&pending), index) {
                continue;
            }

            let transfer = self.transfer_into(index, Some(&pending));
            log::trace!(
                "{}: add {} -> slot {} moved {}",
                self.label,
                pending.id(),
                index,
                transfer.moved
            );
            pending.set_quantity(transfer.remainder);
        }

        if pending.quantity() > 0 {
            log::debug!(
                "{}: {} x{} did not fit",
                self.label,
                pending.id(),
                pending.quantity()
            );
        }
        pending.quantity()
    }

    /// Remove up to `count` of an item, scanning slots in order
    ///
    /// Depleted slots are cleared. Removing more than is present just
    /// empties every matching slot.
    pub fn remove_item(&mut self, item_id: &str, count: u32) {
        let mut remaining = count;

        for index in 0..self.slots.len() {
            if remaining == 0 {
                break;
            }
            let matches = self.slots[index]
                .as_ref()
                .is_some_and(|occupant| occupant.id() == item_id);
            if matches {
                remaining -= self.drain(index, remaining);
            }
        }

        log::debug!(
            "{}: removed {} x{}",
            self.label,
            item_id,
            count - remaining
        );
    }

    /// Take up to `amount` out of a slot as a new, unowned stack
    pub fn take_from_slot(&mut self, index: usize, amount: u32) -> SlotResult<Option<I>> {
        self.check_index(index)?;
        let taken = match self.slots[index].as_ref() {
            Some(occupant) => occupant.clone_with_quantity(amount.min(occupant.quantity())),
            None => return Ok(None),
        };
        if taken.quantity() == 0 {
            return Ok(None);
        }
        self.drain(index, taken.quantity());
        Ok(Some(taken))
    }

    /// Empty a slot, returning what it held
    pub fn clear_slot(&mut self, index: usize) -> SlotResult<Option<I>> {
        Ok(self.set_item(index, None)?.displaced)
    }

    fn check_index(&self, index: usize) -> SlotResult<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            log::warn!(
                "{}: slot index {} out of range (max count {})",
                self.label,
                index,
                self.slots.len()
            );
            Err(SlotError::IndexOutOfRange {
                index,
                max_count: self.slots.len(),
            })
        }
    }

    /// Core transfer; `index` must already be checked
    fn transfer_into(&mut self, index: usize, item: Option<&I>) -> Transfer<I> {
        let Some(item) = item else {
            let displaced = self.install(index, None);
            log::debug!("{}: cleared slot {}", self.label, index);
            return Transfer {
                result: TransferResult::Replaced,
                moved: 0,
                remainder: 0,
                displaced,
            };
        };

        let offered = item.quantity();
        if offered == 0 {
            return Transfer::rejected(0);
        }

        let stacks = self.slots[index]
            .as_ref()
            .is_some_and(|occupant| occupant.stacks_with(item));

        if stacks {
            let absorbed = self.slots[index]
                .as_mut()
                .map_or(0, |occupant| occupant.add_to_stack(offered));
            if absorbed > 0 {
                self.emit(SlotEventKind::QuantityChanged, index);
            }
            log::debug!(
                "{}: stacked {} x{} into slot {}",
                self.label,
                item.id(),
                absorbed,
                index
            );
            return Transfer {
                result: TransferResult::Stacked,
                moved: absorbed,
                remainder: offered - absorbed,
                displaced: None,
            };
        }

        let placed = offered.min(item.quantity_max());
        if placed == 0 {
            return Transfer::rejected(offered);
        }
        let displaced = self.install(index, Some(item.clone_with_quantity(placed)));
        log::debug!(
            "{}: placed {} x{} in slot {}",
            self.label,
            item.id(),
            placed,
            index
        );
        Transfer {
            result: TransferResult::Replaced,
            moved: placed,
            remainder: offered - placed,
            displaced,
        }
    }

    /// Swap a slot's occupant, moving the owner back-reference along
    fn install(&mut self, index: usize, item: Option<I>) -> Option<I> {
        let slot = SlotRef::new(self.id, index);
        let incoming = item.map(|mut item| {
            item.set_owner(Some(slot));
            item
        });

        let mut previous = std::mem::replace(&mut self.slots[index], incoming);
        if let Some(prev) = previous.as_mut() {
            prev.set_owner(None);
        }

        self.events.emit(SlotEventKind::ItemSet, slot);
        previous
    }

    /// Lower an occupant's quantity, clearing the slot when it hits zero.
    /// Returns the amount actually removed.
    fn drain(&mut self, index: usize, amount: u32) -> u32 {
        let Some(occupant) = self.slots[index].as_mut() else {
            return 0;
        };
        let removed = amount.min(occupant.quantity());
        if removed == 0 {
            return 0;
        }

        let left = occupant.quantity() - removed;
        occupant.set_quantity(left);

        if left == 0 {
            self.install(index, None);
        } else {
            self.emit(SlotEventKind::QuantityChanged, index);
        }
        removed
    }

    fn emit(&mut self, kind: SlotEventKind, index: usize) {
        self.events.emit(kind, SlotRef::new(self.id, index));
    }
}
