//! List identity and slot change notifications

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a slot list, unique for the process lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListId(u64);

impl ListId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw value
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list#{}", self.0)
    }
}

/// A single slot of a specific list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotRef {
    /// List that owns the slot
    pub list: ListId,
    /// Slot index within the list
    pub index: usize,
}

impl SlotRef {
    /// Create a slot reference
    pub fn new(list: ListId, index: usize) -> Self {
        Self { list, index }
    }
}

/// Which notification stream an event belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotEventKind {
    /// The occupant of a slot was replaced or cleared
    ItemSet,
    /// The occupant stayed, its quantity changed
    QuantityChanged,
}

/// Subscriber handle, used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Slot notification callback
pub type SlotHandler = Box<dyn FnMut(SlotRef)>;

/// The two notification streams of a slot list
pub struct SlotEvents {
    item_set: Vec<(SubscriberId, SlotHandler)>,
    quantity_changed: Vec<(SubscriberId, SlotHandler)>,
    next_subscriber_id: u64,
}

impl SlotEvents {
    /// Create with no subscribers
    pub fn new() -> Self {
        Self {
            item_set: Vec::new(),
            quantity_changed: Vec::new(),
            next_subscriber_id: 1,
        }
    }

    /// Subscribe to a stream
    pub fn subscribe<F>(&mut self, kind: SlotEventKind, handler: F) -> SubscriberId
    where
        F: FnMut(SlotRef) + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;

        self.stream_mut(kind).push((id, Box::new(handler)));
        id
    }

    /// Remove a subscriber from whichever stream holds it
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscriber_count();
        self.item_set.retain(|(sub, _)| *sub != id);
        self.quantity_changed.retain(|(sub, _)| *sub != id);
        self.subscriber_count() != before
    }

    /// Total subscribers across both streams
    pub fn subscriber_count(&self) -> usize {
        self.item_set.len() + self.quantity_changed.len()
    }

    /// Deliver an event to every subscriber of its stream, in subscription order
    pub(crate) fn emit(&mut self, kind: SlotEventKind, slot: SlotRef) {
        for (_, handler) in self.stream_mut(kind).iter_mut() {
            handler(slot);
        }
    }

    fn stream_mut(&mut self, kind: SlotEventKind) -> &mut Vec<(SubscriberId, SlotHandler)> {
        match kind {
            SlotEventKind::ItemSet => &mut self.item_set,
            SlotEventKind::QuantityChanged => &mut self.quantity_changed,
        }
    }
}

impl Default for SlotEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SlotEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotEvents")
            .field("item_set", &self.item_set.len())
            .field("quantity_changed", &self.quantity_changed.len())
            .finish()
    }
}
