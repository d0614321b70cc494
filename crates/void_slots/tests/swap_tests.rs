//! Cross-list swaps and slot notifications

use std::cell::RefCell;
use std::rc::Rc;

use void_slots::prelude::*;
use void_slots::validate::from_fn;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn stack(id: &str, quantity: u32) -> ItemStack {
    ItemStack::new(id, quantity).with_max_stack(10)
}

/// Collects (list, index) pairs from a notification stream
fn recorder() -> (Rc<RefCell<Vec<SlotRef>>>, impl FnMut(SlotRef) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |slot| sink.borrow_mut().push(slot))
}

#[test]
fn swap_exchanges_different_items() {
    init_logging();
    let mut a: SlotList = SlotList::new(1);
    let mut b: SlotList = SlotList::new(1);
    a.set_item(0, Some(&stack("wood", 3))).unwrap();
    b.set_item(0, Some(&stack("stone", 2))).unwrap();

    let result = a.swap_items(&mut b, 0, 0).unwrap();

    assert_eq!(result, TransferResult::Replaced);
    assert_eq!(a.get(0).unwrap().item_id, "stone");
    assert_eq!(a.get(0).unwrap().quantity, 2);
    assert_eq!(b.get(0).unwrap().item_id, "wood");
    assert_eq!(b.get(0).unwrap().quantity, 3);

    assert_eq!(a.resolve(a.get(0).unwrap()), Some(0));
    assert_eq!(b.resolve(b.get(0).unwrap()), Some(0));
}

#[test]
fn swap_same_item_only_stacks() {
    init_logging();
    let mut a: SlotList = SlotList::new(2);
    let mut b: SlotList = SlotList::new(2);
    a.set_item(1, Some(&stack("wood", 8))).unwrap();
    b.set_item(0, Some(&stack("wood", 5))).unwrap();

    let result = a.swap_items(&mut b, 0, 1).unwrap();

    assert_eq!(result, TransferResult::Stacked);
    assert_eq!(a.get(1).unwrap().quantity, 10);
    assert_eq!(b.get(0).unwrap().quantity, 3);
    assert_eq!(a.count_item("wood") + b.count_item("wood"), 13);
}

#[test]
fn swap_same_item_fully_absorbed_clears_other() {
    init_logging();
    let mut a: SlotList = SlotList::new(1);
    let mut b: SlotList = SlotList::new(1);
    a.set_item(0, Some(&stack("wood", 4))).unwrap();
    b.set_item(0, Some(&stack("wood", 5))).unwrap();

    a.swap_items(&mut b, 0, 0).unwrap();

    assert_eq!(a.get(0).unwrap().quantity, 9);
    assert!(b.get(0).is_none());
}

#[test]
fn swap_into_empty_slot_moves_item() {
    init_logging();
    let mut a: SlotList = SlotList::new(1);
    let mut b: SlotList = SlotList::new(1);
    b.set_item(0, Some(&stack("stone", 2))).unwrap();

    let result = a.swap_items(&mut b, 0, 0).unwrap();

    assert_eq!(result, TransferResult::Replaced);
    assert_eq!(a.get(0).unwrap().item_id, "stone");
    assert!(b.get(0).is_none());
}

#[test]
fn swap_from_empty_slot_moves_item_back() {
    init_logging();
    let mut a: SlotList = SlotList::new(1);
    let mut b: SlotList = SlotList::new(1);
    a.set_item(0, Some(&stack("wood", 6))).unwrap();

    a.swap_items(&mut b, 0, 0).unwrap();

    assert!(a.get(0).is_none());
    assert_eq!(b.get(0).unwrap().quantity, 6);
}

#[test]
fn swap_rejected_on_either_side_changes_nothing() {
    init_logging();
    let no_stone = from_fn(|item: Option<&ItemStack>, _| item.map_or(true, |i| i.item_id != "stone"));
    let mut a = SlotList::with_validator(1, no_stone);
    let mut b: SlotList = SlotList::new(1);
    a.set_item(0, Some(&stack("wood", 3))).unwrap();
    b.set_item(0, Some(&stack("stone", 2))).unwrap();

    // a refuses stone
    assert_eq!(a.swap_items(&mut b, 0, 0).unwrap(), TransferResult::None);
    assert_eq!(a.get(0).unwrap().item_id, "wood");
    assert_eq!(b.get(0).unwrap().item_id, "stone");

    // same pair seen from b: b accepts wood but a still refuses stone
    assert_eq!(b.swap_items(&mut a, 0, 0).unwrap(), TransferResult::None);
    assert_eq!(a.get(0).unwrap().quantity, 3);
    assert_eq!(b.get(0).unwrap().quantity, 2);
}

#[test]
fn swap_out_of_range() {
    init_logging();
    let mut a: SlotList = SlotList::new(1);
    let mut b: SlotList = SlotList::new(2);
    a.set_item(0, Some(&stack("wood", 1))).unwrap();

    assert!(a.swap_items(&mut b, 5, 0).is_err());
    assert!(a.swap_items(&mut b, 0, 1).is_err());
    assert_eq!(a.get(0).unwrap().quantity, 1);
}

#[test]
fn swap_with_equipment() {
    init_logging();
    let validator = EquipmentValidator::new(vec![EquipmentSlot::Head, EquipmentSlot::MainHand])
        .with_item("iron_helmet", EquipmentSlot::Head);
    let mut equipment: SlotList<ItemStack, EquipmentValidator> = SlotList::equipment(validator);
    let mut inventory: Inventory = SlotList::inventory();
    inventory.add_item(&ItemStack::single("iron_helmet"));
    inventory.add_item(&ItemStack::single("bread"));

    // bread can't be worn
    assert_eq!(
        equipment.swap_items(&mut inventory, 1, 0).unwrap(),
        TransferResult::None
    );

    // helmet goes on, the empty head slot leaves nothing behind
    assert_eq!(
        equipment.swap_items(&mut inventory, 0, 0).unwrap(),
        TransferResult::Replaced
    );
    assert_eq!(equipment.get(0).unwrap().item_id, "iron_helmet");
    assert!(inventory.get(0).is_none());
    assert_eq!(inventory.get(1).unwrap().item_id, "bread");
}

#[test]
fn notifications_carry_list_and_index() {
    init_logging();
    let mut a: SlotList = SlotList::new(2);
    let mut b: SlotList = SlotList::new(2);

    let (a_set, handler) = recorder();
    a.on_item_set(handler);
    let (b_set, handler) = recorder();
    b.on_item_set(handler);

    a.set_item(1, Some(&stack("wood", 3))).unwrap();
    b.set_item(0, Some(&stack("stone", 1))).unwrap();
    a_set.borrow_mut().clear();
    b_set.borrow_mut().clear();

    a.swap_items(&mut b, 0, 1).unwrap();

    assert!(a_set.borrow().iter().all(|s| s.list == a.id() && s.index == 1));
    assert!(!a_set.borrow().is_empty());
    assert!(b_set.borrow().iter().all(|s| s.list == b.id() && s.index == 0));
    assert!(!b_set.borrow().is_empty());
}

#[test]
fn quantity_changes_notify_without_item_set() {
    init_logging();
    let mut list: SlotList = SlotList::new(2);
    list.set_item(0, Some(&stack("wood", 3))).unwrap();

    let (sets, handler) = recorder();
    list.on_item_set(handler);
    let (changes, handler) = recorder();
    list.on_quantity_changed(handler);

    list.set_item(0, Some(&stack("wood", 2))).unwrap();
    list.remove_item("wood", 1);

    assert!(sets.borrow().is_empty());
    assert_eq!(changes.borrow().len(), 2);
    assert!(changes.borrow().iter().all(|s| s.index == 0));

    // stacking onto a full slot moves nothing and stays quiet
    list.set_item(0, Some(&stack("wood", 10))).unwrap();
    changes.borrow_mut().clear();
    list.set_item(0, Some(&stack("wood", 1))).unwrap();
    assert!(changes.borrow().is_empty());
}

#[test]
fn depletion_fires_item_set() {
    init_logging();
    let mut list: SlotList = SlotList::new(1);
    list.set_item(0, Some(&stack("wood", 3))).unwrap();

    let (sets, handler) = recorder();
    list.on_item_set(handler);

    list.remove_item("wood", 3);

    assert!(list.get(0).is_none());
    assert_eq!(sets.borrow().len(), 1);
}

#[test]
fn clearing_twice_notifies_twice() {
    init_logging();
    let mut list: SlotList = SlotList::new(1);
    list.set_item(0, Some(&stack("wood", 3))).unwrap();

    let (sets, handler) = recorder();
    list.on_item_set(handler);

    list.set_item(0, None).unwrap();
    list.set_item(0, None).unwrap();

    assert!(list.get(0).is_none());
    assert_eq!(sets.borrow().len(), 2);
}

#[test]
fn many_subscribers_and_unsubscribe() {
    init_logging();
    let mut list: SlotList = SlotList::new(1);

    let (first, handler) = recorder();
    let first_id = list.on_item_set(handler);
    let (second, handler) = recorder();
    list.on_item_set(handler);

    list.set_item(0, Some(&stack("wood", 1))).unwrap();
    assert!(list.unsubscribe(first_id));
    list.set_item(0, None).unwrap();

    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 2);
}
