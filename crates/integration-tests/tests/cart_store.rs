//! Integration tests for the cart store.
//!
//! These tests drive the store through its public intents only and check the
//! observable state after each transition.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use rust_decimal::Decimal;
use vitrine_integration_tests::{expected_totals, product};
use vitrine_storefront::{CartIntent, CartState, CartStore, LineKey, max_quantity, reduce};

// =============================================================================
// Merge and identity
// =============================================================================

#[test]
fn test_repeated_add_counts_and_totals() {
    let shirt = product("shirt-a", 2999);
    let mut store = CartStore::new();
    for n in 1..=5u32 {
        let state = store.add(Arc::clone(&shirt), Some("M"), Some("Red"));
        assert_eq!(state.item_count(), u64::from(n));
        assert_eq!(state.total(), shirt.price * Decimal::from(n));
        assert_eq!(state.lines().len(), 1);
    }
}

#[test]
fn test_size_change_creates_new_line() {
    let shirt = product("shirt-a", 2999);
    let mut store = CartStore::new();
    store.add(Arc::clone(&shirt), Some("M"), Some("Red"));
    let state = store.add(shirt, Some("L"), Some("Red"));

    assert_eq!(state.lines().len(), 2);
    assert!(state.lines().iter().all(|line| line.quantity() == 1));
}

#[test]
fn test_same_options_on_different_products_are_distinct() {
    let mut store = CartStore::new();
    store.add(product("a", 100), Some("M"), None);
    let state = store.add(product("b", 100), Some("M"), None);
    assert_eq!(state.lines().len(), 2);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_set_quantity_zero_removes_line() {
    let shirt = product("shirt-a", 2999);
    let key = LineKey::new("shirt-a", Some("M"), Some("White"));
    let mut store = CartStore::new();
    store.add(shirt, Some("M"), Some("White"));

    let state = store.set_quantity(key.clone(), 0);
    assert!(state.find(&key).is_none());
    assert_eq!(state.item_count(), 0);
}

#[test]
fn test_failed_removal_is_idempotent() {
    let mut store = CartStore::new();
    store.add(product("a", 1250), Some("S"), Some("Red"));
    store.add(product("b", 500), None, None);

    let before: Vec<LineKey> = store.state().lines().iter().map(|l| l.key()).collect();
    let total = store.state().total();
    let count = store.state().item_count();

    for key in [
        LineKey::new("a", None, None),
        LineKey::new("a", Some("S"), None),
        LineKey::new("b", Some("S"), None),
        LineKey::new("zzz", Some("S"), Some("Red")),
    ] {
        let state = store.remove(key);
        let after: Vec<LineKey> = state.lines().iter().map(|l| l.key()).collect();
        assert_eq!(after, before);
        assert_eq!(state.total(), total);
        assert_eq!(state.item_count(), count);
    }
}

#[test]
fn test_clear_always_empties() {
    let mut store = CartStore::new();
    assert!(store.clear().is_empty());

    store.add(product("a", 100), Some("S"), None);
    store.add(product("b", 200), None, Some("Red"));
    let state = store.clear();
    assert!(state.is_empty());
    assert_eq!(state.total(), Decimal::ZERO);
    assert_eq!(state.item_count(), 0);
}

// =============================================================================
// Reducer and store agree
// =============================================================================

#[test]
fn test_store_matches_pure_reducer() {
    let shirt = product("shirt-a", 2999);
    let intents = vec![
        CartIntent::Add {
            product: Arc::clone(&shirt),
            size: Some("M".to_string()),
            color: Some("White".to_string()),
        },
        CartIntent::Add {
            product: Arc::clone(&shirt),
            size: Some("M".to_string()),
            color: Some("White".to_string()),
        },
        CartIntent::SetQuantity {
            key: LineKey::new("shirt-a", Some("M"), Some("White")),
            quantity: 7,
        },
    ];

    let mut store = CartStore::new();
    let mut state = CartState::default();
    for intent in intents {
        state = reduce(state, intent.clone());
        store.dispatch(intent);
    }

    assert_eq!(state.total(), store.state().total());
    assert_eq!(state.item_count(), store.state().item_count());
    assert_eq!(expected_totals(&state), (state.total(), state.item_count()));
}

#[test]
fn test_subscribers_receive_every_transition() {
    let mut store = CartStore::new();
    let totals = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&totals);
    let second_calls = Rc::new(RefCell::new(0));
    let second = Rc::clone(&second_calls);

    store.subscribe(move |state| first.borrow_mut().push(state.total()));
    store.subscribe(move |_| *second.borrow_mut() += 1);

    let shirt = product("shirt-a", 2999);
    store.add(Arc::clone(&shirt), Some("M"), Some("White"));
    store.add(shirt, Some("M"), Some("White"));
    store.set_quantity(LineKey::new("shirt-a", Some("M"), Some("White")), 1);
    store.remove(LineKey::new("shirt-a", Some("M"), Some("White")));

    assert_eq!(
        *totals.borrow(),
        vec![
            Decimal::new(2999, 2),
            Decimal::new(5998, 2),
            Decimal::new(2999, 2),
            Decimal::ZERO,
        ]
    );
    assert_eq!(*second_calls.borrow(), 4);
}

// =============================================================================
// Money bounds
// =============================================================================

#[test]
fn test_huge_price_never_panics() {
    let mut vault = (*product("vault", 100)).clone();
    vault.price = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
    let vault = Arc::new(vault);
    let key = LineKey::new("vault", Some("M"), None);
    let mut store = CartStore::new();

    store.add(Arc::clone(&vault), Some("M"), None);
    let state = store.set_quantity(key.clone(), i64::MAX);
    let quantity = state.find(&key).map(|line| line.quantity());
    assert_eq!(quantity, Some(max_quantity(vault.price)));
    assert_eq!(expected_totals(state), (state.total(), state.item_count()));

    store.add(Arc::clone(&vault), Some("L"), None);
    let state = store.set_quantity(LineKey::new("vault", Some("L"), None), i64::MAX);
    assert_eq!(state.total(), Decimal::MAX);
    assert_eq!(expected_totals(state), (state.total(), state.item_count()));
}
