//! Property-based tests for the cart invariants.

#![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use vitrine_core::Product;
use vitrine_integration_tests::{expected_totals, product};
use vitrine_storefront::{CartIntent, CartState, LineKey, reduce};

const SIZES: [Option<&str>; 3] = [None, Some("M"), Some("L")];
const COLORS: [Option<&str>; 3] = [None, Some("Red"), Some("White")];

fn catalog() -> Vec<Arc<Product>> {
    vec![product("a", 1999), product("b", 2999), product("c", 5)]
}

fn option_strategy(choices: [Option<&'static str>; 3]) -> impl Strategy<Value = Option<String>> {
    (0..choices.len()).prop_map(move |i| choices[i].map(str::to_owned))
}

fn intent_strategy(products: Vec<Arc<Product>>) -> impl Strategy<Value = CartIntent> {
    let count = products.len();
    let pick = move |i: usize| Arc::clone(&products[i]);
    let pick_key = pick.clone();
    let pick_set = pick.clone();

    prop_oneof![
        4 => (0..count, option_strategy(SIZES), option_strategy(COLORS))
            .prop_map(move |(i, size, color)| CartIntent::Add { product: pick(i), size, color }),
        1 => (0..count, option_strategy(SIZES), option_strategy(COLORS))
            .prop_map(move |(i, size, color)| CartIntent::Remove {
                key: LineKey { product_id: pick_key(i).id.clone(), size, color },
            }),
        2 => (0..count, option_strategy(SIZES), option_strategy(COLORS), -3i64..20)
            .prop_map(move |(i, size, color, quantity)| CartIntent::SetQuantity {
                key: LineKey { product_id: pick_set(i).id.clone(), size, color },
                quantity,
            }),
        1 => Just(CartIntent::Clear),
    ]
}

fn check_invariants(state: &CartState) -> Result<(), TestCaseError> {
    let (total, count) = expected_totals(state);
    prop_assert_eq!(state.total(), total);
    prop_assert_eq!(state.item_count(), count);

    let keys: HashSet<LineKey> = state.lines().iter().map(|line| line.key()).collect();
    prop_assert_eq!(keys.len(), state.lines().len());
    prop_assert!(state.lines().iter().all(|line| line.quantity() >= 1));
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(
        intents in prop::collection::vec(intent_strategy(catalog()), 0..60)
    ) {
        let mut state = CartState::default();
        for intent in intents {
            state = reduce(state, intent);
            check_invariants(&state)?;
        }
    }

    #[test]
    fn repeated_add_is_linear(n in 1u32..200, size in option_strategy(SIZES), color in option_strategy(COLORS)) {
        let item = product("a", 1999);
        let mut state = CartState::default();
        for _ in 0..n {
            state = reduce(state, CartIntent::Add {
                product: Arc::clone(&item),
                size: size.clone(),
                color: color.clone(),
            });
        }
        prop_assert_eq!(state.lines().len(), 1);
        prop_assert_eq!(state.item_count(), u64::from(n));
        prop_assert_eq!(state.total(), item.price * Decimal::from(n));
    }

    #[test]
    fn clear_always_yields_empty(
        intents in prop::collection::vec(intent_strategy(catalog()), 0..30)
    ) {
        let state = intents.into_iter().fold(CartState::default(), reduce);
        let cleared = reduce(state, CartIntent::Clear);
        prop_assert!(cleared.is_empty());
        prop_assert_eq!(cleared.total(), Decimal::ZERO);
        prop_assert_eq!(cleared.item_count(), 0);
    }

    #[test]
    fn non_positive_set_quantity_removes_key(
        intents in prop::collection::vec(intent_strategy(catalog()), 0..30),
        size in option_strategy(SIZES),
        quantity in i64::MIN..=0,
    ) {
        let state = intents.into_iter().fold(CartState::default(), reduce);
        let key = LineKey { product_id: "a".into(), size, color: None };
        let state = reduce(state, CartIntent::SetQuantity { key: key.clone(), quantity });
        prop_assert!(state.find(&key).is_none());
        check_invariants(&state)?;
    }
}
