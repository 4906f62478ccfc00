//! Session cart store with synchronous subscribers.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};
use vitrine_core::Product;

use super::intent::{CartIntent, reduce};
use super::line::LineKey;
use super::state::CartState;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&CartState)>;

/// Owner of the session's cart.
///
/// Construct one at startup and pass it to whatever drives the screens.
/// Intents are applied one at a time, to completion, on the caller's thread.
/// After each transition every listener is called with the new state, in
/// subscription order.
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// A store holding the empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CartState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current cart.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Register a listener called after every committed transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Apply an intent and notify listeners.
    #[instrument(skip_all, fields(intent = intent.kind()))]
    pub fn dispatch(&mut self, intent: CartIntent) -> &CartState {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, intent);

        debug!(
            lines = self.state.lines().len(),
            item_count = self.state.item_count(),
            total = %self.state.total(),
            "cart updated"
        );

        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
        &self.state
    }

    /// Add one unit of `product`.
    pub fn add(
        &mut self,
        product: Arc<Product>,
        size: Option<&str>,
        color: Option<&str>,
    ) -> &CartState {
        self.dispatch(CartIntent::Add {
            product,
            size: size.map(str::to_owned),
            color: color.map(str::to_owned),
        })
    }

    /// Delete the line with exactly this key.
    pub fn remove(&mut self, key: LineKey) -> &CartState {
        self.dispatch(CartIntent::Remove { key })
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, key: LineKey, quantity: i64) -> &CartState {
        self.dispatch(CartIntent::SetQuantity { key, quantity })
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> &CartState {
        self.dispatch(CartIntent::Clear)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
