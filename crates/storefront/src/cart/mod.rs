//! Shopping cart state machine.
//!
//! The cart is an ordered list of line items plus two derived fields, the
//! money `total` and the `item_count`. It changes only through the closed set
//! of [`CartIntent`]s, applied by the pure [`reduce`] function. A
//! [`CartStore`] owns the session's single [`CartState`], applies intents
//! synchronously, and notifies subscribers after every transition.
//!
//! Invariants held after every transition:
//! - `total` is the sum of `quantity * unit price` over all lines
//! - `item_count` is the sum of all line quantities
//! - no two lines share a [`LineKey`]
//! - every line has a quantity of at least 1

mod intent;
mod line;
mod state;
mod store;

pub use intent::{CartIntent, reduce};
pub use line::{CartLine, LineKey, max_quantity};
pub use state::CartState;
pub use store::{CartStore, SubscriptionId};
