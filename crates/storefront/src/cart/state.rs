//! Cart state with derived totals.

use rust_decimal::Decimal;

use super::line::{CartLine, LineKey};

/// The cart: ordered lines plus derived `total` and `item_count`.
///
/// Fields are private so the derived values can only be produced by
/// recomputing them from the lines. `CartState::default()` is the empty cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    lines: Vec<CartLine>,
    total: Decimal,
    item_count: u64,
}

impl CartState {
    /// Build a state from lines, deriving `total` and `item_count`.
    ///
    /// A total past `Decimal::MAX` saturates there.
    pub(crate) fn from_lines(lines: Vec<CartLine>) -> Self {
        let total = lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let item_count = lines.iter().map(|line| u64::from(line.quantity())).sum();
        Self {
            lines,
            total,
            item_count,
        }
    }

    pub(crate) fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of `quantity * unit price` over all lines.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of all line quantities.
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.item_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line with exactly this key, if any.
    #[must_use]
    pub fn find(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.matches(key))
    }
}
