//! Cart Models

use rust_decimal::Decimal;

use crate::domain::catalog::models::{ItemUuid, ShopUuid};

/// A pending purchase intent for one item at one shop.
///
/// The (shop, item) pair is unique within the cart. The unit price is
/// captured at add time and does not track later item price changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub shop: ShopUuid,
    pub item: ItemUuid,
    pub name: String,
    pub unit_price: Decimal,

    /// Always at least 1; a line that would drop to 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
