//! Cart store.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    domain::{
        cart::{errors::CartError, models::CartLine},
        catalog::models::{ItemUuid, ShopUuid},
    },
    prices::PriceInput,
};

/// Owns the flat list of cart lines.
///
/// Lines reference shops and items by id; price is captured at add time.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add an item to the cart, normalizing the price leniently.
    ///
    /// When a line for the same (shop, item) pair already exists its quantity
    /// is incremented instead of appending a second line. A quantity of 0 is
    /// bumped to 1; a line never exists at zero.
    pub fn add(
        &mut self,
        shop: ShopUuid,
        item: ItemUuid,
        name: impl Into<String>,
        price: PriceInput,
        quantity: u32,
    ) {
        let quantity = quantity.max(1);

        if let Some(line) = self.get_line_mut(shop, item) {
            line.quantity += quantity;
            debug!(%shop, %item, quantity = line.quantity, "incremented cart line");
            return;
        }

        let line = CartLine {
            shop,
            item,
            name: name.into(),
            unit_price: price.canonical(),
            quantity,
        };

        debug!(%shop, %item, quantity, "added cart line");

        self.lines.push(line);
    }

    /// Set a line's quantity to an absolute value; 0 removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line matches.
    pub fn set_quantity(
        &mut self,
        shop: ShopUuid,
        item: ItemUuid,
        quantity: u32,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(shop, item);
        }

        let line = self
            .get_line_mut(shop, item)
            .ok_or(CartError::LineNotFound)?;

        line.quantity = quantity;

        Ok(())
    }

    /// Remove a line unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line matches.
    pub fn remove(&mut self, shop: ShopUuid, item: ItemUuid) -> Result<(), CartError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.shop == shop && line.item == item)
            .ok_or(CartError::LineNotFound)?;

        self.lines.remove(position);

        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Remove every line belonging to the given shop, returning how many
    /// were evicted. Used when a shop is deleted from the catalog.
    pub fn evict_shop(&mut self, shop: ShopUuid) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| line.shop != shop);

        before - self.lines.len()
    }

    /// Group lines by shop, shops ordered by first occurrence in the cart.
    #[must_use]
    pub fn grouped_by_shop(&self) -> Vec<(ShopUuid, Vec<CartLine>)> {
        let mut groups: Vec<(ShopUuid, Vec<CartLine>)> = Vec::new();
        let mut positions: FxHashMap<ShopUuid, usize> = FxHashMap::default();

        for line in &self.lines {
            let position = *positions.entry(line.shop).or_insert_with(|| {
                groups.push((line.shop, Vec::new()));
                groups.len() - 1
            });

            if let Some((_, lines)) = groups.get_mut(position) {
                lines.push(line.clone());
            }
        }

        groups
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| acc + line.line_total())
    }

    fn get_line_mut(&mut self, shop: ShopUuid, item: ItemUuid) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.shop == shop && line.item == item)
    }
}
