//! Catalog Models

use rust_decimal::Decimal;

use crate::{prices::PriceInput, uuids::TypedUuid};

/// Shop UUID
pub type ShopUuid = TypedUuid<Shop>;

/// Item UUID
pub type ItemUuid = TypedUuid<Item>;

/// Shop Model
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub uuid: ShopUuid,
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub image: String,
    pub delivery_time: String,
    pub delivery_fee_label: String,
    pub badges: Vec<String>,
    pub items: Vec<Item>,
}

/// New Shop Model
///
/// Shops start with an empty item list; items are added through the store so
/// every item gets its own id and a normalized price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewShop {
    pub name: String,
    pub category: String,
    pub image: String,
    pub delivery_fee_label: String,
}

/// Shop Update Model
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub delivery_fee_label: Option<String>,
}

/// Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub uuid: ItemUuid,
    pub name: String,

    /// Canonical amount, normalized at creation time.
    pub price: Decimal,
}

/// New Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: PriceInput,
}

/// Item Update Model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub price: Option<PriceInput>,
}
