//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{cart::models::CartLine, catalog::models::ShopUuid},
    session::CurrentUser,
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Fulfilment status of an order.
///
/// Only the Pending → Cancelled transition happens here; `InTransit` and
/// `Delivered` are set by an external fulfilment process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

/// Order Model
///
/// Immutable once created, except for the status field.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub shop: ShopUuid,

    /// Cart lines captured at checkout for this shop.
    pub lines: Vec<CartLine>,

    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub customer: CurrentUser,
    pub created_at: Timestamp,
}
