//! Order builder.
//!
//! Turns the cart, grouped by shop, into one order per shop at checkout.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        cart::models::CartLine,
        catalog::models::ShopUuid,
        orders::models::{Order, OrderStatus, OrderUuid},
    },
    session::CurrentUser,
};

/// Flat delivery fee in minor units, applied once per shop partition.
///
/// Shops carry their own delivery fee label, but checkout does not consult
/// it yet; every partition gets this single flat fee.
const FLAT_DELIVERY_FEE_MINOR: i64 = 590;

/// The flat per-shop delivery fee.
#[must_use]
pub fn flat_delivery_fee() -> Decimal {
    Decimal::new(FLAT_DELIVERY_FEE_MINOR, 2)
}

/// Build one Pending order per shop partition.
///
/// Each order captures its partition's lines, a subtotal of price times
/// quantity, the flat delivery fee, and the customer placing it.
#[must_use]
pub fn build_orders(
    partitions: Vec<(ShopUuid, Vec<CartLine>)>,
    customer: &CurrentUser,
) -> Vec<Order> {
    partitions
        .into_iter()
        .map(|(shop, lines)| {
            let subtotal = lines
                .iter()
                .fold(Decimal::ZERO, |acc, line| acc + line.line_total());
            let delivery_fee = flat_delivery_fee();

            Order {
                uuid: OrderUuid::new(),
                shop,
                lines,
                subtotal,
                delivery_fee,
                total: subtotal + delivery_fee,
                status: OrderStatus::Pending,
                customer: customer.clone(),
                created_at: Timestamp::now(),
            }
        })
        .collect()
}
