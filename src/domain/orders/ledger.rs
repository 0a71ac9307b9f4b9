//! Order ledger.

use tracing::debug;

use crate::domain::orders::{
    errors::OrdersError,
    models::{Order, OrderStatus, OrderUuid},
};

/// Owns the historical list of orders, newest first. Orders are never
/// deleted; cancellation is a status transition only.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get_order(&self, uuid: OrderUuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.uuid == uuid)
    }

    /// Prepend a batch of newly created orders, keeping their batch order.
    pub fn record(&mut self, new_orders: Vec<Order>) {
        let existing = std::mem::take(&mut self.orders);

        self.orders = new_orders;
        self.orders.extend(existing);
    }

    /// Set the order's status to Cancelled.
    ///
    /// Cancelling an already-cancelled order is harmless and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::NotFound`] when no order has this id.
    pub fn cancel(&mut self, uuid: OrderUuid) -> Result<(), OrdersError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.uuid == uuid)
            .ok_or(OrdersError::NotFound)?;

        order.status = OrderStatus::Cancelled;

        debug!(%uuid, "cancelled order");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::catalog::models::ShopUuid,
        session::{CurrentUser, Role},
    };

    use super::*;

    fn order(uuid: OrderUuid) -> Order {
        Order {
            uuid,
            shop: ShopUuid::new(),
            lines: Vec::new(),
            subtotal: Decimal::ZERO,
            delivery_fee: Decimal::new(590, 2),
            total: Decimal::new(590, 2),
            status: OrderStatus::Pending,
            customer: CurrentUser {
                name: "Ana".to_owned(),
                avatar: String::new(),
                role: Role::Client,
            },
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn record_prepends_newest_batch() {
        let mut ledger = OrderLedger::new();
        let older = OrderUuid::new();
        let newer = OrderUuid::new();

        ledger.record(vec![order(older)]);
        ledger.record(vec![order(newer)]);

        assert_eq!(ledger.orders().first().map(|o| o.uuid), Some(newer));
        assert_eq!(ledger.orders().len(), 2);
    }

    #[test]
    fn cancel_transitions_pending_to_cancelled() -> TestResult {
        let mut ledger = OrderLedger::new();
        let uuid = OrderUuid::new();

        ledger.record(vec![order(uuid)]);
        ledger.cancel(uuid)?;

        assert_eq!(
            ledger.get_order(uuid).map(|o| o.status),
            Some(OrderStatus::Cancelled)
        );

        Ok(())
    }

    #[test]
    fn cancel_is_idempotent() -> TestResult {
        let mut ledger = OrderLedger::new();
        let uuid = OrderUuid::new();

        ledger.record(vec![order(uuid)]);
        ledger.cancel(uuid)?;
        ledger.cancel(uuid)?;

        assert_eq!(
            ledger.get_order(uuid).map(|o| o.status),
            Some(OrderStatus::Cancelled)
        );

        Ok(())
    }

    #[test]
    fn cancel_unknown_uuid_changes_nothing() {
        let mut ledger = OrderLedger::new();
        let kept = OrderUuid::new();

        ledger.record(vec![order(kept)]);

        let result = ledger.cancel(OrderUuid::new());

        assert!(
            matches!(result, Err(OrdersError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(
            ledger.get_order(kept).map(|o| o.status),
            Some(OrderStatus::Pending)
        );
    }
}
