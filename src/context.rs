//! Storefront context.
//!
//! One `Storefront` is constructed at process start and passed by reference
//! to consumers; there are no hidden singletons. Mutations that span stores
//! (delete cascades, checkout) live here so the stores stay independent.
//!
//! Mutations run synchronously through `&mut self`; the remote fetch is the
//! only suspending operation, and exclusive access means two fetches can
//! never race to install a snapshot.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{info, warn};

use crate::{
    domain::{
        cart::{CartError, CartStore},
        catalog::{
            CatalogError, CatalogStore, merge_shops,
            models::{ItemUpdate, ItemUuid, NewItem, NewShop, Shop, ShopUpdate, ShopUuid},
        },
        orders::{
            OrderLedger, OrdersError,
            builder::build_orders,
            models::{Order, OrderUuid},
        },
        payments::{
            PaymentMethodsStore, PaymentsError,
            models::{PaymentMethod, PaymentMethodKind, PaymentMethodUuid},
        },
    },
    prices::PriceInput,
    remote::{RemoteCatalog, RemoteCatalogError},
    session::Session,
};

/// Owns every store plus the remote listing collaborator.
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartStore,
    ledger: OrderLedger,
    payments: PaymentMethodsStore,
    session: Session,
    remote: Arc<dyn RemoteCatalog>,

    /// Snapshot of the last successful remote fetch; empty until one lands.
    remote_shops: Vec<Shop>,

    revision: u64,
}

impl Storefront {
    #[must_use]
    pub fn new(session: Session, remote: Arc<dyn RemoteCatalog>) -> Self {
        Self {
            catalog: CatalogStore::new(),
            cart: CartStore::new(),
            ledger: OrderLedger::new(),
            payments: PaymentMethodsStore::new(),
            session,
            remote,
            remote_shops: Vec::new(),
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn orders(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn payments(&self) -> &PaymentMethodsStore {
        &self.payments
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Re-render signal: bumped on every mutation, so views can cheaply
    /// detect that something changed since they last read.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // Catalog

    pub fn add_shop(&mut self, shop: NewShop) -> Shop {
        let created = self.catalog.add_shop(shop);
        self.bump();

        created
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] when no shop has this id.
    pub fn update_shop(&mut self, shop: ShopUuid, update: ShopUpdate) -> Result<(), CatalogError> {
        self.catalog.update_shop(shop, update)?;
        self.bump();

        Ok(())
    }

    /// Delete a shop and evict its cart lines.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] when no shop has this id.
    pub fn delete_shop(&mut self, shop: ShopUuid) -> Result<(), CatalogError> {
        self.catalog.delete_shop(shop)?;
        self.cart.evict_shop(shop);
        self.bump();

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] when no shop has this id.
    pub fn add_item(&mut self, shop: ShopUuid, item: NewItem) -> Result<ItemUuid, CatalogError> {
        let created = self.catalog.add_item(shop, item)?;
        self.bump();

        Ok(created)
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] or [`CatalogError::ItemNotFound`].
    pub fn update_item(
        &mut self,
        shop: ShopUuid,
        item: ItemUuid,
        update: ItemUpdate,
    ) -> Result<(), CatalogError> {
        self.catalog.update_item(shop, item, update)?;
        self.bump();

        Ok(())
    }

    /// Delete an item and evict its cart line, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] or [`CatalogError::ItemNotFound`].
    pub fn delete_item(&mut self, shop: ShopUuid, item: ItemUuid) -> Result<(), CatalogError> {
        self.catalog.delete_item(shop, item)?;
        self.cart.remove(shop, item).ok();
        self.bump();

        Ok(())
    }

    // Cart

    pub fn add_to_cart(
        &mut self,
        shop: ShopUuid,
        item: ItemUuid,
        name: impl Into<String>,
        price: PriceInput,
        quantity: u32,
    ) {
        self.cart.add(shop, item, name, price, quantity);
        self.bump();
    }

    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line matches.
    pub fn set_cart_quantity(
        &mut self,
        shop: ShopUuid,
        item: ItemUuid,
        quantity: u32,
    ) -> Result<(), CartError> {
        self.cart.set_quantity(shop, item, quantity)?;
        self.bump();

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line matches.
    pub fn remove_from_cart(
        &mut self,
        shop: ShopUuid,
        item: ItemUuid,
    ) -> Result<(), CartError> {
        self.cart.remove(shop, item)?;
        self.bump();

        Ok(())
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.bump();
    }

    // Checkout and orders

    /// Convert the cart into one Pending order per shop, record them on the
    /// ledger (newest first) and clear the entire cart. Returns the newly
    /// created orders; an empty cart yields none.
    pub fn checkout(&mut self) -> Vec<Order> {
        let partitions = self.cart.grouped_by_shop();
        let orders = build_orders(partitions, self.session.current_user());

        info!(orders = orders.len(), "checkout");

        self.ledger.record(orders.clone());
        self.cart.clear();
        self.bump();

        orders
    }

    /// # Errors
    ///
    /// Returns [`OrdersError::NotFound`] when no order has this id.
    pub fn cancel_order(&mut self, order: OrderUuid) -> Result<(), OrdersError> {
        self.ledger.cancel(order)?;
        self.bump();

        Ok(())
    }

    // Payment methods

    pub fn add_payment_method(&mut self, kind: PaymentMethodKind) -> PaymentMethod {
        let created = self.payments.add(kind);
        self.bump();

        created
    }

    /// # Errors
    ///
    /// Returns [`PaymentsError::NotFound`] when no method has this id.
    pub fn update_payment_method(
        &mut self,
        method: PaymentMethodUuid,
        kind: PaymentMethodKind,
    ) -> Result<(), PaymentsError> {
        self.payments.update(method, kind)?;
        self.bump();

        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PaymentsError::NotFound`] when no method has this id.
    pub fn delete_payment_method(&mut self, method: PaymentMethodUuid) -> Result<(), PaymentsError> {
        self.payments.delete(method)?;
        self.bump();

        Ok(())
    }

    // Remote listing

    /// Fetch the remote shop listing and install it as the merge snapshot.
    ///
    /// On failure the previous snapshot is kept (initially empty, so the
    /// merged view degrades to local-only shops) and the error is surfaced
    /// once for the caller's user-facing notice. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCatalogError`] when the fetch fails.
    pub async fn sync_catalog(&mut self) -> Result<(), RemoteCatalogError> {
        match self.remote.fetch_shops().await {
            Ok(records) => {
                self.remote_shops = records.into_iter().map(Shop::from).collect();
                self.bump();

                Ok(())
            }
            Err(error) => {
                warn!(%error, "remote shop listing unavailable, showing local shops only");

                Err(error)
            }
        }
    }

    /// The remote snapshot merged with local shops, local winning on id
    /// collision. Materialized on every read, so it always reflects the
    /// latest local edits.
    #[must_use]
    pub fn merged_shops(&self) -> Vec<Shop> {
        merge_shops(self.remote_shops.clone(), self.catalog.shops())
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl Debug for Storefront {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Storefront")
            .field("catalog", &self.catalog)
            .field("cart", &self.cart)
            .field("ledger", &self.ledger)
            .field("payments", &self.payments)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::orders::models::OrderStatus,
        remote::catalog::{MockRemoteCatalog, RemoteShopRecord},
        session::{CurrentUser, Role},
    };

    use super::*;

    fn session() -> Session {
        Session::new(CurrentUser {
            name: "Ana".to_owned(),
            avatar: "https://example.com/ana.png".to_owned(),
            role: Role::Client,
        })
    }

    fn storefront(remote: MockRemoteCatalog) -> Storefront {
        Storefront::new(session(), Arc::new(remote))
    }

    fn quiet_remote() -> MockRemoteCatalog {
        let mut remote = MockRemoteCatalog::new();
        remote.expect_fetch_shops().returning(|| Ok(Vec::new()));

        remote
    }

    fn new_shop(name: &str) -> NewShop {
        NewShop {
            name: name.to_owned(),
            category: "Groceries".to_owned(),
            image: String::new(),
            delivery_fee_label: "R$ 5,90".to_owned(),
        }
    }

    fn remote_record(id: ShopUuid, name: &str) -> RemoteShopRecord {
        RemoteShopRecord {
            id,
            name: name.to_owned(),
            category: String::new(),
            rating: 0.0,
            image: String::new(),
            delivery_time: "60 min".to_owned(),
            delivery_fee: "R$ 5,90".to_owned(),
            badges: Vec::new(),
        }
    }

    #[tokio::test]
    async fn merged_view_prefers_local_edits_on_collision() -> TestResult {
        let mut front = storefront(MockRemoteCatalog::new());

        let local = front.add_shop(new_shop("Local Name"));
        let remote_only = ShopUuid::new();

        let records = vec![
            remote_record(local.uuid, "Remote Name"),
            remote_record(remote_only, "Remote Only"),
        ];

        let mut remote = MockRemoteCatalog::new();
        remote
            .expect_fetch_shops()
            .returning(move || Ok(records.clone()));
        front.remote = Arc::new(remote);

        front.sync_catalog().await?;

        let merged = front.merged_shops();
        let names: Vec<&str> = merged.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, ["Local Name", "Remote Only"]);

        Ok(())
    }

    #[tokio::test]
    async fn failed_sync_surfaces_error_and_keeps_local_view() {
        let mut remote = MockRemoteCatalog::new();
        remote.expect_fetch_shops().returning(|| {
            Err(RemoteCatalogError::UnexpectedResponse(
                "listing unavailable".to_owned(),
            ))
        });

        let mut front = storefront(remote);
        let shop = front.add_shop(new_shop("Local"));

        let result = front.sync_catalog().await;

        assert!(result.is_err(), "fetch failure should surface to the caller");
        assert_eq!(
            front.merged_shops().first().map(|s| s.uuid),
            Some(shop.uuid),
            "local shops should still be shown"
        );
    }

    #[test]
    fn deleting_a_shop_evicts_only_its_cart_lines() -> TestResult {
        let mut front = storefront(quiet_remote());

        let doomed = front.add_shop(new_shop("Doomed"));
        let kept = front.add_shop(new_shop("Kept"));

        let doomed_item = front.add_item(
            doomed.uuid,
            NewItem {
                name: "A".to_owned(),
                price: "1,00".into(),
            },
        )?;
        let kept_item = front.add_item(
            kept.uuid,
            NewItem {
                name: "B".to_owned(),
                price: "2,00".into(),
            },
        )?;

        front.add_to_cart(doomed.uuid, doomed_item, "A", "1,00".into(), 1);
        front.add_to_cart(kept.uuid, kept_item, "B", "2,00".into(), 1);

        front.delete_shop(doomed.uuid)?;

        assert_eq!(front.cart().lines().len(), 1);
        assert_eq!(front.cart().lines().first().map(|l| l.shop), Some(kept.uuid));

        Ok(())
    }

    #[test]
    fn deleting_an_item_evicts_its_cart_line() -> TestResult {
        let mut front = storefront(quiet_remote());

        let shop = front.add_shop(new_shop("Shop"));
        let item = front.add_item(
            shop.uuid,
            NewItem {
                name: "A".to_owned(),
                price: "1,00".into(),
            },
        )?;

        front.add_to_cart(shop.uuid, item, "A", "1,00".into(), 1);
        front.delete_item(shop.uuid, item)?;

        assert!(front.cart().is_empty());

        Ok(())
    }

    #[test]
    fn checkout_builds_one_order_per_shop_and_clears_the_cart() {
        let mut front = storefront(quiet_remote());

        let shop_a = ShopUuid::new();
        let shop_b = ShopUuid::new();

        front.add_to_cart(shop_a, ItemUuid::new(), "A", "2,50".into(), 2);
        front.add_to_cart(shop_b, ItemUuid::new(), "B", "10,00".into(), 1);

        let orders = front.checkout();

        assert_eq!(orders.len(), 2);
        assert!(front.cart().is_empty(), "checkout should clear the cart");
        assert_eq!(front.orders().orders().len(), 2);

        let subtotals: Vec<Decimal> = orders.iter().map(|o| o.subtotal).collect();
        assert_eq!(subtotals, [Decimal::new(500, 2), Decimal::new(1000, 2)]);

        for order in &orders {
            assert_eq!(order.total, order.subtotal + order.delivery_fee);
            assert_eq!(order.customer.name, "Ana");
        }
    }

    #[test]
    fn checkout_with_empty_cart_creates_no_orders() {
        let mut front = storefront(quiet_remote());

        let orders = front.checkout();

        assert!(orders.is_empty());
        assert!(front.orders().orders().is_empty());
    }

    #[test]
    fn cancel_order_round_trips_through_the_context() -> TestResult {
        let mut front = storefront(quiet_remote());

        front.add_to_cart(ShopUuid::new(), ItemUuid::new(), "A", "1,00".into(), 1);
        let orders = front.checkout();
        let order = orders.first().ok_or("expected one order")?;

        front.cancel_order(order.uuid)?;

        assert_eq!(
            front.orders().get_order(order.uuid).map(|o| o.status),
            Some(OrderStatus::Cancelled)
        );

        Ok(())
    }

    #[test]
    fn revision_increases_with_every_mutation() {
        let mut front = storefront(quiet_remote());

        let start = front.revision();
        front.add_shop(new_shop("One"));
        let after_shop = front.revision();
        front.add_payment_method(PaymentMethodKind::Pix);
        let after_payment = front.revision();

        assert!(start < after_shop && after_shop < after_payment);
    }
}
