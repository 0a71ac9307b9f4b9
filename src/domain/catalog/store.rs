//! Catalog store.

use tracing::debug;

use crate::domain::catalog::{
    errors::CatalogError,
    models::{Item, ItemUpdate, ItemUuid, NewItem, NewShop, Shop, ShopUpdate, ShopUuid},
};

/// Owns the list of shops and, per shop, its items.
///
/// Deleting a shop or item returns the removed model so the caller can
/// cascade the removal into the cart; the store itself does not reach into
/// other stores.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    shops: Vec<Shop>,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All shops, newest first.
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn get_shop(&self, uuid: ShopUuid) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.uuid == uuid)
    }

    /// Create a shop with a fresh id and an empty item list, prepended to the
    /// shop list so the newest listing shows first.
    pub fn add_shop(&mut self, shop: NewShop) -> Shop {
        let created = Shop {
            uuid: ShopUuid::new(),
            name: shop.name,
            category: shop.category,
            rating: 0.0,
            image: shop.image,
            delivery_time: String::new(),
            delivery_fee_label: shop.delivery_fee_label,
            badges: Vec::new(),
            items: Vec::new(),
        };

        debug!(uuid = %created.uuid, name = %created.name, "added shop");

        self.shops.insert(0, created.clone());

        created
    }

    /// Merge the update's set fields into the matching shop.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] when no shop has this id.
    pub fn update_shop(&mut self, uuid: ShopUuid, update: ShopUpdate) -> Result<(), CatalogError> {
        let shop = self.get_shop_mut(uuid)?;

        if let Some(name) = update.name {
            shop.name = name;
        }
        if let Some(category) = update.category {
            shop.category = category;
        }
        if let Some(image) = update.image {
            shop.image = image;
        }
        if let Some(label) = update.delivery_fee_label {
            shop.delivery_fee_label = label;
        }

        Ok(())
    }

    /// Remove a shop, returning it so cart lines referencing it can be
    /// evicted by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] when no shop has this id.
    pub fn delete_shop(&mut self, uuid: ShopUuid) -> Result<Shop, CatalogError> {
        let position = self
            .shops
            .iter()
            .position(|shop| shop.uuid == uuid)
            .ok_or(CatalogError::ShopNotFound)?;

        debug!(%uuid, "deleted shop");

        Ok(self.shops.remove(position))
    }

    /// Add an item to a shop, normalizing its price. The new id is unique
    /// globally, not just within the shop.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] when no shop has this id.
    pub fn add_item(&mut self, shop: ShopUuid, item: NewItem) -> Result<ItemUuid, CatalogError> {
        let shop = self.get_shop_mut(shop)?;

        let created = Item {
            uuid: ItemUuid::new(),
            name: item.name,
            price: item.price.canonical(),
        };
        let uuid = created.uuid;

        shop.items.push(created);

        Ok(uuid)
    }

    /// Merge the update's set fields into the matching item, normalizing a
    /// replacement price.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] or [`CatalogError::ItemNotFound`].
    pub fn update_item(
        &mut self,
        shop: ShopUuid,
        item: ItemUuid,
        update: ItemUpdate,
    ) -> Result<(), CatalogError> {
        let item = self.get_item_mut(shop, item)?;

        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(price) = update.price {
            item.price = price.canonical();
        }

        Ok(())
    }

    /// Remove an item, returning it so the matching cart line can be evicted
    /// by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShopNotFound`] or [`CatalogError::ItemNotFound`].
    pub fn delete_item(&mut self, shop: ShopUuid, item: ItemUuid) -> Result<Item, CatalogError> {
        let shop = self.get_shop_mut(shop)?;

        let position = shop
            .items
            .iter()
            .position(|candidate| candidate.uuid == item)
            .ok_or(CatalogError::ItemNotFound)?;

        Ok(shop.items.remove(position))
    }

    fn get_shop_mut(&mut self, uuid: ShopUuid) -> Result<&mut Shop, CatalogError> {
        self.shops
            .iter_mut()
            .find(|shop| shop.uuid == uuid)
            .ok_or(CatalogError::ShopNotFound)
    }

    fn get_item_mut(&mut self, shop: ShopUuid, item: ItemUuid) -> Result<&mut Item, CatalogError> {
        self.get_shop_mut(shop)?
            .items
            .iter_mut()
            .find(|candidate| candidate.uuid == item)
            .ok_or(CatalogError::ItemNotFound)
    }
}
