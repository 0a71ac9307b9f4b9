//! Remote/local catalog merge.

use rustc_hash::FxHashMap;

use crate::domain::catalog::models::{Shop, ShopUuid};

/// Merge a remotely fetched shop list with locally owned shops.
///
/// Remote entries are inserted first, local entries overwrite on id
/// collision, and the result preserves insertion order: remote-first, then
/// local-only shops in their local order.
#[must_use]
pub fn merge_shops(remote: Vec<Shop>, local: &[Shop]) -> Vec<Shop> {
    let mut merged: Vec<Shop> = Vec::with_capacity(remote.len() + local.len());
    let mut positions: FxHashMap<ShopUuid, usize> = FxHashMap::default();

    for shop in remote {
        positions.insert(shop.uuid, merged.len());
        merged.push(shop);
    }

    for shop in local {
        match positions.get(&shop.uuid) {
            Some(&position) => {
                if let Some(slot) = merged.get_mut(position) {
                    *slot = shop.clone();
                }
            }
            None => {
                positions.insert(shop.uuid, merged.len());
                merged.push(shop.clone());
            }
        }
    }

    merged
}
