//! Remote shop listing contract.
//!
//! The merge logic only depends on this contract, never on a particular
//! remote store protocol.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::catalog::models::{Shop, ShopUuid};

/// Shop record as returned by the remote listing.
///
/// Optional fields fall back to the defaults the shop cards expect.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteShopRecord {
    pub id: ShopUuid,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub image: String,

    #[serde(default = "default_delivery_time")]
    pub delivery_time: String,

    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: String,

    #[serde(default)]
    pub badges: Vec<String>,
}

fn default_delivery_time() -> String {
    "60 min".to_owned()
}

fn default_delivery_fee() -> String {
    "R$ 5,90".to_owned()
}

impl From<RemoteShopRecord> for Shop {
    fn from(record: RemoteShopRecord) -> Self {
        Self {
            uuid: record.id,
            name: record.name,
            category: record.category,
            rating: record.rating,
            image: record.image,
            delivery_time: record.delivery_time,
            delivery_fee_label: record.delivery_fee,
            badges: record.badges,
            items: Vec::new(),
        }
    }
}

/// Errors that can occur when fetching the remote shop listing.
#[derive(Debug, Error)]
pub enum RemoteCatalogError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The listing endpoint returned a non-2xx response or unexpected body.
    #[error("unexpected response from shop listing: {0}")]
    UnexpectedResponse(String),
}

/// Read-only source of the remote shop listing.
#[automock]
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Fetch the full remote shop listing.
    async fn fetch_shops(&self) -> Result<Vec<RemoteShopRecord>, RemoteCatalogError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() -> TestResult {
        let id = Uuid::now_v7();
        let json = format!(r#"{{ "id": "{id}", "name": "Padaria Central" }}"#);

        let record: RemoteShopRecord = serde_json::from_str(&json)?;

        assert_eq!(record.id, ShopUuid::from_uuid(id));
        assert_eq!(record.name, "Padaria Central");
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.delivery_time, "60 min");
        assert_eq!(record.delivery_fee, "R$ 5,90");
        assert!(record.badges.is_empty());

        Ok(())
    }

    #[test]
    fn record_converts_to_shop_with_no_items() -> TestResult {
        let id = Uuid::now_v7();
        let json = format!(
            r#"{{ "id": "{id}", "name": "Mercearia", "category": "Groceries",
                  "rating": 4.7, "deliveryTime": "30 min", "badges": ["Top"] }}"#
        );

        let record: RemoteShopRecord = serde_json::from_str(&json)?;
        let shop = Shop::from(record);

        assert_eq!(shop.name, "Mercearia");
        assert_eq!(shop.delivery_time, "30 min");
        assert_eq!(shop.badges, ["Top"]);
        assert!(shop.items.is_empty());

        Ok(())
    }
}
