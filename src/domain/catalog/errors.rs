//! Catalog store errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("shop not found")]
    ShopNotFound,

    #[error("item not found")]
    ItemNotFound,
}
