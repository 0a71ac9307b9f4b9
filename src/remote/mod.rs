//! Remote shop listing.

pub mod catalog;
pub mod http;

pub use catalog::{RemoteCatalog, RemoteCatalogError, RemoteShopRecord};
pub use http::{HttpCatalogClient, RemoteCatalogConfig};
