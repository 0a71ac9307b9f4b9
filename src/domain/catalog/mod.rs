//! Catalog

pub mod errors;
pub mod merge;
pub mod models;
pub mod store;

pub use errors::CatalogError;
pub use merge::merge_shops;
pub use store::CatalogStore;
