//! Mercado
//!
//! Mercado is the in-memory domain core of a mobile storefront: a shop and
//! item catalog with vendor-side CRUD, a cart aggregator, checkout into one
//! order per shop, an order ledger, payment methods, and a remote shop
//! listing merged with local edits (local wins on id collision).
//!
//! All state is volatile and single-owner; the only suspending operation is
//! the remote catalog fetch. Everything is wired together through
//! [`context::Storefront`].

pub mod context;
pub mod domain;
pub mod prices;
pub mod remote;
pub mod session;

mod uuids;
