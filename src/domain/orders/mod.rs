//! Orders

pub mod builder;
pub mod errors;
pub mod ledger;
pub mod models;

pub use errors::OrdersError;
pub use ledger::OrderLedger;
