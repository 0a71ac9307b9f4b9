//! Order ledger errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrdersError {
    #[error("order not found")]
    NotFound,
}
