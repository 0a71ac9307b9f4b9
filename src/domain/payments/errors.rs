//! Payment methods store errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentsError {
    #[error("payment method not found")]
    NotFound,
}
