//! Cart store errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("cart line not found")]
    LineNotFound,
}
