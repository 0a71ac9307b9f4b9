//! Storefront domain concerns.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod payments;
