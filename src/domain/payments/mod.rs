//! Payments

pub mod errors;
pub mod models;
pub mod store;

pub use errors::PaymentsError;
pub use store::PaymentMethodsStore;
