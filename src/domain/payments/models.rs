//! Payment Method Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::uuids::TypedUuid;

/// Payment Method UUID
pub type PaymentMethodUuid = TypedUuid<PaymentMethod>;

/// How a payment method settles.
///
/// Independent of shops, carts and orders: a method is selected at payment
/// time but never persisted onto the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethodKind {
    Card {
        brand: String,
        last4: String,
        holder_name: String,
        expiry_month: u8,
        expiry_year: u16,
    },
    Pix,
}

impl Display for PaymentMethodKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Card { brand, last4, .. } => write!(f, "{brand} \u{2022}\u{2022}\u{2022}\u{2022} {last4}"),
            Self::Pix => f.write_str("Pix"),
        }
    }
}

/// Payment Method Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub uuid: PaymentMethodUuid,
    pub kind: PaymentMethodKind,
}
