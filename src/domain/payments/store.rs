//! Payment methods store.

use crate::domain::payments::{
    errors::PaymentsError,
    models::{PaymentMethod, PaymentMethodKind, PaymentMethodUuid},
};

/// Owns the list of saved payment methods, newest first.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethodsStore {
    methods: Vec<PaymentMethod>,
}

impl PaymentMethodsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn methods(&self) -> &[PaymentMethod] {
        &self.methods
    }

    /// Save a method with a fresh id, prepended to the list.
    pub fn add(&mut self, kind: PaymentMethodKind) -> PaymentMethod {
        let created = PaymentMethod {
            uuid: PaymentMethodUuid::new(),
            kind,
        };

        self.methods.insert(0, created.clone());

        created
    }

    /// Replace the details of an existing method.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsError::NotFound`] when no method has this id.
    pub fn update(
        &mut self,
        uuid: PaymentMethodUuid,
        kind: PaymentMethodKind,
    ) -> Result<(), PaymentsError> {
        let method = self
            .methods
            .iter_mut()
            .find(|method| method.uuid == uuid)
            .ok_or(PaymentsError::NotFound)?;

        method.kind = kind;

        Ok(())
    }

    /// Delete a method.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsError::NotFound`] when no method has this id.
    pub fn delete(&mut self, uuid: PaymentMethodUuid) -> Result<(), PaymentsError> {
        let position = self
            .methods
            .iter()
            .position(|method| method.uuid == uuid)
            .ok_or(PaymentsError::NotFound)?;

        self.methods.remove(position);

        Ok(())
    }
}
