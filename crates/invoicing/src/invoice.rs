use serde::{Deserialize, Serialize};

use invoiceflow_core::{Amount, DomainError, DomainResult, Entity, InvoiceId};

/// Entity: Invoice.
///
/// Immutable once constructed: fields are private and there are no setters.
/// Processing never mutates an invoice; discounts produce a new [`Amount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    amount: Amount,
}

impl Invoice {
    /// Permissive constructor: any id, any amount.
    pub fn new(id: impl Into<InvoiceId>, amount: impl Into<Amount>) -> Self {
        Self {
            id: id.into(),
            amount: amount.into(),
        }
    }

    /// Checked constructor.
    ///
    /// Rejects a blank id and a negative or non-finite amount. Nothing downstream
    /// requires this; it exists for callers that take input from outside.
    pub fn try_new(id: impl Into<InvoiceId>, amount: impl Into<Amount>) -> DomainResult<Self> {
        let id: InvoiceId = id.into();
        if id.is_blank() {
            return Err(DomainError::invalid_id("InvoiceId: must not be blank"));
        }
        let amount: Amount = amount.into();
        let amount = Amount::try_new(amount.value())?;
        Ok(Self { id, amount })
    }

    pub fn id_typed(&self) -> &InvoiceId {
        &self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
