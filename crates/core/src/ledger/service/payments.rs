//! Payment operations.

use rxerp_shared::SessionContext;
use rxerp_shared::types::PaymentId;
use tracing::info;

use super::{LedgerService, ensure_key_free, load, remove, require};
use crate::ledger::error::LedgerError;
use crate::ledger::filter::PaymentFilter;
use crate::ledger::input::PaymentInput;
use crate::ledger::outcome::{Mutation, format_money};
use crate::ledger::records::Payment;

impl LedgerService {
    /// Lists payments, newest payment date first.
    pub async fn list_payments(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, LedgerError> {
        Ok(self.store.payments().list(filter).await?)
    }

    /// Adds a payment against an existing invoice. Over-payment is allowed.
    pub async fn add_payment(
        &self,
        actor: &SessionContext,
        input: PaymentInput,
    ) -> Result<Mutation<Payment>, LedgerError> {
        input.validate()?;
        let payments = self.store.payments();
        ensure_key_free(payments, &input.key(), None).await?;
        require(self.store.invoices(), input.invoice_id, "invoice").await?;

        let stored = payments.insert(input.into_new(Self::now())).await?;
        info!(
            payment_id = %stored.id,
            invoice_id = %stored.invoice_id,
            amount = %stored.payment_amount,
            actor = %actor.email,
            "Payment added"
        );
        Ok(Mutation::stored(
            format!(
                "Payment ({}) has been successfully added!",
                format_money(stored.payment_amount)
            ),
            stored,
        ))
    }

    /// Edits a payment. The payment number is not re-checked; the store's
    /// unique constraint still rejects a clash.
    pub async fn edit_payment(
        &self,
        actor: &SessionContext,
        id: PaymentId,
        input: PaymentInput,
    ) -> Result<Mutation<Payment>, LedgerError> {
        let payments = self.store.payments();
        let mut payment = load::<Payment>(payments, id).await?;
        input.validate()?;
        require(self.store.invoices(), input.invoice_id, "invoice").await?;

        input.apply(&mut payment);
        payments.update(&payment).await?;
        info!(payment_id = %id, actor = %actor.email, "Payment updated");
        Ok(Mutation::stored(
            format!(
                "Payment ({}) has been successfully updated!",
                format_money(payment.payment_amount)
            ),
            payment,
        ))
    }

    /// Deletes a payment.
    pub async fn delete_payment(
        &self,
        actor: &SessionContext,
        id: PaymentId,
    ) -> Result<Mutation<Payment>, LedgerError> {
        let payments = self.store.payments();
        let payment = load::<Payment>(payments, id).await?;
        let message = format!("Payment '{}' has been deleted.", payment.payment_number);
        let removed = remove::<Payment>(payments, &payment, message).await?;
        info!(payment_id = %id, actor = %actor.email, "Payment deleted");
        Ok(removed)
    }
}
