//! Invoice and invoice line operations.

use rxerp_shared::SessionContext;
use rxerp_shared::types::{InvoiceId, InvoiceLineId};
use tracing::info;

use super::{LedgerService, load, remove, require};
use crate::ledger::error::LedgerError;
use crate::ledger::filter::{InvoiceFilter, InvoiceLineFilter};
use crate::ledger::input::{InvoiceInput, InvoiceLineInput};
use crate::ledger::outcome::{Mutation, format_money};
use crate::ledger::records::{Invoice, InvoiceLine};

impl LedgerService {
    /// Lists invoices, newest invoice date first.
    pub async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>, LedgerError> {
        Ok(self.store.invoices().list(filter).await?)
    }

    /// Adds an invoice for an existing partner.
    pub async fn add_invoice(
        &self,
        actor: &SessionContext,
        input: InvoiceInput,
    ) -> Result<Mutation<Invoice>, LedgerError> {
        input.validate()?;
        require(self.store.partners(), input.partner_id, "partner").await?;

        let stored = self.store.invoices().insert(input.into_new(Self::now())).await?;
        info!(
            invoice_id = %stored.id,
            partner_id = %stored.partner_id,
            amount = %stored.amount,
            actor = %actor.email,
            "Invoice added"
        );
        Ok(Mutation::stored(
            format!(
                "Invoice '{}' ({}) has been successfully added!",
                stored.invoice_number,
                format_money(stored.amount)
            ),
            stored,
        ))
    }

    /// Edits an invoice.
    pub async fn edit_invoice(
        &self,
        actor: &SessionContext,
        id: InvoiceId,
        input: InvoiceInput,
    ) -> Result<Mutation<Invoice>, LedgerError> {
        let invoices = self.store.invoices();
        let mut invoice = load(invoices, id).await?;
        input.validate()?;
        require(self.store.partners(), input.partner_id, "partner").await?;

        input.apply(&mut invoice);
        invoices.update(&invoice).await?;
        info!(invoice_id = %id, actor = %actor.email, "Invoice updated");
        Ok(Mutation::stored(
            format!(
                "Invoice '{}' ({}) has been successfully updated!",
                invoice.invoice_number,
                format_money(invoice.amount)
            ),
            invoice,
        ))
    }

    /// Deletes an invoice. Its lines and payments are left untouched.
    pub async fn delete_invoice(
        &self,
        actor: &SessionContext,
        id: InvoiceId,
    ) -> Result<Mutation<Invoice>, LedgerError> {
        let invoices = self.store.invoices();
        let invoice = load(invoices, id).await?;
        let message = format!("Invoice '{}' has been deleted.", invoice.invoice_number);
        let removed = remove(invoices, &invoice, message).await?;
        info!(invoice_id = %id, actor = %actor.email, "Invoice deleted");
        Ok(removed)
    }

    /// Lists invoice lines, most recently created first.
    pub async fn list_invoice_lines(
        &self,
        filter: &InvoiceLineFilter,
    ) -> Result<Vec<InvoiceLine>, LedgerError> {
        Ok(self.store.invoice_lines().list(filter).await?)
    }

    /// Adds a line to an existing invoice.
    pub async fn add_invoice_line(
        &self,
        actor: &SessionContext,
        input: InvoiceLineInput,
    ) -> Result<Mutation<InvoiceLine>, LedgerError> {
        input.validate()?;
        require(self.store.invoices(), input.invoice_id, "invoice").await?;

        let stored = self
            .store
            .invoice_lines()
            .insert(input.into_new(Self::now()))
            .await?;
        info!(
            invoice_line_id = %stored.id,
            invoice_id = %stored.invoice_id,
            line_total = %stored.line_total,
            actor = %actor.email,
            "Invoice line added"
        );
        Ok(Mutation::stored("Invoice line added.", stored))
    }

    /// Edits an invoice line and recomputes its total.
    pub async fn edit_invoice_line(
        &self,
        actor: &SessionContext,
        id: InvoiceLineId,
        input: InvoiceLineInput,
    ) -> Result<Mutation<InvoiceLine>, LedgerError> {
        let lines = self.store.invoice_lines();
        let mut line = load(lines, id).await?;
        input.validate()?;
        require(self.store.invoices(), input.invoice_id, "invoice").await?;

        input.apply(&mut line);
        lines.update(&line).await?;
        info!(invoice_line_id = %id, actor = %actor.email, "Invoice line updated");
        Ok(Mutation::stored("Invoice line updated.", line))
    }

    /// Deletes an invoice line.
    pub async fn delete_invoice_line(
        &self,
        actor: &SessionContext,
        id: InvoiceLineId,
    ) -> Result<Mutation<InvoiceLine>, LedgerError> {
        let lines = self.store.invoice_lines();
        let line = load(lines, id).await?;
        let removed = remove(lines, &line, "Invoice line deleted.".to_string()).await?;
        info!(invoice_line_id = %id, actor = %actor.email, "Invoice line deleted");
        Ok(removed)
    }
}
