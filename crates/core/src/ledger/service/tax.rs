//! Tax rate operations.

use rxerp_shared::SessionContext;
use rxerp_shared::types::TaxRateId;
use tracing::info;

use super::{LedgerService, ensure_key_free, load, remove};
use crate::ledger::error::LedgerError;
use crate::ledger::filter::TaxRateFilter;
use crate::ledger::input::TaxRateInput;
use crate::ledger::outcome::{Mutation, format_percent};
use crate::ledger::records::TaxRate;

impl LedgerService {
    /// Lists tax rates ordered by tax code.
    pub async fn list_tax_rates(
        &self,
        filter: &TaxRateFilter,
    ) -> Result<Vec<TaxRate>, LedgerError> {
        Ok(self.store.tax_rates().list(filter).await?)
    }

    /// Adds a tax rate from a 0-100 percentage.
    pub async fn add_tax_rate(
        &self,
        actor: &SessionContext,
        input: TaxRateInput,
    ) -> Result<Mutation<TaxRate>, LedgerError> {
        input.validate()?;
        let tax_rates = self.store.tax_rates();
        ensure_key_free(tax_rates, &input.key(), None).await?;

        let percentage = input.percentage;
        let stored = tax_rates.insert(input.into_new(Self::now())).await?;
        info!(
            tax_rate_id = %stored.id,
            tax_code = %stored.tax_code,
            rate = %stored.rate,
            actor = %actor.email,
            "Tax rate added"
        );
        Ok(Mutation::stored(
            format!(
                "Tax Rate '{}' ({}%) has been successfully added!",
                stored.tax_code,
                format_percent(percentage)
            ),
            stored,
        ))
    }

    /// Edits a tax rate.
    pub async fn edit_tax_rate(
        &self,
        actor: &SessionContext,
        id: TaxRateId,
        input: TaxRateInput,
    ) -> Result<Mutation<TaxRate>, LedgerError> {
        let tax_rates = self.store.tax_rates();
        let mut tax_rate = load::<TaxRate>(tax_rates, id).await?;
        input.validate()?;

        let percentage = input.percentage;
        input.apply(&mut tax_rate);
        tax_rates.update(&tax_rate).await?;
        info!(tax_rate_id = %id, actor = %actor.email, "Tax rate updated");
        Ok(Mutation::stored(
            format!(
                "Tax Rate '{}' ({}%) has been successfully updated!",
                tax_rate.tax_code,
                format_percent(percentage)
            ),
            tax_rate,
        ))
    }

    /// Deletes a tax rate.
    pub async fn delete_tax_rate(
        &self,
        actor: &SessionContext,
        id: TaxRateId,
    ) -> Result<Mutation<TaxRate>, LedgerError> {
        let tax_rates = self.store.tax_rates();
        let tax_rate = load::<TaxRate>(tax_rates, id).await?;
        let message = format!("Tax Rate '{}' has been deleted.", tax_rate.tax_code);
        let removed = remove::<TaxRate>(tax_rates, &tax_rate, message).await?;
        info!(tax_rate_id = %id, actor = %actor.email, "Tax rate deleted");
        Ok(removed)
    }
}
