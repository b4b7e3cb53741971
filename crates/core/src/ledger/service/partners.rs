//! Business partner operations.

use rxerp_shared::SessionContext;
use rxerp_shared::types::PartnerId;
use tracing::info;

use super::{LedgerService, load, remove};
use crate::ledger::error::LedgerError;
use crate::ledger::filter::PartnerFilter;
use crate::ledger::input::PartnerInput;
use crate::ledger::outcome::Mutation;
use crate::ledger::records::Partner;

impl LedgerService {
    /// Lists partners ordered by name.
    pub async fn list_partners(&self, filter: &PartnerFilter) -> Result<Vec<Partner>, LedgerError> {
        Ok(self.store.partners().list(filter).await?)
    }

    /// Adds a partner. Names are not required to be unique.
    pub async fn add_partner(
        &self,
        actor: &SessionContext,
        input: PartnerInput,
    ) -> Result<Mutation<Partner>, LedgerError> {
        input.validate()?;
        let stored = self.store.partners().insert(input.into_new(Self::now())).await?;
        info!(partner_id = %stored.id, actor = %actor.email, "Partner added");
        Ok(Mutation::stored(
            format!("Partner '{}' has been successfully added!", stored.partner_name),
            stored,
        ))
    }

    /// Edits a partner.
    pub async fn edit_partner(
        &self,
        actor: &SessionContext,
        id: PartnerId,
        input: PartnerInput,
    ) -> Result<Mutation<Partner>, LedgerError> {
        let partners = self.store.partners();
        let mut partner = load(partners, id).await?;
        input.validate()?;

        input.apply(&mut partner);
        partners.update(&partner).await?;
        info!(partner_id = %id, actor = %actor.email, "Partner updated");
        Ok(Mutation::stored(
            format!("Partner '{}' has been successfully updated!", partner.partner_name),
            partner,
        ))
    }

    /// Deletes a partner. Its invoices keep the dangling reference.
    pub async fn delete_partner(
        &self,
        actor: &SessionContext,
        id: PartnerId,
    ) -> Result<Mutation<Partner>, LedgerError> {
        let partners = self.store.partners();
        let partner = load(partners, id).await?;
        let message = format!("Partner '{}' has been deleted.", partner.partner_name);
        let removed = remove(partners, &partner, message).await?;
        info!(partner_id = %id, actor = %actor.email, "Partner deleted");
        Ok(removed)
    }
}
