//! Opening balance operations.

use rxerp_shared::SessionContext;
use rxerp_shared::types::OpenBalanceId;
use tracing::info;

use super::{LedgerService, load, remove, require};
use crate::ledger::error::LedgerError;
use crate::ledger::filter::OpenBalanceFilter;
use crate::ledger::input::OpenBalanceInput;
use crate::ledger::outcome::{Mutation, format_money};
use crate::ledger::records::{Account, OpenBalance};

impl LedgerService {
    /// Lists opening balances, newest balance date first.
    pub async fn list_open_balances(
        &self,
        filter: &OpenBalanceFilter,
    ) -> Result<Vec<OpenBalance>, LedgerError> {
        Ok(self.store.open_balances().list(filter).await?)
    }

    /// Adds an opening balance for an existing account.
    pub async fn add_open_balance(
        &self,
        actor: &SessionContext,
        input: OpenBalanceInput,
    ) -> Result<Mutation<OpenBalance>, LedgerError> {
        input.validate()?;
        let account = require::<Account>(self.store.accounts(), input.account_id, "account").await?;

        let stored = self
            .store
            .open_balances()
            .insert(input.into_new(Self::now()))
            .await?;
        info!(
            open_balance_id = %stored.id,
            account_id = %stored.account_id,
            actor = %actor.email,
            "Open balance added"
        );
        Ok(Mutation::stored(
            format!(
                "Open Balance ({}) for '{}' has been successfully added!",
                format_money(stored.opening_balance),
                account.account_name
            ),
            stored,
        ))
    }

    /// Edits an opening balance.
    pub async fn edit_open_balance(
        &self,
        actor: &SessionContext,
        id: OpenBalanceId,
        input: OpenBalanceInput,
    ) -> Result<Mutation<OpenBalance>, LedgerError> {
        let balances = self.store.open_balances();
        let mut balance = load(balances, id).await?;
        input.validate()?;
        let account = require::<Account>(self.store.accounts(), input.account_id, "account").await?;

        input.apply(&mut balance);
        balances.update(&balance).await?;
        info!(open_balance_id = %id, actor = %actor.email, "Open balance updated");
        Ok(Mutation::stored(
            format!(
                "Open Balance ({}) for '{}' has been successfully updated!",
                format_money(balance.opening_balance),
                account.account_name
            ),
            balance,
        ))
    }

    /// Deletes an opening balance.
    pub async fn delete_open_balance(
        &self,
        actor: &SessionContext,
        id: OpenBalanceId,
    ) -> Result<Mutation<OpenBalance>, LedgerError> {
        let balances = self.store.open_balances();
        let balance = load(balances, id).await?;
        let message = format!(
            "Open Balance ({}) has been deleted.",
            format_money(balance.opening_balance)
        );
        let removed = remove(balances, &balance, message).await?;
        info!(open_balance_id = %id, actor = %actor.email, "Open balance deleted");
        Ok(removed)
    }
}
