//! Chart of accounts operations.

use rxerp_shared::SessionContext;
use rxerp_shared::types::AccountId;
use tracing::info;

use super::{LedgerService, ensure_key_free, load, remove};
use crate::ledger::error::LedgerError;
use crate::ledger::filter::AccountFilter;
use crate::ledger::input::AccountInput;
use crate::ledger::outcome::Mutation;
use crate::ledger::records::Account;

impl LedgerService {
    /// Lists accounts ordered by account number.
    pub async fn list_accounts(&self, filter: &AccountFilter) -> Result<Vec<Account>, LedgerError> {
        Ok(self.store.accounts().list(filter).await?)
    }

    /// Adds an account. The account number must be unused.
    pub async fn add_account(
        &self,
        actor: &SessionContext,
        input: AccountInput,
    ) -> Result<Mutation<Account>, LedgerError> {
        input.validate()?;
        let accounts = self.store.accounts();
        ensure_key_free(accounts, &input.key(), None).await?;

        let stored = accounts.insert(input.into_new(Self::now())).await?;
        info!(
            account_id = %stored.id,
            account_number = %stored.account_number,
            actor = %actor.email,
            "Account added"
        );
        Ok(Mutation::stored(
            format!(
                "Account '{}' ({}) has been successfully added!",
                stored.account_name, stored.account_number
            ),
            stored,
        ))
    }

    /// Edits an account. A changed account number must not belong to another account.
    pub async fn edit_account(
        &self,
        actor: &SessionContext,
        id: AccountId,
        input: AccountInput,
    ) -> Result<Mutation<Account>, LedgerError> {
        let accounts = self.store.accounts();
        let mut account = load::<Account>(accounts, id).await?;
        input.validate()?;

        let key = input.key();
        if key != account.account_number {
            ensure_key_free(accounts, &key, Some(id)).await?;
        }

        input.apply(&mut account);
        accounts.update(&account).await?;
        info!(account_id = %id, actor = %actor.email, "Account updated");
        Ok(Mutation::stored(
            format!(
                "Account '{}' ({}) has been successfully updated!",
                account.account_name, account.account_number
            ),
            account,
        ))
    }

    /// Deletes an account. Opening balances, journal entries and journal
    /// lines referencing it are left untouched.
    pub async fn delete_account(
        &self,
        actor: &SessionContext,
        id: AccountId,
    ) -> Result<Mutation<Account>, LedgerError> {
        let accounts = self.store.accounts();
        let account = load::<Account>(accounts, id).await?;
        let message = format!(
            "Account '{}' ({}) has been deleted.",
            account.account_name, account.account_number
        );
        let removed = remove::<Account>(accounts, &account, message).await?;
        info!(account_id = %id, actor = %actor.email, "Account deleted");
        Ok(removed)
    }
}
