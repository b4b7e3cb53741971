//! Journal entry and journal line operations.
//!
//! Entries and their lines are independent records: adding lines never
//! checks that they balance against the entry amount.

use rxerp_shared::SessionContext;
use rxerp_shared::types::{JournalEntryId, JournalLineId};
use tracing::info;

use super::{LedgerService, ensure_key_free, load, remove, require};
use crate::ledger::error::LedgerError;
use crate::ledger::filter::{JournalEntryFilter, JournalLineFilter};
use crate::ledger::input::{JournalEntryInput, JournalLineInput};
use crate::ledger::outcome::{Mutation, format_money};
use crate::ledger::records::{Account, JournalEntry, JournalLine};

impl LedgerService {
    /// Lists journal entries, newest entry date first.
    pub async fn list_journal_entries(
        &self,
        filter: &JournalEntryFilter,
    ) -> Result<Vec<JournalEntry>, LedgerError> {
        Ok(self.store.journal_entries().list(filter).await?)
    }

    async fn require_both_sides(&self, input: &JournalEntryInput) -> Result<(), LedgerError> {
        let accounts = self.store.accounts();
        require::<Account>(accounts, input.debit_account_id, "debit account").await?;
        require::<Account>(accounts, input.credit_account_id, "credit account").await?;
        Ok(())
    }

    /// Adds a journal entry between two different existing accounts.
    pub async fn add_journal_entry(
        &self,
        actor: &SessionContext,
        input: JournalEntryInput,
    ) -> Result<Mutation<JournalEntry>, LedgerError> {
        input.validate()?;
        let entries = self.store.journal_entries();
        ensure_key_free(entries, &input.key(), None).await?;
        self.require_both_sides(&input).await?;

        let stored = entries.insert(input.into_new(Self::now())).await?;
        info!(
            journal_entry_id = %stored.id,
            debit_account_id = %stored.debit_account_id,
            credit_account_id = %stored.credit_account_id,
            amount = %stored.amount,
            actor = %actor.email,
            "Journal entry added"
        );
        Ok(Mutation::stored(
            format!(
                "Journal Entry ({}) has been successfully added!",
                format_money(stored.amount)
            ),
            stored,
        ))
    }

    /// Edits a journal entry. Both sides must still differ and exist.
    pub async fn edit_journal_entry(
        &self,
        actor: &SessionContext,
        id: JournalEntryId,
        input: JournalEntryInput,
    ) -> Result<Mutation<JournalEntry>, LedgerError> {
        let entries = self.store.journal_entries();
        let mut entry = load::<JournalEntry>(entries, id).await?;
        input.validate()?;
        self.require_both_sides(&input).await?;

        input.apply(&mut entry);
        entries.update(&entry).await?;
        info!(journal_entry_id = %id, actor = %actor.email, "Journal entry updated");
        Ok(Mutation::stored(
            format!(
                "Journal Entry ({}) has been successfully updated!",
                format_money(entry.amount)
            ),
            entry,
        ))
    }

    /// Deletes a journal entry. Its lines are left untouched.
    pub async fn delete_journal_entry(
        &self,
        actor: &SessionContext,
        id: JournalEntryId,
    ) -> Result<Mutation<JournalEntry>, LedgerError> {
        let entries = self.store.journal_entries();
        let entry = load::<JournalEntry>(entries, id).await?;
        let message = format!("Journal Entry '{}' has been deleted.", entry.journal_number);
        let removed = remove::<JournalEntry>(entries, &entry, message).await?;
        info!(journal_entry_id = %id, actor = %actor.email, "Journal entry deleted");
        Ok(removed)
    }

    /// Lists journal lines, most recently created first.
    pub async fn list_journal_lines(
        &self,
        filter: &JournalLineFilter,
    ) -> Result<Vec<JournalLine>, LedgerError> {
        Ok(self.store.journal_lines().list(filter).await?)
    }

    async fn require_line_parents(&self, input: &JournalLineInput) -> Result<(), LedgerError> {
        require::<JournalEntry>(
            self.store.journal_entries(),
            input.journal_entry_id,
            "journal entry",
        )
        .await?;
        require::<Account>(self.store.accounts(), input.account_id, "account").await?;
        Ok(())
    }

    /// Adds a line to an existing journal entry.
    pub async fn add_journal_line(
        &self,
        actor: &SessionContext,
        input: JournalLineInput,
    ) -> Result<Mutation<JournalLine>, LedgerError> {
        input.validate()?;
        self.require_line_parents(&input).await?;

        let stored = self
            .store
            .journal_lines()
            .insert(input.into_new(Self::now()))
            .await?;
        info!(
            journal_line_id = %stored.id,
            journal_entry_id = %stored.journal_entry_id,
            net_amount = %stored.net_amount,
            actor = %actor.email,
            "Journal line added"
        );
        Ok(Mutation::stored("Journal line added.", stored))
    }

    /// Edits a journal line and recomputes its net amount.
    pub async fn edit_journal_line(
        &self,
        actor: &SessionContext,
        id: JournalLineId,
        input: JournalLineInput,
    ) -> Result<Mutation<JournalLine>, LedgerError> {
        let lines = self.store.journal_lines();
        let mut line = load(lines, id).await?;
        input.validate()?;
        self.require_line_parents(&input).await?;

        input.apply(&mut line);
        lines.update(&line).await?;
        info!(journal_line_id = %id, actor = %actor.email, "Journal line updated");
        Ok(Mutation::stored("Journal line updated.", line))
    }

    /// Deletes a journal line.
    pub async fn delete_journal_line(
        &self,
        actor: &SessionContext,
        id: JournalLineId,
    ) -> Result<Mutation<JournalLine>, LedgerError> {
        let lines = self.store.journal_lines();
        let line = load(lines, id).await?;
        let removed = remove(lines, &line, "Journal line deleted.".to_string()).await?;
        info!(journal_line_id = %id, actor = %actor.email, "Journal line deleted");
        Ok(removed)
    }
}
