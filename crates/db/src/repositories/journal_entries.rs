//! Journal entry repository.

use rxerp_core::ledger::{JournalEntry, JournalEntryFilter};
use rxerp_shared::types::{AccountId, JournalEntryId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};

use crate::entities::journal_entries;

ledger_repository!(
    /// Journal entry repository; `journal_number` is unique.
    JournalEntryRepository,
    JournalEntry,
    journal_entries,
    key = JournalNumber
);

fn to_record(model: journal_entries::Model) -> JournalEntry {
    JournalEntry {
        id: JournalEntryId::new(model.id),
        journal_number: model.journal_number,
        debit_account_id: AccountId::new(model.debit_account_id),
        credit_account_id: AccountId::new(model.credit_account_id),
        amount: model.amount,
        description: model.description,
        entry_date: model.entry_date,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(entry: &JournalEntry) -> journal_entries::ActiveModel {
    journal_entries::ActiveModel {
        id: if entry.id.is_assigned() {
            Set(entry.id.get())
        } else {
            NotSet
        },
        journal_number: Set(entry.journal_number.clone()),
        debit_account_id: Set(entry.debit_account_id.get()),
        credit_account_id: Set(entry.credit_account_id.get()),
        amount: Set(entry.amount),
        description: Set(entry.description.clone()),
        entry_date: Set(entry.entry_date),
        created_at: Set(entry.created_at.into()),
    }
}

fn select(filter: &JournalEntryFilter) -> Select<journal_entries::Entity> {
    let mut query = journal_entries::Entity::find();
    if let Some(account_id) = filter.account_id {
        query = query.filter(
            Condition::any()
                .add(journal_entries::Column::DebitAccountId.eq(account_id.get()))
                .add(journal_entries::Column::CreditAccountId.eq(account_id.get())),
        );
    }
    query
        .order_by_desc(journal_entries::Column::EntryDate)
        .order_by_asc(journal_entries::Column::Id)
}
