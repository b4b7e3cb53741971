//! Journal line repository.

use rxerp_core::ledger::{JournalLine, JournalLineFilter};
use rxerp_shared::types::{AccountId, JournalEntryId, JournalLineId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::journal_lines;

ledger_repository!(
    /// Journal line repository.
    JournalLineRepository,
    JournalLine,
    journal_lines
);

fn to_record(model: journal_lines::Model) -> JournalLine {
    JournalLine {
        id: JournalLineId::new(model.id),
        journal_entry_id: JournalEntryId::new(model.journal_entry_id),
        account_id: AccountId::new(model.account_id),
        debit: model.debit,
        credit: model.credit,
        net_amount: model.net_amount,
        description: model.description,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(line: &JournalLine) -> journal_lines::ActiveModel {
    journal_lines::ActiveModel {
        id: if line.id.is_assigned() {
            Set(line.id.get())
        } else {
            NotSet
        },
        journal_entry_id: Set(line.journal_entry_id.get()),
        account_id: Set(line.account_id.get()),
        debit: Set(line.debit),
        credit: Set(line.credit),
        net_amount: Set(line.net_amount),
        description: Set(line.description.clone()),
        created_at: Set(line.created_at.into()),
    }
}

fn select(filter: &JournalLineFilter) -> Select<journal_lines::Entity> {
    let mut query = journal_lines::Entity::find();
    if let Some(entry_id) = filter.journal_entry_id {
        query = query.filter(journal_lines::Column::JournalEntryId.eq(entry_id.get()));
    }
    query
        .order_by_desc(journal_lines::Column::CreatedAt)
        .order_by_asc(journal_lines::Column::Id)
}
