//! Account repository for the chart of accounts.

use rxerp_core::ledger::{Account, AccountFilter, AccountType, Selection};
use rxerp_shared::types::AccountId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::accounts;

ledger_repository!(
    /// Account repository; `account_number` is unique.
    AccountRepository,
    Account,
    accounts,
    key = AccountNumber
);

fn to_record(model: accounts::Model) -> Account {
    Account {
        id: AccountId::new(model.id),
        account_number: model.account_number,
        account_name: model.account_name,
        account_type: AccountType::parse(&model.account_type),
        balance: model.balance,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(account: &Account) -> accounts::ActiveModel {
    accounts::ActiveModel {
        id: if account.id.is_assigned() {
            Set(account.id.get())
        } else {
            NotSet
        },
        account_number: Set(account.account_number.clone()),
        account_name: Set(account.account_name.clone()),
        account_type: Set(account.account_type.as_str().to_string()),
        balance: Set(account.balance),
        created_at: Set(account.created_at.into()),
    }
}

fn select(filter: &AccountFilter) -> Select<accounts::Entity> {
    let mut query = accounts::Entity::find();
    if let Selection::Only(account_type) = &filter.account_type {
        query = query.filter(accounts::Column::AccountType.eq(account_type.as_str()));
    }
    query
        .order_by_asc(accounts::Column::AccountNumber)
        .order_by_asc(accounts::Column::Id)
}
