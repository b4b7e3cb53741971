//! Opening balance repository.

use rxerp_core::ledger::{OpenBalance, OpenBalanceFilter};
use rxerp_shared::types::{AccountId, OpenBalanceId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::open_balances;

ledger_repository!(
    /// Opening balance repository.
    OpenBalanceRepository,
    OpenBalance,
    open_balances
);

fn to_record(model: open_balances::Model) -> OpenBalance {
    OpenBalance {
        id: OpenBalanceId::new(model.id),
        account_id: AccountId::new(model.account_id),
        opening_balance: model.opening_balance,
        balance_date: model.balance_date,
        description: model.description,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(balance: &OpenBalance) -> open_balances::ActiveModel {
    open_balances::ActiveModel {
        id: if balance.id.is_assigned() {
            Set(balance.id.get())
        } else {
            NotSet
        },
        account_id: Set(balance.account_id.get()),
        opening_balance: Set(balance.opening_balance),
        balance_date: Set(balance.balance_date),
        description: Set(balance.description.clone()),
        created_at: Set(balance.created_at.into()),
    }
}

fn select(filter: &OpenBalanceFilter) -> Select<open_balances::Entity> {
    let mut query = open_balances::Entity::find();
    if let Some(account_id) = filter.account_id {
        query = query.filter(open_balances::Column::AccountId.eq(account_id.get()));
    }
    query
        .order_by_desc(open_balances::Column::BalanceDate)
        .order_by_asc(open_balances::Column::Id)
}
