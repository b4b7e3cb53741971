//! Tax rate repository.

use rxerp_core::ledger::{Selection, TaxRate, TaxRateFilter, TaxType};
use rxerp_shared::types::TaxRateId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::tax_rates;

ledger_repository!(
    /// Tax rate repository; `tax_code` is unique.
    TaxRateRepository,
    TaxRate,
    tax_rates,
    key = TaxCode
);

fn to_record(model: tax_rates::Model) -> TaxRate {
    TaxRate {
        id: TaxRateId::new(model.id),
        tax_code: model.tax_code,
        rate: model.rate,
        tax_description: model.tax_description,
        tax_type: model.tax_type.as_deref().map(TaxType::parse),
        effective_date: model.effective_date,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(tax_rate: &TaxRate) -> tax_rates::ActiveModel {
    tax_rates::ActiveModel {
        id: if tax_rate.id.is_assigned() {
            Set(tax_rate.id.get())
        } else {
            NotSet
        },
        tax_code: Set(tax_rate.tax_code.clone()),
        rate: Set(tax_rate.rate),
        tax_description: Set(tax_rate.tax_description.clone()),
        tax_type: Set(tax_rate.tax_type.as_ref().map(|t| t.as_str().to_string())),
        effective_date: Set(tax_rate.effective_date),
        created_at: Set(tax_rate.created_at.into()),
    }
}

fn select(filter: &TaxRateFilter) -> Select<tax_rates::Entity> {
    let mut query = tax_rates::Entity::find();
    if let Selection::Only(tax_type) = &filter.tax_type {
        query = query.filter(tax_rates::Column::TaxType.eq(tax_type.as_str()));
    }
    query
        .order_by_asc(tax_rates::Column::TaxCode)
        .order_by_asc(tax_rates::Column::Id)
}
