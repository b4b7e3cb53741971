//! Partner repository.

use rxerp_core::ledger::{Partner, PartnerFilter, PartnerType, Selection};
use rxerp_shared::types::PartnerId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::partners;

ledger_repository!(
    /// Partner repository.
    PartnerRepository,
    Partner,
    partners
);

fn to_record(model: partners::Model) -> Partner {
    Partner {
        id: PartnerId::new(model.id),
        partner_name: model.partner_name,
        partner_type: PartnerType::parse(&model.partner_type),
        email: model.email,
        phone: model.phone,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(partner: &Partner) -> partners::ActiveModel {
    partners::ActiveModel {
        id: if partner.id.is_assigned() {
            Set(partner.id.get())
        } else {
            NotSet
        },
        partner_name: Set(partner.partner_name.clone()),
        partner_type: Set(partner.partner_type.as_str().to_string()),
        email: Set(partner.email.clone()),
        phone: Set(partner.phone.clone()),
        created_at: Set(partner.created_at.into()),
    }
}

fn select(filter: &PartnerFilter) -> Select<partners::Entity> {
    let mut query = partners::Entity::find();
    if let Selection::Only(partner_type) = &filter.partner_type {
        query = query.filter(partners::Column::PartnerType.eq(partner_type.as_str()));
    }
    query
        .order_by_asc(partners::Column::PartnerName)
        .order_by_asc(partners::Column::Id)
}
