//! Invoice repository.

use rxerp_core::ledger::{Invoice, InvoiceFilter, InvoiceStatus, Selection};
use rxerp_shared::types::{InvoiceId, PartnerId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::invoices;

ledger_repository!(
    /// Invoice repository. Invoice numbers may repeat.
    InvoiceRepository,
    Invoice,
    invoices
);

fn to_record(model: invoices::Model) -> Invoice {
    Invoice {
        id: InvoiceId::new(model.id),
        invoice_number: model.invoice_number,
        partner_id: PartnerId::new(model.partner_id),
        amount: model.amount,
        status: InvoiceStatus::parse(&model.status),
        invoice_date: model.invoice_date,
        due_date: model.due_date,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(invoice: &Invoice) -> invoices::ActiveModel {
    invoices::ActiveModel {
        id: if invoice.id.is_assigned() {
            Set(invoice.id.get())
        } else {
            NotSet
        },
        invoice_number: Set(invoice.invoice_number.clone()),
        partner_id: Set(invoice.partner_id.get()),
        amount: Set(invoice.amount),
        status: Set(invoice.status.as_str().to_string()),
        invoice_date: Set(invoice.invoice_date),
        due_date: Set(invoice.due_date),
        created_at: Set(invoice.created_at.into()),
    }
}

fn select(filter: &InvoiceFilter) -> Select<invoices::Entity> {
    let mut query = invoices::Entity::find();
    if let Selection::Only(status) = &filter.status {
        query = query.filter(invoices::Column::Status.eq(status.as_str()));
    }
    if let Some(partner_id) = filter.partner_id {
        query = query.filter(invoices::Column::PartnerId.eq(partner_id.get()));
    }
    query
        .order_by_desc(invoices::Column::InvoiceDate)
        .order_by_asc(invoices::Column::Id)
}
