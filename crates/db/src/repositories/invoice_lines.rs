//! Invoice line repository.

use rxerp_core::ledger::{InvoiceLine, InvoiceLineFilter};
use rxerp_shared::types::{InvoiceId, InvoiceLineId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::invoice_lines;

ledger_repository!(
    /// Invoice line repository. Line totals arrive already computed.
    InvoiceLineRepository,
    InvoiceLine,
    invoice_lines
);

fn to_record(model: invoice_lines::Model) -> InvoiceLine {
    InvoiceLine {
        id: InvoiceLineId::new(model.id),
        invoice_id: InvoiceId::new(model.invoice_id),
        description: model.description,
        quantity: model.quantity,
        unit_price: model.unit_price,
        line_total: model.line_total,
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(line: &InvoiceLine) -> invoice_lines::ActiveModel {
    invoice_lines::ActiveModel {
        id: if line.id.is_assigned() {
            Set(line.id.get())
        } else {
            NotSet
        },
        invoice_id: Set(line.invoice_id.get()),
        description: Set(line.description.clone()),
        quantity: Set(line.quantity),
        unit_price: Set(line.unit_price),
        line_total: Set(line.line_total),
        created_at: Set(line.created_at.into()),
    }
}

fn select(filter: &InvoiceLineFilter) -> Select<invoice_lines::Entity> {
    let mut query = invoice_lines::Entity::find();
    if let Some(invoice_id) = filter.invoice_id {
        query = query.filter(invoice_lines::Column::InvoiceId.eq(invoice_id.get()));
    }
    query
        .order_by_desc(invoice_lines::Column::CreatedAt)
        .order_by_asc(invoice_lines::Column::Id)
}
