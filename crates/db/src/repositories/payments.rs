//! Payment repository.

use rxerp_core::ledger::{Payment, PaymentFilter, PaymentMethod, Selection};
use rxerp_shared::types::{InvoiceId, PaymentId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use crate::entities::payments;

ledger_repository!(
    /// Payment repository; `payment_number` is unique.
    PaymentRepository,
    Payment,
    payments,
    key = PaymentNumber
);

fn to_record(model: payments::Model) -> Payment {
    Payment {
        id: PaymentId::new(model.id),
        payment_number: model.payment_number,
        invoice_id: InvoiceId::new(model.invoice_id),
        payment_amount: model.payment_amount,
        payment_date: model.payment_date,
        payment_method: PaymentMethod::parse(&model.payment_method),
        created_at: model.created_at.to_utc(),
    }
}

fn to_active(payment: &Payment) -> payments::ActiveModel {
    payments::ActiveModel {
        id: if payment.id.is_assigned() {
            Set(payment.id.get())
        } else {
            NotSet
        },
        payment_number: Set(payment.payment_number.clone()),
        invoice_id: Set(payment.invoice_id.get()),
        payment_amount: Set(payment.payment_amount),
        payment_date: Set(payment.payment_date),
        payment_method: Set(payment.payment_method.as_str().to_string()),
        created_at: Set(payment.created_at.into()),
    }
}

fn select(filter: &PaymentFilter) -> Select<payments::Entity> {
    let mut query = payments::Entity::find();
    if let Selection::Only(method) = &filter.payment_method {
        query = query.filter(payments::Column::PaymentMethod.eq(method.as_str()));
    }
    if let Some(invoice_id) = filter.invoice_id {
        query = query.filter(payments::Column::InvoiceId.eq(invoice_id.get()));
    }
    query
        .order_by_desc(payments::Column::PaymentDate)
        .order_by_asc(payments::Column::Id)
}
