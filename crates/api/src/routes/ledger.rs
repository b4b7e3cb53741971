//! Financial ledger routes.
//!
//! Every collection shares one set of routes keyed by its URL segment:
//! list, add, edit and delete. Mutations answer the `{success, message,
//! record?}` envelope with a status derived from the outcome.

use std::future::Future;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use rxerp_core::ledger::{
    AccountFilter, Collection, InvoiceFilter, InvoiceLineFilter, JournalEntryFilter,
    JournalLineFilter, LedgerError, Mutation, OpenBalanceFilter, OperationOutcome,
    PartnerFilter, PaymentFilter, Selection, TaxRateFilter,
};
use rxerp_core::reports::{LedgerFilter, LedgerView};
use rxerp_shared::AppError;
use rxerp_shared::types::{
    AccountId, InvoiceId, InvoiceLineId, JournalEntryId, JournalLineId, OpenBalanceId, PartnerId,
    PaymentId, TaxRateId,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::{AppState, error::ApiError, middleware::AuthSession};

/// Creates the ledger routes (requires the session middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ledger", get(overview))
        .route("/ledger/{collection}", get(list_records).post(add_record))
        .route(
            "/ledger/{collection}/{id}",
            put(edit_record).delete(delete_record),
        )
}

/// Dropdown selections for the overview. Missing, blank and `All` select everything.
#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    /// Account type selection.
    pub account_type: Option<String>,
    /// Partner type selection.
    pub partner_type: Option<String>,
    /// Invoice status selection.
    pub invoice_status: Option<String>,
    /// Payment method selection.
    pub payment_method: Option<String>,
    /// Tax type selection.
    pub tax_type: Option<String>,
}

impl OverviewQuery {
    fn filter(&self) -> LedgerFilter {
        LedgerFilter {
            account_type: Selection::parse(self.account_type.as_deref()),
            partner_type: Selection::parse(self.partner_type.as_deref()),
            invoice_status: Selection::parse(self.invoice_status.as_deref()),
            payment_method: Selection::parse(self.payment_method.as_deref()),
            tax_type: Selection::parse(self.tax_type.as_deref()),
        }
    }
}

/// Filters for listing one collection. Parameters a collection has no use for are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Account type selection.
    pub account_type: Option<String>,
    /// Partner type selection.
    pub partner_type: Option<String>,
    /// Invoice status selection.
    pub status: Option<String>,
    /// Payment method selection.
    pub payment_method: Option<String>,
    /// Tax type selection.
    pub tax_type: Option<String>,
    /// Invoices of one partner.
    pub partner_id: Option<i32>,
    /// Lines or payments of one invoice.
    pub invoice_id: Option<i32>,
    /// Balances of one account, or journal entries touching it.
    pub account_id: Option<i32>,
    /// Lines of one journal entry.
    pub journal_entry_id: Option<i32>,
}

/// GET `/ledger` - Records, metrics and dropdown options.
async fn overview(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<OverviewQuery>,
) -> Json<LedgerView> {
    debug!(email = %session.email(), "Ledger overview requested");
    Json(state.ledger.overview(&query.filter()).await)
}

/// GET `/ledger/{collection}` - List one collection.
async fn list_records(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response {
    let Some(collection) = Collection::from_name(&name) else {
        return unknown_collection(&name);
    };
    let svc = &state.ledger;

    match collection {
        Collection::Accounts => listed(
            collection,
            svc.list_accounts(&AccountFilter {
                account_type: Selection::parse(query.account_type.as_deref()),
            })
            .await,
        ),
        Collection::Partners => listed(
            collection,
            svc.list_partners(&PartnerFilter {
                partner_type: Selection::parse(query.partner_type.as_deref()),
            })
            .await,
        ),
        Collection::Invoices => listed(
            collection,
            svc.list_invoices(&InvoiceFilter {
                status: Selection::parse(query.status.as_deref()),
                partner_id: query.partner_id.map(PartnerId::new),
            })
            .await,
        ),
        Collection::InvoiceLines => listed(
            collection,
            svc.list_invoice_lines(&InvoiceLineFilter {
                invoice_id: query.invoice_id.map(InvoiceId::new),
            })
            .await,
        ),
        Collection::OpenBalances => listed(
            collection,
            svc.list_open_balances(&OpenBalanceFilter {
                account_id: query.account_id.map(AccountId::new),
            })
            .await,
        ),
        Collection::Payments => listed(
            collection,
            svc.list_payments(&PaymentFilter {
                payment_method: Selection::parse(query.payment_method.as_deref()),
                invoice_id: query.invoice_id.map(InvoiceId::new),
            })
            .await,
        ),
        Collection::JournalEntries => listed(
            collection,
            svc.list_journal_entries(&JournalEntryFilter {
                account_id: query.account_id.map(AccountId::new),
            })
            .await,
        ),
        Collection::JournalLines => listed(
            collection,
            svc.list_journal_lines(&JournalLineFilter {
                journal_entry_id: query.journal_entry_id.map(JournalEntryId::new),
            })
            .await,
        ),
        Collection::TaxRates => listed(
            collection,
            svc.list_tax_rates(&TaxRateFilter {
                tax_type: Selection::parse(query.tax_type.as_deref()),
            })
            .await,
        ),
    }
}

/// POST `/ledger/{collection}` - Add a record.
async fn add_record(
    State(state): State<AppState>,
    session: AuthSession,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let Some(collection) = Collection::from_name(&name) else {
        return unknown_collection(&name);
    };
    let svc = &state.ledger;
    let actor = session.context();

    match collection {
        Collection::Accounts => mutate(body, true, |input| svc.add_account(actor, input)).await,
        Collection::Partners => mutate(body, true, |input| svc.add_partner(actor, input)).await,
        Collection::Invoices => mutate(body, true, |input| svc.add_invoice(actor, input)).await,
        Collection::InvoiceLines => {
            mutate(body, true, |input| svc.add_invoice_line(actor, input)).await
        }
        Collection::OpenBalances => {
            mutate(body, true, |input| svc.add_open_balance(actor, input)).await
        }
        Collection::Payments => mutate(body, true, |input| svc.add_payment(actor, input)).await,
        Collection::JournalEntries => {
            mutate(body, true, |input| svc.add_journal_entry(actor, input)).await
        }
        Collection::JournalLines => {
            mutate(body, true, |input| svc.add_journal_line(actor, input)).await
        }
        Collection::TaxRates => mutate(body, true, |input| svc.add_tax_rate(actor, input)).await,
    }
}

/// PUT `/ledger/{collection}/{id}` - Edit a record.
async fn edit_record(
    State(state): State<AppState>,
    session: AuthSession,
    Path((name, id)): Path<(String, i32)>,
    Json(body): Json<Value>,
) -> Response {
    let Some(collection) = Collection::from_name(&name) else {
        return unknown_collection(&name);
    };
    let svc = &state.ledger;
    let actor = session.context();

    match collection {
        Collection::Accounts => {
            mutate(body, false, |input| svc.edit_account(actor, AccountId::new(id), input)).await
        }
        Collection::Partners => {
            mutate(body, false, |input| svc.edit_partner(actor, PartnerId::new(id), input)).await
        }
        Collection::Invoices => {
            mutate(body, false, |input| svc.edit_invoice(actor, InvoiceId::new(id), input)).await
        }
        Collection::InvoiceLines => {
            mutate(body, false, |input| {
                svc.edit_invoice_line(actor, InvoiceLineId::new(id), input)
            })
            .await
        }
        Collection::OpenBalances => {
            mutate(body, false, |input| {
                svc.edit_open_balance(actor, OpenBalanceId::new(id), input)
            })
            .await
        }
        Collection::Payments => {
            mutate(body, false, |input| svc.edit_payment(actor, PaymentId::new(id), input)).await
        }
        Collection::JournalEntries => {
            mutate(body, false, |input| {
                svc.edit_journal_entry(actor, JournalEntryId::new(id), input)
            })
            .await
        }
        Collection::JournalLines => {
            mutate(body, false, |input| {
                svc.edit_journal_line(actor, JournalLineId::new(id), input)
            })
            .await
        }
        Collection::TaxRates => {
            mutate(body, false, |input| svc.edit_tax_rate(actor, TaxRateId::new(id), input)).await
        }
    }
}

/// DELETE `/ledger/{collection}/{id}` - Delete a record. Children are left in place.
async fn delete_record(
    State(state): State<AppState>,
    session: AuthSession,
    Path((name, id)): Path<(String, i32)>,
) -> Response {
    let Some(collection) = Collection::from_name(&name) else {
        return unknown_collection(&name);
    };
    let svc = &state.ledger;
    let actor = session.context();

    match collection {
        Collection::Accounts => respond(svc.delete_account(actor, AccountId::new(id)).await, false),
        Collection::Partners => respond(svc.delete_partner(actor, PartnerId::new(id)).await, false),
        Collection::Invoices => respond(svc.delete_invoice(actor, InvoiceId::new(id)).await, false),
        Collection::InvoiceLines => respond(
            svc.delete_invoice_line(actor, InvoiceLineId::new(id)).await,
            false,
        ),
        Collection::OpenBalances => respond(
            svc.delete_open_balance(actor, OpenBalanceId::new(id)).await,
            false,
        ),
        Collection::Payments => respond(svc.delete_payment(actor, PaymentId::new(id)).await, false),
        Collection::JournalEntries => respond(
            svc.delete_journal_entry(actor, JournalEntryId::new(id)).await,
            false,
        ),
        Collection::JournalLines => respond(
            svc.delete_journal_line(actor, JournalLineId::new(id)).await,
            false,
        ),
        Collection::TaxRates => {
            respond(svc.delete_tax_rate(actor, TaxRateId::new(id)).await, false)
        }
    }
}

/// Parses the body into the operation's input and runs it.
async fn mutate<I, T, F, Fut>(body: Value, created: bool, op: F) -> Response
where
    I: DeserializeOwned,
    T: Serialize,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<Mutation<T>, LedgerError>>,
{
    match serde_json::from_value::<I>(body) {
        Ok(input) => respond(op(input).await, created),
        Err(e) => {
            debug!(error = %e, "Rejected malformed ledger input");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": format!("Request body is not valid: {e}"),
                    "error": "INVALID_BODY"
                })),
            )
                .into_response()
        }
    }
}

/// Renders a mutation result as the outcome envelope.
fn respond<T: Serialize>(result: Result<Mutation<T>, LedgerError>, created: bool) -> Response {
    let outcome = OperationOutcome::settle(result);
    let status = StatusCode::from_u16(outcome.http_status_code(created))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(outcome)).into_response()
}

/// Renders a list. A store failure is logged and degrades to an empty list.
fn listed<T: Serialize>(collection: Collection, result: Result<Vec<T>, LedgerError>) -> Response {
    let records = result.unwrap_or_else(|e| {
        error!(collection = collection.name(), error = %e, "Failed to list ledger records");
        Vec::new()
    });
    Json(records).into_response()
}

fn unknown_collection(name: &str) -> Response {
    ApiError(AppError::NotFound(format!(
        "Unknown ledger collection '{name}'"
    )))
    .into_response()
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
