//! Ledger records as stored.
//!
//! Every record carries a store-assigned surrogate id and a `created_at`
//! stamp set once on creation. References to other collections are plain ids;
//! a deleted parent leaves its children pointing at a missing row.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rxerp_shared::types::{
    AccountId, InvoiceId, InvoiceLineId, JournalEntryId, JournalLineId, OpenBalanceId, PartnerId,
    PaymentId, TaxRateId,
};
use serde::{Deserialize, Serialize};

use super::filter::{
    AccountFilter, InvoiceFilter, InvoiceLineFilter, JournalEntryFilter, JournalLineFilter,
    OpenBalanceFilter, PartnerFilter, PaymentFilter, TaxRateFilter,
};
use super::store::{Collection, Record};
use super::vocab::{AccountType, InvoiceStatus, PartnerType, PaymentMethod, TaxType};

/// A chart of accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Surrogate id.
    pub id: AccountId,
    /// Unique account number.
    pub account_number: String,
    /// Display name.
    pub account_name: String,
    /// Classification.
    pub account_type: AccountType,
    /// Current balance, may be negative.
    pub balance: Decimal,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A business partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// Surrogate id.
    pub id: PartnerId,
    /// Display name.
    pub partner_name: String,
    /// Relationship.
    pub partner_type: PartnerType,
    /// Email address, empty when unknown.
    pub email: String,
    /// Phone number, empty when unknown.
    pub phone: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// An invoice issued to a partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Surrogate id.
    pub id: InvoiceId,
    /// Invoice number. Not unique.
    pub invoice_number: String,
    /// Billed partner.
    pub partner_id: PartnerId,
    /// Invoice total.
    pub amount: Decimal,
    /// Collection status.
    pub status: InvoiceStatus,
    /// Issue date.
    pub invoice_date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// One line of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Surrogate id.
    pub id: InvoiceLineId,
    /// Owning invoice.
    pub invoice_id: InvoiceId,
    /// What was billed.
    pub description: String,
    /// Units billed.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// `quantity * unit_price`, stored on every write.
    pub line_total: Decimal,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl InvoiceLine {
    /// Computes the line total for the given quantity and unit price.
    #[must_use]
    pub fn total_for(quantity: Decimal, unit_price: Decimal) -> Decimal {
        quantity * unit_price
    }
}

/// A historical balance snapshot for an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenBalance {
    /// Surrogate id.
    pub id: OpenBalanceId,
    /// Account the balance belongs to.
    pub account_id: AccountId,
    /// Balance amount, never zero.
    pub opening_balance: Decimal,
    /// As-of date.
    pub balance_date: NaiveDate,
    /// Free text.
    pub description: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A payment against an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Surrogate id.
    pub id: PaymentId,
    /// Unique payment number.
    pub payment_number: String,
    /// Invoice being paid.
    pub invoice_id: InvoiceId,
    /// Amount paid.
    pub payment_amount: Decimal,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// How it was paid.
    pub payment_method: PaymentMethod,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A two-sided journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Surrogate id.
    pub id: JournalEntryId,
    /// Unique journal number.
    pub journal_number: String,
    /// Account debited.
    pub debit_account_id: AccountId,
    /// Account credited. Always differs from the debit account.
    pub credit_account_id: AccountId,
    /// Entry amount.
    pub amount: Decimal,
    /// Free text.
    pub description: String,
    /// Entry date.
    pub entry_date: NaiveDate,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// One line of a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Surrogate id.
    pub id: JournalLineId,
    /// Owning journal entry.
    pub journal_entry_id: JournalEntryId,
    /// Account posted to.
    pub account_id: AccountId,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// `debit - credit`, stored on every write.
    pub net_amount: Decimal,
    /// Free text.
    pub description: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl JournalLine {
    /// Computes the net amount for the given debit and credit.
    #[must_use]
    pub fn net_for(debit: Decimal, credit: Decimal) -> Decimal {
        debit - credit
    }
}

/// A tax rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    /// Surrogate id.
    pub id: TaxRateId,
    /// Unique tax code.
    pub tax_code: String,
    /// Rate as a fraction, `0.08` for 8%.
    pub rate: Decimal,
    /// Free text.
    pub tax_description: String,
    /// Kind of tax, if given.
    pub tax_type: Option<TaxType>,
    /// Date the rate takes effect.
    pub effective_date: NaiveDate,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl TaxRate {
    /// Returns the rate as a percentage.
    #[must_use]
    pub fn percentage(&self) -> Decimal {
        (self.rate * Decimal::ONE_HUNDRED).normalize()
    }
}

impl Record for Account {
    type Id = AccountId;
    type Filter = AccountFilter;
    const COLLECTION: Collection = Collection::Accounts;

    fn id(&self) -> AccountId {
        self.id
    }

    fn set_id(&mut self, id: AccountId) {
        self.id = id;
    }

    fn matches(&self, filter: &AccountFilter) -> bool {
        filter.account_type.admits(&self.account_type)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.account_number
            .cmp(&b.account_number)
            .then(a.id.cmp(&b.id))
    }

    fn business_key(&self) -> Option<&str> {
        Some(&self.account_number)
    }
}

impl Record for Partner {
    type Id = PartnerId;
    type Filter = PartnerFilter;
    const COLLECTION: Collection = Collection::Partners;

    fn id(&self) -> PartnerId {
        self.id
    }

    fn set_id(&mut self, id: PartnerId) {
        self.id = id;
    }

    fn matches(&self, filter: &PartnerFilter) -> bool {
        filter.partner_type.admits(&self.partner_type)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.partner_name.cmp(&b.partner_name).then(a.id.cmp(&b.id))
    }
}

impl Record for Invoice {
    type Id = InvoiceId;
    type Filter = InvoiceFilter;
    const COLLECTION: Collection = Collection::Invoices;

    fn id(&self) -> InvoiceId {
        self.id
    }

    fn set_id(&mut self, id: InvoiceId) {
        self.id = id;
    }

    fn matches(&self, filter: &InvoiceFilter) -> bool {
        filter.status.admits(&self.status)
            && filter.partner_id.is_none_or(|p| p == self.partner_id)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.invoice_date
            .cmp(&a.invoice_date)
            .then(a.id.cmp(&b.id))
    }
}

impl Record for InvoiceLine {
    type Id = InvoiceLineId;
    type Filter = InvoiceLineFilter;
    const COLLECTION: Collection = Collection::InvoiceLines;

    fn id(&self) -> InvoiceLineId {
        self.id
    }

    fn set_id(&mut self, id: InvoiceLineId) {
        self.id = id;
    }

    fn matches(&self, filter: &InvoiceLineFilter) -> bool {
        filter.invoice_id.is_none_or(|i| i == self.invoice_id)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id))
    }
}

impl Record for OpenBalance {
    type Id = OpenBalanceId;
    type Filter = OpenBalanceFilter;
    const COLLECTION: Collection = Collection::OpenBalances;

    fn id(&self) -> OpenBalanceId {
        self.id
    }

    fn set_id(&mut self, id: OpenBalanceId) {
        self.id = id;
    }

    fn matches(&self, filter: &OpenBalanceFilter) -> bool {
        filter.account_id.is_none_or(|a| a == self.account_id)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.balance_date
            .cmp(&a.balance_date)
            .then(a.id.cmp(&b.id))
    }
}

impl Record for Payment {
    type Id = PaymentId;
    type Filter = PaymentFilter;
    const COLLECTION: Collection = Collection::Payments;

    fn id(&self) -> PaymentId {
        self.id
    }

    fn set_id(&mut self, id: PaymentId) {
        self.id = id;
    }

    fn matches(&self, filter: &PaymentFilter) -> bool {
        filter.payment_method.admits(&self.payment_method)
            && filter.invoice_id.is_none_or(|i| i == self.invoice_id)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.payment_date
            .cmp(&a.payment_date)
            .then(a.id.cmp(&b.id))
    }

    fn business_key(&self) -> Option<&str> {
        Some(&self.payment_number)
    }
}

impl Record for JournalEntry {
    type Id = JournalEntryId;
    type Filter = JournalEntryFilter;
    const COLLECTION: Collection = Collection::JournalEntries;

    fn id(&self) -> JournalEntryId {
        self.id
    }

    fn set_id(&mut self, id: JournalEntryId) {
        self.id = id;
    }

    fn matches(&self, filter: &JournalEntryFilter) -> bool {
        filter
            .account_id
            .is_none_or(|a| a == self.debit_account_id || a == self.credit_account_id)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.entry_date.cmp(&a.entry_date).then(a.id.cmp(&b.id))
    }

    fn business_key(&self) -> Option<&str> {
        Some(&self.journal_number)
    }
}

impl Record for JournalLine {
    type Id = JournalLineId;
    type Filter = JournalLineFilter;
    const COLLECTION: Collection = Collection::JournalLines;

    fn id(&self) -> JournalLineId {
        self.id
    }

    fn set_id(&mut self, id: JournalLineId) {
        self.id = id;
    }

    fn matches(&self, filter: &JournalLineFilter) -> bool {
        filter
            .journal_entry_id
            .is_none_or(|e| e == self.journal_entry_id)
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id))
    }
}

impl Record for TaxRate {
    type Id = TaxRateId;
    type Filter = TaxRateFilter;
    const COLLECTION: Collection = Collection::TaxRates;

    fn id(&self) -> TaxRateId {
        self.id
    }

    fn set_id(&mut self, id: TaxRateId) {
        self.id = id;
    }

    fn matches(&self, filter: &TaxRateFilter) -> bool {
        filter.tax_type.admits_opt(self.tax_type.as_ref())
    }

    fn ordering(a: &Self, b: &Self) -> Ordering {
        a.tax_code.cmp(&b.tax_code).then(a.id.cmp(&b.id))
    }

    fn business_key(&self) -> Option<&str> {
        Some(&self.tax_code)
    }
}
