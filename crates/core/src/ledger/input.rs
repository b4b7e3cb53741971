//! Write inputs for the ledger collections.
//!
//! Each input checks its own required fields, numeric ranges and the widths
//! and decimal places the schema keeps. Checks that need the store
//! (business-key uniqueness, parent existence) live in the service. Optional
//! fields with a default fall back to it on add and keep the stored value on
//! edit.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use rxerp_shared::types::{
    AccountId, InvoiceId, InvoiceLineId, JournalEntryId, JournalLineId, OpenBalanceId, PartnerId,
    PaymentId, SurrogateId, TaxRateId,
};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::records::{
    Account, Invoice, InvoiceLine, JournalEntry, JournalLine, OpenBalance, Partner, Payment,
    TaxRate,
};
use super::vocab::{AccountType, InvoiceStatus, PartnerType, PaymentMethod, TaxType};

/// Days between an invoice date and its default due date.
pub const DEFAULT_PAYMENT_TERMS_DAYS: u64 = 30;

/// Decimal places kept for amounts and quantities.
pub const MONEY_SCALE: u32 = 4;

/// Integer digits kept for amounts and quantities.
pub const MONEY_INTEGER_DIGITS: u32 = 15;

/// Decimal places kept for a tax rate fraction.
pub const RATE_SCALE: u32 = 6;

/// Longest number, code, phone or vocabulary value.
pub const CODE_WIDTH: usize = 50;

/// Longest name, email or tax description.
pub const NAME_WIDTH: usize = 255;

/// Longest free-text description.
pub const NOTE_WIDTH: usize = 500;

const AMOUNT_PRECISION: &str = "Amounts allow at most 4 decimal places and 15 integer digits.";

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn missing<I: SurrogateId>(id: Option<I>) -> bool {
    id.is_none_or(|id| id.raw() <= 0)
}

/// Whether an amount survives a round trip through the store unchanged.
fn storable(amount: Decimal) -> bool {
    amount.normalize().scale() <= MONEY_SCALE
        && amount.abs() < Decimal::from(10_i64.pow(MONEY_INTEGER_DIGITS))
}

fn too_long(value: &str, width: usize) -> bool {
    value.trim().chars().count() > width
}

fn too_long_opt(value: Option<&str>, width: usize) -> bool {
    value.is_some_and(|v| too_long(v, width))
}

fn text(value: &str) -> String {
    value.trim().to_string()
}

fn optional_text(value: Option<String>, current: &str) -> String {
    value.map_or_else(|| current.to_string(), |v| text(&v))
}

/// Values for adding or editing an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountInput {
    /// Unique account number.
    #[serde(default)]
    pub account_number: String,
    /// Display name.
    #[serde(default)]
    pub account_name: String,
    /// Classification.
    #[serde(default)]
    pub account_type: Option<AccountType>,
    /// Balance, zero when omitted on add.
    #[serde(default)]
    pub balance: Option<Decimal>,
}

impl AccountInput {
    /// Checks required fields, widths and the balance precision.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if blank(&self.account_number)
            || blank(&self.account_name)
            || self.account_type.as_ref().is_none_or(AccountType::is_blank)
        {
            return Err(LedgerError::Required("All account fields are required."));
        }
        if too_long(&self.account_number, CODE_WIDTH)
            || too_long(&self.account_name, NAME_WIDTH)
            || too_long_opt(self.account_type.as_ref().map(AccountType::as_str), CODE_WIDTH)
        {
            return Err(LedgerError::OutOfRange(
                "Account Number and Type allow 50 characters and Account Name 255.",
            ));
        }
        if self.balance.is_some_and(|b| !storable(b)) {
            return Err(LedgerError::OutOfRange(AMOUNT_PRECISION));
        }
        Ok(())
    }

    /// Trimmed account number, as it will be stored.
    #[must_use]
    pub fn key(&self) -> String {
        text(&self.account_number)
    }

    /// Builds a new record.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> Account {
        Account {
            id: AccountId::UNASSIGNED,
            account_number: text(&self.account_number),
            account_name: text(&self.account_name),
            account_type: self.account_type.unwrap_or(AccountType::Other(String::new())),
            balance: self.balance.unwrap_or(Decimal::ZERO),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields of an existing record.
    pub fn apply(self, account: &mut Account) {
        account.account_number = text(&self.account_number);
        account.account_name = text(&self.account_name);
        if let Some(account_type) = self.account_type {
            account.account_type = account_type;
        }
        if let Some(balance) = self.balance {
            account.balance = balance;
        }
    }
}

/// Values for adding or editing a partner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnerInput {
    /// Display name.
    #[serde(default)]
    pub partner_name: String,
    /// Relationship.
    #[serde(default)]
    pub partner_type: Option<PartnerType>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl PartnerInput {
    /// Checks required fields and widths.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if blank(&self.partner_name) || self.partner_type.as_ref().is_none_or(PartnerType::is_blank)
        {
            return Err(LedgerError::Required("Partner Name and Type are required."));
        }
        if too_long(&self.partner_name, NAME_WIDTH)
            || too_long_opt(self.partner_type.as_ref().map(PartnerType::as_str), CODE_WIDTH)
            || too_long_opt(self.email.as_deref(), NAME_WIDTH)
            || too_long_opt(self.phone.as_deref(), CODE_WIDTH)
        {
            return Err(LedgerError::OutOfRange(
                "Partner Name and Email allow 255 characters, Type and Phone 50.",
            ));
        }
        Ok(())
    }

    /// Builds a new record. Absent contact details are stored empty.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> Partner {
        Partner {
            id: PartnerId::UNASSIGNED,
            partner_name: text(&self.partner_name),
            partner_type: self.partner_type.unwrap_or(PartnerType::Other(String::new())),
            email: optional_text(self.email, ""),
            phone: optional_text(self.phone, ""),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields of an existing record.
    pub fn apply(self, partner: &mut Partner) {
        partner.partner_name = text(&self.partner_name);
        if let Some(partner_type) = self.partner_type {
            partner.partner_type = partner_type;
        }
        partner.email = optional_text(self.email, &partner.email);
        partner.phone = optional_text(self.phone, &partner.phone);
    }
}

/// Values for adding or editing an invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceInput {
    /// Billed partner.
    #[serde(default)]
    pub partner_id: Option<PartnerId>,
    /// Invoice number.
    #[serde(default)]
    pub invoice_number: String,
    /// Invoice total.
    #[serde(default)]
    pub amount: Decimal,
    /// Status, `Pending` when omitted on add.
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    /// Issue date, today when omitted on add.
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    /// Due date, 30 days after the invoice date when omitted on add.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl InvoiceInput {
    /// Checks required fields and the amount.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if missing(self.partner_id) || blank(&self.invoice_number) {
            return Err(LedgerError::Required("Partner and Invoice Number are required."));
        }
        if too_long(&self.invoice_number, CODE_WIDTH)
            || too_long_opt(self.status.as_ref().map(InvoiceStatus::as_str), CODE_WIDTH)
        {
            return Err(LedgerError::OutOfRange("Invoice Number and Status allow 50 characters."));
        }
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::OutOfRange("Invoice amount must be greater than zero."));
        }
        if !storable(self.amount) {
            return Err(LedgerError::OutOfRange(AMOUNT_PRECISION));
        }
        Ok(())
    }

    /// Builds a new record.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> Invoice {
        let invoice_date = self.invoice_date.unwrap_or_else(|| now.date_naive());
        Invoice {
            id: InvoiceId::UNASSIGNED,
            invoice_number: text(&self.invoice_number),
            partner_id: self.partner_id.unwrap_or(PartnerId::UNASSIGNED),
            amount: self.amount,
            status: self.status.filter(|s| !s.is_blank()).unwrap_or_default(),
            invoice_date,
            due_date: self.due_date.unwrap_or_else(|| default_due_date(invoice_date)),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields of an existing record.
    pub fn apply(self, invoice: &mut Invoice) {
        if let Some(partner_id) = self.partner_id {
            invoice.partner_id = partner_id;
        }
        invoice.invoice_number = text(&self.invoice_number);
        invoice.amount = self.amount;
        if let Some(status) = self.status.filter(|s| !s.is_blank()) {
            invoice.status = status;
        }
        if let Some(date) = self.invoice_date {
            invoice.invoice_date = date;
        }
        if let Some(date) = self.due_date {
            invoice.due_date = date;
        }
    }
}

/// Default due date for an invoice issued on `invoice_date`.
#[must_use]
pub fn default_due_date(invoice_date: NaiveDate) -> NaiveDate {
    invoice_date
        .checked_add_days(Days::new(DEFAULT_PAYMENT_TERMS_DAYS))
        .unwrap_or(invoice_date)
}

/// Values for adding or editing an invoice line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceLineInput {
    /// Owning invoice.
    #[serde(default)]
    pub invoice_id: Option<InvoiceId>,
    /// What was billed.
    #[serde(default)]
    pub description: String,
    /// Units billed.
    #[serde(default)]
    pub quantity: Decimal,
    /// Price per unit.
    #[serde(default)]
    pub unit_price: Decimal,
}

impl InvoiceLineInput {
    /// Checks required fields, quantity, unit price and the resulting line total.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if missing(self.invoice_id) || blank(&self.description) {
            return Err(LedgerError::Required(
                "Invoice, Description, Quantity and Unit Price are required.",
            ));
        }
        if too_long(&self.description, NOTE_WIDTH) {
            return Err(LedgerError::OutOfRange("Description allows 500 characters."));
        }
        if self.quantity <= Decimal::ZERO || self.unit_price < Decimal::ZERO {
            return Err(LedgerError::OutOfRange(
                "Quantity must be greater than zero and unit price cannot be negative.",
            ));
        }
        if !storable(self.quantity) || !storable(self.unit_price) {
            return Err(LedgerError::OutOfRange(AMOUNT_PRECISION));
        }
        // The line total is stored with the same precision as its factors.
        if !self.quantity.checked_mul(self.unit_price).is_some_and(storable) {
            return Err(LedgerError::OutOfRange(
                "Line total must fit 4 decimal places and 15 integer digits.",
            ));
        }
        Ok(())
    }

    /// Builds a new record with its line total.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> InvoiceLine {
        InvoiceLine {
            id: InvoiceLineId::UNASSIGNED,
            invoice_id: self.invoice_id.unwrap_or(InvoiceId::UNASSIGNED),
            description: text(&self.description),
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_total: InvoiceLine::total_for(self.quantity, self.unit_price),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields and recomputes the line total.
    pub fn apply(self, line: &mut InvoiceLine) {
        if let Some(invoice_id) = self.invoice_id {
            line.invoice_id = invoice_id;
        }
        line.description = text(&self.description);
        line.quantity = self.quantity;
        line.unit_price = self.unit_price;
        line.line_total = InvoiceLine::total_for(self.quantity, self.unit_price);
    }
}

/// Values for adding or editing an opening balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenBalanceInput {
    /// Account the balance belongs to.
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Balance amount.
    #[serde(default)]
    pub opening_balance: Decimal,
    /// As-of date, today when omitted on add.
    #[serde(default)]
    pub balance_date: Option<NaiveDate>,
    /// Free text.
    #[serde(default)]
    pub description: Option<String>,
}

impl OpenBalanceInput {
    /// Checks the account reference and the amount.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if missing(self.account_id) {
            return Err(LedgerError::Required("Account and Balance amount are required."));
        }
        if too_long_opt(self.description.as_deref(), NOTE_WIDTH) {
            return Err(LedgerError::OutOfRange("Description allows 500 characters."));
        }
        if self.opening_balance.is_zero() {
            return Err(LedgerError::OutOfRange("Opening balance cannot be zero."));
        }
        if !storable(self.opening_balance) {
            return Err(LedgerError::OutOfRange(AMOUNT_PRECISION));
        }
        Ok(())
    }

    /// Builds a new record.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> OpenBalance {
        OpenBalance {
            id: OpenBalanceId::UNASSIGNED,
            account_id: self.account_id.unwrap_or(AccountId::UNASSIGNED),
            opening_balance: self.opening_balance,
            balance_date: self.balance_date.unwrap_or_else(|| now.date_naive()),
            description: optional_text(self.description, ""),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields of an existing record.
    pub fn apply(self, balance: &mut OpenBalance) {
        if let Some(account_id) = self.account_id {
            balance.account_id = account_id;
        }
        balance.opening_balance = self.opening_balance;
        if let Some(date) = self.balance_date {
            balance.balance_date = date;
        }
        balance.description = optional_text(self.description, &balance.description);
    }
}

/// Values for adding or editing a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentInput {
    /// Invoice being paid.
    #[serde(default)]
    pub invoice_id: Option<InvoiceId>,
    /// Unique payment number.
    #[serde(default)]
    pub payment_number: String,
    /// Amount paid.
    #[serde(default)]
    pub payment_amount: Decimal,
    /// Payment date, today when omitted on add.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// Method, `Bank Transfer` when omitted on add.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

impl PaymentInput {
    /// Checks required fields and the amount.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if missing(self.invoice_id) || blank(&self.payment_number) {
            return Err(LedgerError::Required(
                "Invoice, Payment Number, and Payment amount are required.",
            ));
        }
        if too_long(&self.payment_number, CODE_WIDTH)
            || too_long_opt(self.payment_method.as_ref().map(PaymentMethod::as_str), CODE_WIDTH)
        {
            return Err(LedgerError::OutOfRange("Payment Number and Method allow 50 characters."));
        }
        if self.payment_amount <= Decimal::ZERO {
            return Err(LedgerError::OutOfRange("Payment amount must be greater than zero."));
        }
        if !storable(self.payment_amount) {
            return Err(LedgerError::OutOfRange(AMOUNT_PRECISION));
        }
        Ok(())
    }

    /// Trimmed payment number, as it will be stored.
    #[must_use]
    pub fn key(&self) -> String {
        text(&self.payment_number)
    }

    /// Builds a new record.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> Payment {
        Payment {
            id: PaymentId::UNASSIGNED,
            payment_number: text(&self.payment_number),
            invoice_id: self.invoice_id.unwrap_or(InvoiceId::UNASSIGNED),
            payment_amount: self.payment_amount,
            payment_date: self.payment_date.unwrap_or_else(|| now.date_naive()),
            payment_method: self
                .payment_method
                .filter(|m| !m.is_blank())
                .unwrap_or_default(),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields of an existing record.
    pub fn apply(self, payment: &mut Payment) {
        if let Some(invoice_id) = self.invoice_id {
            payment.invoice_id = invoice_id;
        }
        payment.payment_number = text(&self.payment_number);
        payment.payment_amount = self.payment_amount;
        if let Some(date) = self.payment_date {
            payment.payment_date = date;
        }
        if let Some(method) = self.payment_method.filter(|m| !m.is_blank()) {
            payment.payment_method = method;
        }
    }
}

/// Values for adding or editing a journal entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalEntryInput {
    /// Unique journal number.
    #[serde(default)]
    pub journal_number: String,
    /// Account debited.
    #[serde(default)]
    pub debit_account_id: Option<AccountId>,
    /// Account credited.
    #[serde(default)]
    pub credit_account_id: Option<AccountId>,
    /// Entry amount.
    #[serde(default)]
    pub amount: Decimal,
    /// Free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Entry date, today when omitted on add.
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
}

impl JournalEntryInput {
    /// Checks required fields, the amount and that both sides differ.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if blank(&self.journal_number)
            || missing(self.debit_account_id)
            || missing(self.credit_account_id)
        {
            return Err(LedgerError::Required(
                "Journal Number, Debit Account, Credit Account, and Amount are required.",
            ));
        }
        if too_long(&self.journal_number, CODE_WIDTH)
            || too_long_opt(self.description.as_deref(), NOTE_WIDTH)
        {
            return Err(LedgerError::OutOfRange(
                "Journal Number allows 50 characters and Description 500.",
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::OutOfRange("Journal amount must be greater than zero."));
        }
        if !storable(self.amount) {
            return Err(LedgerError::OutOfRange(AMOUNT_PRECISION));
        }
        if self.debit_account_id == self.credit_account_id {
            return Err(LedgerError::SameAccount);
        }
        Ok(())
    }

    /// Trimmed journal number, as it will be stored.
    #[must_use]
    pub fn key(&self) -> String {
        text(&self.journal_number)
    }

    /// Builds a new record.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> JournalEntry {
        JournalEntry {
            id: JournalEntryId::UNASSIGNED,
            journal_number: text(&self.journal_number),
            debit_account_id: self.debit_account_id.unwrap_or(AccountId::UNASSIGNED),
            credit_account_id: self.credit_account_id.unwrap_or(AccountId::UNASSIGNED),
            amount: self.amount,
            description: optional_text(self.description, ""),
            entry_date: self.entry_date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields of an existing record.
    pub fn apply(self, entry: &mut JournalEntry) {
        entry.journal_number = text(&self.journal_number);
        if let Some(id) = self.debit_account_id {
            entry.debit_account_id = id;
        }
        if let Some(id) = self.credit_account_id {
            entry.credit_account_id = id;
        }
        entry.amount = self.amount;
        entry.description = optional_text(self.description, &entry.description);
        if let Some(date) = self.entry_date {
            entry.entry_date = date;
        }
    }
}

/// Values for adding or editing a journal line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalLineInput {
    /// Owning journal entry.
    #[serde(default)]
    pub journal_entry_id: Option<JournalEntryId>,
    /// Account posted to.
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Debit amount.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount.
    #[serde(default)]
    pub credit: Decimal,
    /// Free text.
    #[serde(default)]
    pub description: Option<String>,
}

impl JournalLineInput {
    /// Checks required references and that both sides are non-negative.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if missing(self.journal_entry_id) || missing(self.account_id) {
            return Err(LedgerError::Required("Journal Entry and Account are required."));
        }
        if too_long_opt(self.description.as_deref(), NOTE_WIDTH) {
            return Err(LedgerError::OutOfRange("Description allows 500 characters."));
        }
        if self.debit < Decimal::ZERO || self.credit < Decimal::ZERO {
            return Err(LedgerError::OutOfRange("Debit and Credit must be non-negative."));
        }
        if !storable(self.debit) || !storable(self.credit) {
            return Err(LedgerError::OutOfRange(AMOUNT_PRECISION));
        }
        Ok(())
    }

    /// Builds a new record with its net amount.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> JournalLine {
        JournalLine {
            id: JournalLineId::UNASSIGNED,
            journal_entry_id: self.journal_entry_id.unwrap_or(JournalEntryId::UNASSIGNED),
            account_id: self.account_id.unwrap_or(AccountId::UNASSIGNED),
            debit: self.debit,
            credit: self.credit,
            net_amount: JournalLine::net_for(self.debit, self.credit),
            description: optional_text(self.description, ""),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields and recomputes the net amount.
    pub fn apply(self, line: &mut JournalLine) {
        if let Some(id) = self.journal_entry_id {
            line.journal_entry_id = id;
        }
        if let Some(id) = self.account_id {
            line.account_id = id;
        }
        line.debit = self.debit;
        line.credit = self.credit;
        line.net_amount = JournalLine::net_for(self.debit, self.credit);
        line.description = optional_text(self.description, &line.description);
    }
}

/// Values for adding or editing a tax rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxRateInput {
    /// Unique tax code.
    #[serde(default)]
    pub tax_code: String,
    /// Rate as a percentage between 0 and 100.
    #[serde(default)]
    pub percentage: Decimal,
    /// Free text.
    #[serde(default)]
    pub tax_description: Option<String>,
    /// Kind of tax. Blank clears it.
    #[serde(default)]
    pub tax_type: Option<TaxType>,
    /// Effective date, today when omitted on add.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

impl TaxRateInput {
    /// Checks the tax code, widths and the percentage range and precision.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if blank(&self.tax_code) {
            return Err(LedgerError::Required(
                "Tax Code is required and percentage must be between 0 and 100.",
            ));
        }
        if too_long(&self.tax_code, CODE_WIDTH)
            || too_long_opt(self.tax_description.as_deref(), NAME_WIDTH)
            || too_long_opt(self.tax_type.as_ref().map(TaxType::as_str), CODE_WIDTH)
        {
            return Err(LedgerError::OutOfRange(
                "Tax Code and Type allow 50 characters and Description 255.",
            ));
        }
        if self.percentage < Decimal::ZERO || self.percentage > Decimal::ONE_HUNDRED {
            return Err(LedgerError::OutOfRange("Tax percentage must be between 0 and 100."));
        }
        if self.rate().normalize().scale() > RATE_SCALE {
            return Err(LedgerError::OutOfRange("Tax percentage allows at most 4 decimal places."));
        }
        Ok(())
    }

    /// Trimmed tax code, as it will be stored.
    #[must_use]
    pub fn key(&self) -> String {
        text(&self.tax_code)
    }

    /// The percentage converted to a stored fraction.
    #[must_use]
    pub fn rate(&self) -> Decimal {
        self.percentage / Decimal::ONE_HUNDRED
    }

    /// Builds a new record.
    #[must_use]
    pub fn into_new(self, now: DateTime<Utc>) -> TaxRate {
        TaxRate {
            id: TaxRateId::UNASSIGNED,
            rate: self.rate(),
            tax_code: text(&self.tax_code),
            tax_description: optional_text(self.tax_description, ""),
            tax_type: self.tax_type.filter(|t| !t.is_blank()),
            effective_date: self.effective_date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
        }
    }

    /// Overwrites the mutable fields of an existing record.
    pub fn apply(self, tax_rate: &mut TaxRate) {
        tax_rate.rate = self.rate();
        tax_rate.tax_code = text(&self.tax_code);
        tax_rate.tax_description = optional_text(self.tax_description, &tax_rate.tax_description);
        if let Some(tax_type) = self.tax_type {
            tax_rate.tax_type = Some(tax_type).filter(|t| !t.is_blank());
        }
        if let Some(date) = self.effective_date {
            tax_rate.effective_date = date;
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
