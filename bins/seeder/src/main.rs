//! Database seeder for rxerp development and testing.
//!
//! Loads the demo ledger (chart of accounts, partners, invoices, payments,
//! journal entries and tax rates) through the ledger service, then issues a
//! demo admin session token.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use rxerp_core::ledger::{
    AccountFilter, AccountInput, AccountType, InvoiceInput, InvoiceStatus, JournalEntryInput,
    LedgerService, Mutation, OpenBalanceInput, PartnerInput, PartnerType, PaymentInput,
    PaymentMethod, TaxRateInput, TaxType,
};
use rxerp_db::migration::Migrator;
use rxerp_db::{PostgresLedgerStore, SessionRepository, connect_with};
use rxerp_shared::types::{AccountId, InvoiceId, PartnerId};
use rxerp_shared::{AppConfig, Role, SessionContext};

/// Email the demo session signs in as.
const DEMO_EMAIL: &str = "admin@ctrlfreak.com";

const ACCOUNTS: [(&str, &str, AccountType, i64); 7] = [
    ("1000", "Cash", AccountType::Asset, 50_000),
    ("1100", "Accounts Receivable", AccountType::Asset, 25_000),
    ("1200", "Inventory", AccountType::Asset, 75_000),
    ("2000", "Accounts Payable", AccountType::Liability, -30_000),
    ("3000", "Common Stock", AccountType::Equity, 100_000),
    ("4000", "Sales Revenue", AccountType::Revenue, 150_000),
    ("5000", "Cost of Goods Sold", AccountType::Expense, -45_000),
];

const PARTNERS: [(&str, PartnerType, &str, &str); 5] = [
    ("Tech Solutions Inc", PartnerType::Vendor, "info@techsolutions.com", "(555) 123-4567"),
    ("Global Manufacturing Co", PartnerType::Customer, "sales@globalmfg.com", "(555) 234-5678"),
    ("Premium Supplies Ltd", PartnerType::Vendor, "order@premium-supplies.com", "(555) 345-6789"),
    ("Enterprise Solutions", PartnerType::Customer, "contact@enterprise.com", "(555) 456-7890"),
    (
        "Innovation Partners",
        PartnerType::Associate,
        "hello@innovationpartners.com",
        "(555) 567-8901",
    ),
];

/// Invoice number, partner position, amount, status, invoice and due day offsets.
const INVOICES: [(&str, usize, i64, InvoiceStatus, i64, i64); 5] = [
    ("INV-001", 1, 5_000, InvoiceStatus::Paid, -30, -5),
    ("INV-002", 3, 7_500, InvoiceStatus::Pending, -15, 15),
    ("INV-003", 1, 3_200, InvoiceStatus::Pending, -10, 20),
    ("INV-004", 3, 8_900, InvoiceStatus::Paid, -45, -20),
    ("INV-005", 1, 4_500, InvoiceStatus::Overdue, -60, -15),
];

const OPEN_BALANCES: [(usize, i64, &str); 5] = [
    (0, 25_000, "Opening Balance - Cash Account"),
    (1, 15_000, "Opening Balance - Receivables"),
    (2, 60_000, "Opening Balance - Inventory"),
    (3, -20_000, "Opening Balance - Payables"),
    (4, 100_000, "Opening Balance - Equity"),
];

const PAYMENTS: [(&str, usize, i64, i64, PaymentMethod); 5] = [
    ("PAY-001", 0, 5_000, -20, PaymentMethod::Wire),
    ("PAY-002", 3, 8_900, -30, PaymentMethod::Check),
    ("PAY-003", 0, 5_000, -5, PaymentMethod::CreditCard),
    ("PAY-004", 1, 3_750, -2, PaymentMethod::BankTransfer),
    ("PAY-005", 3, 8_900, -10, PaymentMethod::Cash),
];

/// Journal number, debit and credit account positions, amount, description, day offset.
const JOURNAL_ENTRIES: [(&str, usize, usize, i64, &str, i64); 5] = [
    ("JE-001", 0, 3, 10_000, "Payment for supplier invoice", -5),
    ("JE-002", 6, 2, 5_000, "COGS adjustment", -3),
    ("JE-003", 1, 5, 7_500, "Invoice recognition", -2),
    ("JE-004", 0, 6, 3_200, "Expense payment", -1),
    ("JE-005", 2, 1, 4_500, "Inventory adjustment", 0),
];

/// Tax code, description, percentage in thousandths, type.
const TAX_RATES: [(&str, &str, i64, TaxType); 5] = [
    ("SALES", "Sales Tax Rate", 8_000, TaxType::SalesTax),
    ("FED", "Federal Income Tax", 21_000, TaxType::Federal),
    ("STATE", "State Income Tax", 6_500, TaxType::State),
    ("LOCAL", "Local Sales Tax", 2_500, TaxType::Local),
    ("PAYROLL", "Payroll Tax Rate", 15_000, TaxType::Payroll),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let database = config.require_database()?;

    println!("Connecting to database...");
    let db = connect_with(database)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None).await?;

    let ledger = LedgerService::new(Arc::new(PostgresLedgerStore::new(&db)));
    let actor = SessionContext::new(DEMO_EMAIL, Role::Admin);

    let existing = ledger.list_accounts(&AccountFilter::default()).await?;
    if existing.is_empty() {
        seed_ledger(&ledger, &actor).await?;
    } else {
        println!("  Ledger already has {} accounts, skipping...", existing.len());
    }

    println!("Creating demo session...");
    let token = config
        .session
        .demo_token
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    SessionRepository::new(db)
        .create(&token, &actor, None)
        .await
        .context("Failed to create demo session")?;
    println!("  Demo token for {DEMO_EMAIL}: {token}");

    println!("Seeding complete!");
    Ok(())
}

fn days_from_today(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

fn stored<T>(mutation: Mutation<T>) -> anyhow::Result<T> {
    mutation
        .record
        .with_context(|| format!("No record returned for: {}", mutation.message))
}

async fn seed_ledger(ledger: &LedgerService, actor: &SessionContext) -> anyhow::Result<()> {
    println!("Seeding accounts...");
    let mut accounts: Vec<AccountId> = Vec::with_capacity(ACCOUNTS.len());
    for (number, name, account_type, balance) in ACCOUNTS {
        let input = AccountInput {
            account_number: number.to_string(),
            account_name: name.to_string(),
            account_type: Some(account_type),
            balance: Some(Decimal::from(balance)),
        };
        accounts.push(stored(ledger.add_account(actor, input).await?)?.id);
    }

    println!("Seeding partners...");
    let mut partners: Vec<PartnerId> = Vec::with_capacity(PARTNERS.len());
    for (name, partner_type, email, phone) in PARTNERS {
        let input = PartnerInput {
            partner_name: name.to_string(),
            partner_type: Some(partner_type),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        };
        partners.push(stored(ledger.add_partner(actor, input).await?)?.id);
    }

    println!("Seeding invoices...");
    let mut invoices: Vec<InvoiceId> = Vec::with_capacity(INVOICES.len());
    for (number, partner, amount, status, issued, due) in INVOICES {
        let input = InvoiceInput {
            partner_id: Some(partners[partner]),
            invoice_number: number.to_string(),
            amount: Decimal::from(amount),
            status: Some(status),
            invoice_date: Some(days_from_today(issued)),
            due_date: Some(days_from_today(due)),
        };
        invoices.push(stored(ledger.add_invoice(actor, input).await?)?.id);
    }

    println!("Seeding open balances...");
    for (account, amount, description) in OPEN_BALANCES {
        let input = OpenBalanceInput {
            account_id: Some(accounts[account]),
            opening_balance: Decimal::from(amount),
            balance_date: Some(days_from_today(-90)),
            description: Some(description.to_string()),
        };
        ledger.add_open_balance(actor, input).await?;
    }

    println!("Seeding payments...");
    for (number, invoice, amount, offset, method) in PAYMENTS {
        let input = PaymentInput {
            invoice_id: Some(invoices[invoice]),
            payment_number: number.to_string(),
            payment_amount: Decimal::from(amount),
            payment_date: Some(days_from_today(offset)),
            payment_method: Some(method),
        };
        ledger.add_payment(actor, input).await?;
    }

    println!("Seeding journal entries...");
    for (number, debit, credit, amount, description, offset) in JOURNAL_ENTRIES {
        let input = JournalEntryInput {
            journal_number: number.to_string(),
            debit_account_id: Some(accounts[debit]),
            credit_account_id: Some(accounts[credit]),
            amount: Decimal::from(amount),
            description: Some(description.to_string()),
            entry_date: Some(days_from_today(offset)),
        };
        ledger.add_journal_entry(actor, input).await?;
    }

    println!("Seeding tax rates...");
    for (code, description, thousandths, tax_type) in TAX_RATES {
        let input = TaxRateInput {
            tax_code: code.to_string(),
            percentage: Decimal::new(thousandths, 3),
            tax_description: Some(description.to_string()),
            tax_type: Some(tax_type),
            effective_date: Some(days_from_today(-365)),
        };
        ledger.add_tax_rate(actor, input).await?;
    }

    Ok(())
}
