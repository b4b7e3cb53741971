//! Ledger schema: one table per ledger collection.
//!
//! Reference columns are indexed integers without FOREIGN KEY constraints.
//! Deleting a parent row leaves its children in place.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(LEDGER_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r"
DROP TABLE IF EXISTS tax_rates;
DROP TABLE IF EXISTS journal_lines;
DROP TABLE IF EXISTS journal_entries;
DROP TABLE IF EXISTS payments;
DROP TABLE IF EXISTS open_balances;
DROP TABLE IF EXISTS invoice_lines;
DROP TABLE IF EXISTS invoices;
DROP TABLE IF EXISTS partners;
DROP TABLE IF EXISTS accounts;
",
        )
        .await?;
        Ok(())
    }
}

const LEDGER_SQL: &str = r"
-- Chart of accounts
CREATE TABLE accounts (
    id SERIAL PRIMARY KEY,
    account_number VARCHAR(50) NOT NULL,
    account_name VARCHAR(255) NOT NULL DEFAULT '',
    account_type VARCHAR(50) NOT NULL DEFAULT '',
    balance NUMERIC(19, 4) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_accounts_number UNIQUE (account_number)
);

CREATE INDEX idx_accounts_type ON accounts(account_type);

-- Business partners
CREATE TABLE partners (
    id SERIAL PRIMARY KEY,
    partner_name VARCHAR(255) NOT NULL,
    partner_type VARCHAR(50) NOT NULL DEFAULT '',
    email VARCHAR(255) NOT NULL DEFAULT '',
    phone VARCHAR(50) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_partners_name ON partners(partner_name);

-- Invoices (invoice_number is not unique)
CREATE TABLE invoices (
    id SERIAL PRIMARY KEY,
    invoice_number VARCHAR(50) NOT NULL,
    partner_id INTEGER NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'Pending',
    invoice_date DATE NOT NULL,
    due_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_invoices_partner ON invoices(partner_id);
CREATE INDEX idx_invoices_date ON invoices(invoice_date DESC, id);

-- Invoice lines, line_total stored on every write
CREATE TABLE invoice_lines (
    id SERIAL PRIMARY KEY,
    invoice_id INTEGER NOT NULL,
    description VARCHAR(500) NOT NULL DEFAULT '',
    quantity NUMERIC(19, 4) NOT NULL,
    unit_price NUMERIC(19, 4) NOT NULL,
    line_total NUMERIC(19, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_invoice_lines_invoice ON invoice_lines(invoice_id);

-- Opening balance snapshots
CREATE TABLE open_balances (
    id SERIAL PRIMARY KEY,
    account_id INTEGER NOT NULL,
    opening_balance NUMERIC(19, 4) NOT NULL,
    balance_date DATE NOT NULL,
    description VARCHAR(500) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_open_balances_account ON open_balances(account_id);

-- Payments against invoices
CREATE TABLE payments (
    id SERIAL PRIMARY KEY,
    payment_number VARCHAR(50) NOT NULL,
    invoice_id INTEGER NOT NULL,
    payment_amount NUMERIC(19, 4) NOT NULL,
    payment_date DATE NOT NULL,
    payment_method VARCHAR(50) NOT NULL DEFAULT 'Bank Transfer',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_payments_number UNIQUE (payment_number)
);

CREATE INDEX idx_payments_invoice ON payments(invoice_id);

-- Two-sided journal entries
CREATE TABLE journal_entries (
    id SERIAL PRIMARY KEY,
    journal_number VARCHAR(50) NOT NULL,
    debit_account_id INTEGER NOT NULL,
    credit_account_id INTEGER NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    description VARCHAR(500) NOT NULL DEFAULT '',
    entry_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_journal_entries_number UNIQUE (journal_number)
);

CREATE INDEX idx_journal_entries_debit ON journal_entries(debit_account_id);
CREATE INDEX idx_journal_entries_credit ON journal_entries(credit_account_id);

-- Lines of a journal entry, never balanced against the entry
CREATE TABLE journal_lines (
    id SERIAL PRIMARY KEY,
    journal_entry_id INTEGER NOT NULL,
    account_id INTEGER NOT NULL,
    debit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    credit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    net_amount NUMERIC(19, 4) NOT NULL DEFAULT 0,
    description VARCHAR(500) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_journal_lines_entry ON journal_lines(journal_entry_id);
CREATE INDEX idx_journal_lines_account ON journal_lines(account_id);

-- Tax rates, rate stored as a fraction (0.08 for 8%)
CREATE TABLE tax_rates (
    id SERIAL PRIMARY KEY,
    tax_code VARCHAR(50) NOT NULL,
    rate NUMERIC(9, 6) NOT NULL,
    tax_description VARCHAR(255) NOT NULL DEFAULT '',
    tax_type VARCHAR(50),
    effective_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_tax_rates_code UNIQUE (tax_code)
);
";
