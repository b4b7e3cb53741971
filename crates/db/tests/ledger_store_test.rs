//! Integration tests for the PostgreSQL ledger gateway.
//!
//! Require Docker: `cargo test -p rxerp-db -- --ignored`.

mod common;

use std::sync::Arc;

use rust_decimal_macros::dec;
use rxerp_core::ledger::{
    AccountFilter, AccountInput, AccountType, ErrorKind, InvoiceInput, InvoiceLineFilter,
    InvoiceLineInput, JournalEntryFilter, JournalEntryInput, LedgerService, LedgerStore,
    PartnerInput, PartnerType, PaymentFilter, PaymentInput, PaymentMethod, RecordStore,
    Selection, StoreError, TaxRateInput,
};
use rxerp_db::PostgresLedgerStore;
use rxerp_shared::types::{AccountId, PaymentId};
use rxerp_shared::{Role, SessionContext};

fn actor() -> SessionContext {
    SessionContext::new("admin@ctrlfreak.com", Role::Admin)
}

fn account(number: &str, name: &str, account_type: AccountType) -> AccountInput {
    AccountInput {
        account_number: number.to_string(),
        account_name: name.to_string(),
        account_type: Some(account_type),
        balance: Some(dec!(0)),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_account_number_rejected() {
    let test_db = common::migrated_db().await;
    let svc = LedgerService::new(Arc::new(PostgresLedgerStore::new(&test_db.db)));

    svc.add_account(&actor(), account("1000", "Cash", AccountType::Asset))
        .await
        .expect("First account should be stored");
    let err = svc
        .add_account(&actor(), account("1000", "Other", AccountType::Asset))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(err.to_string(), "Account number '1000' already exists.");

    let accounts = svc.list_accounts(&AccountFilter::default()).await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_name, "Cash");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_constraint_backstops_insert() {
    let test_db = common::migrated_db().await;
    let store = PostgresLedgerStore::new(&test_db.db);
    let svc = LedgerService::new(Arc::new(store.clone()));

    let stored = svc
        .add_account(&actor(), account("2000", "Payables", AccountType::Liability))
        .await
        .unwrap()
        .record
        .unwrap();

    let mut clash = stored.clone();
    clash.id = AccountId::UNASSIGNED;
    let err = store.accounts().insert(clash).await.unwrap_err();

    assert!(matches!(err, StoreError::UniqueViolation { key, .. } if key == "2000"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_filters_and_orderings_match_memory_store() {
    let test_db = common::migrated_db().await;
    let svc = LedgerService::new(Arc::new(PostgresLedgerStore::new(&test_db.db)));

    for (number, kind) in [
        ("5000", AccountType::Expense),
        ("1000", AccountType::Asset),
        ("1100", AccountType::Asset),
    ] {
        svc.add_account(&actor(), account(number, number, kind))
            .await
            .unwrap();
    }

    let all = svc.list_accounts(&AccountFilter::default()).await.unwrap();
    let numbers: Vec<_> = all.iter().map(|a| a.account_number.as_str()).collect();
    assert_eq!(numbers, ["1000", "1100", "5000"]);

    let assets = svc
        .list_accounts(&AccountFilter {
            account_type: Selection::Only(AccountType::Asset),
        })
        .await
        .unwrap();
    assert_eq!(assets.len(), 2);

    let cash = all[0].id;
    let payables = all[2].id;
    svc.add_journal_entry(
        &actor(),
        JournalEntryInput {
            journal_number: "JE-001".to_string(),
            debit_account_id: Some(cash),
            credit_account_id: Some(payables),
            amount: dec!(100),
            ..JournalEntryInput::default()
        },
    )
    .await
    .unwrap();

    let touching_cash = svc
        .list_journal_entries(&JournalEntryFilter {
            account_id: Some(cash),
        })
        .await
        .unwrap();
    let touching_other = svc
        .list_journal_entries(&JournalEntryFilter {
            account_id: Some(all[1].id),
        })
        .await
        .unwrap();
    assert_eq!(touching_cash.len(), 1);
    assert!(touching_other.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_leaves_dangling_children() {
    let test_db = common::migrated_db().await;
    let svc = LedgerService::new(Arc::new(PostgresLedgerStore::new(&test_db.db)));

    let partner = svc
        .add_partner(
            &actor(),
            PartnerInput {
                partner_name: "Acme".to_string(),
                partner_type: Some(PartnerType::Customer),
                ..PartnerInput::default()
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();
    let invoice = svc
        .add_invoice(
            &actor(),
            InvoiceInput {
                partner_id: Some(partner.id),
                invoice_number: "INV-001".to_string(),
                amount: dec!(500),
                ..InvoiceInput::default()
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();
    let line = svc
        .add_invoice_line(
            &actor(),
            InvoiceLineInput {
                invoice_id: Some(invoice.id),
                description: "Widgets".to_string(),
                quantity: dec!(4),
                unit_price: dec!(12.5),
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();
    assert_eq!(line.line_total, dec!(50));

    svc.add_payment(
        &actor(),
        PaymentInput {
            invoice_id: Some(invoice.id),
            payment_number: "PAY-001".to_string(),
            payment_amount: dec!(200),
            payment_method: Some(PaymentMethod::CreditCard),
            ..PaymentInput::default()
        },
    )
    .await
    .unwrap();

    svc.delete_invoice(&actor(), invoice.id).await.unwrap();

    let payments = svc.list_payments(&PaymentFilter::default()).await.unwrap();
    let lines = svc
        .list_invoice_lines(&InvoiceLineFilter::default())
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].invoice_id, invoice.id);
    assert_eq!(payments[0].payment_method, PaymentMethod::CreditCard);
    assert_eq!(lines.len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_row_reports_missing() {
    let test_db = common::migrated_db().await;
    let store = PostgresLedgerStore::new(&test_db.db);
    let svc = LedgerService::new(Arc::new(store.clone()));

    svc.add_account(&actor(), account("1000", "Cash", AccountType::Asset))
        .await
        .unwrap();

    let err = store.payments().delete(PaymentId::new(999)).await;
    assert_eq!(err, Ok(false));

    let mut ghost = svc
        .list_accounts(&AccountFilter::default())
        .await
        .unwrap()
        .remove(0);
    ghost.id = AccountId::new(999);
    ghost.account_number = "9999".to_string();
    let err = store.accounts().update(&ghost).await.unwrap_err();
    assert!(matches!(err, StoreError::Missing { id: 999, .. }));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_accepted_values_survive_the_round_trip() {
    let test_db = common::migrated_db().await;
    let store = PostgresLedgerStore::new(&test_db.db);
    let svc = LedgerService::new(Arc::new(store.clone()));

    let partner = svc
        .add_partner(
            &actor(),
            PartnerInput {
                partner_name: "Acme".to_string(),
                partner_type: Some(PartnerType::Customer),
                ..PartnerInput::default()
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();
    let invoice = svc
        .add_invoice(
            &actor(),
            InvoiceInput {
                partner_id: Some(partner.id),
                invoice_number: "INV-1".to_string(),
                amount: dec!(0.0001),
                ..InvoiceInput::default()
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();
    let reloaded = store.invoices().find_by_id(invoice.id).await.unwrap().unwrap();
    assert_eq!(reloaded.amount, dec!(0.0001));

    for (quantity, unit_price) in [
        (dec!(1.5), dec!(0.001)),
        (dec!(3), dec!(19.9999)),
        (dec!(0.25), dec!(4.1)),
    ] {
        let line = svc
            .add_invoice_line(
                &actor(),
                InvoiceLineInput {
                    invoice_id: Some(invoice.id),
                    description: "Widgets".to_string(),
                    quantity,
                    unit_price,
                },
            )
            .await
            .unwrap()
            .record
            .unwrap();
        let reloaded = store
            .invoice_lines()
            .find_by_id(line.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.quantity, quantity);
        assert_eq!(reloaded.unit_price, unit_price);
        assert_eq!(reloaded.line_total, reloaded.quantity * reloaded.unit_price);
        assert_eq!(reloaded.line_total, line.line_total);
    }

    // Rejected by validation rather than rounded or refused by the column.
    let err = svc
        .add_invoice_line(
            &actor(),
            InvoiceLineInput {
                invoice_id: Some(invoice.id),
                description: "Widgets".to_string(),
                quantity: dec!(1.00005),
                unit_price: dec!(3),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    for (code, percentage) in [("SALES", dec!(8)), ("STATE", dec!(6.5)), ("FINE", dec!(8.1234))] {
        let tax = svc
            .add_tax_rate(
                &actor(),
                TaxRateInput {
                    tax_code: code.to_string(),
                    percentage,
                    ..TaxRateInput::default()
                },
            )
            .await
            .unwrap()
            .record
            .unwrap();
        let reloaded = store.tax_rates().find_by_id(tax.id).await.unwrap().unwrap();
        assert_eq!(reloaded.rate, percentage / dec!(100));
        assert_eq!(reloaded.percentage(), percentage);
    }

    let err = svc
        .add_account(&actor(), account(&"9".repeat(60), "Cash", AccountType::Asset))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let wide = svc
        .add_account(&actor(), account(&"9".repeat(50), "Cash", AccountType::Asset))
        .await
        .unwrap()
        .record
        .unwrap();
    let reloaded = store.accounts().find_by_id(wide.id).await.unwrap().unwrap();
    assert_eq!(reloaded.account_number.len(), 50);
}
