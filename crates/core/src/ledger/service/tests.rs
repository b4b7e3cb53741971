//! Ledger service tests against the in-memory store.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rxerp_shared::types::{
    AccountId, InvoiceId, InvoiceLineId, JournalEntryId, JournalLineId, OpenBalanceId, PartnerId,
    PaymentId, TaxRateId,
};
use rxerp_shared::{Role, SessionContext};

use super::LedgerService;
use crate::ledger::error::{ErrorKind, LedgerError};
use crate::ledger::filter::{
    AccountFilter, InvoiceFilter, InvoiceLineFilter, JournalLineFilter, OpenBalanceFilter,
    PaymentFilter,
};
use crate::ledger::input::{
    AccountInput, InvoiceInput, InvoiceLineInput, JournalEntryInput, JournalLineInput,
    OpenBalanceInput, PartnerInput, PaymentInput, TaxRateInput,
};
use crate::ledger::memory::MemoryStore;
use crate::ledger::store::Collection;
use crate::ledger::vocab::{AccountType, InvoiceStatus, PartnerType};

fn service() -> LedgerService {
    LedgerService::new(Arc::new(MemoryStore::new()))
}

fn actor() -> SessionContext {
    SessionContext::new("accountant@example.com", Role::Accountant)
}

fn account_input(
    number: &str,
    name: &str,
    account_type: AccountType,
    balance: Decimal,
) -> AccountInput {
    AccountInput {
        account_number: number.to_string(),
        account_name: name.to_string(),
        account_type: Some(account_type),
        balance: Some(balance),
    }
}

async fn add_account(svc: &LedgerService, number: &str) -> AccountId {
    svc.add_account(
        &actor(),
        account_input(number, &format!("Account {number}"), AccountType::Asset, Decimal::ZERO),
    )
    .await
    .unwrap()
    .record
    .unwrap()
    .id
}

async fn add_partner(svc: &LedgerService, name: &str) -> PartnerId {
    svc.add_partner(
        &actor(),
        PartnerInput {
            partner_name: name.to_string(),
            partner_type: Some(PartnerType::Customer),
            ..PartnerInput::default()
        },
    )
    .await
    .unwrap()
    .record
    .unwrap()
    .id
}

async fn add_invoice(svc: &LedgerService, partner: PartnerId, amount: Decimal) -> InvoiceId {
    svc.add_invoice(
        &actor(),
        InvoiceInput {
            partner_id: Some(partner),
            invoice_number: "INV-100".to_string(),
            amount,
            ..InvoiceInput::default()
        },
    )
    .await
    .unwrap()
    .record
    .unwrap()
    .id
}

fn journal_input(
    number: &str,
    debit: AccountId,
    credit: AccountId,
    amount: Decimal,
) -> JournalEntryInput {
    JournalEntryInput {
        journal_number: number.to_string(),
        debit_account_id: Some(debit),
        credit_account_id: Some(credit),
        amount,
        ..JournalEntryInput::default()
    }
}

// ========== Accounts ==========

#[tokio::test]
async fn test_duplicate_account_number_rejected() {
    let svc = service();
    let first = svc
        .add_account(
            &actor(),
            account_input("1000", "Cash", AccountType::Asset, dec!(50000)),
        )
        .await
        .unwrap();
    assert_eq!(
        first.message,
        "Account 'Cash' (1000) has been successfully added!"
    );
    assert!(first.record.unwrap().id.is_assigned());

    let err = svc
        .add_account(
            &actor(),
            account_input("1000", "Cash2", AccountType::Asset, Decimal::ZERO),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(err.to_string(), "Account number '1000' already exists.");

    let accounts = svc.list_accounts(&AccountFilter::default()).await.unwrap();
    assert_eq!(
        accounts.iter().filter(|a| a.account_number == "1000").count(),
        1
    );
    assert_eq!(accounts[0].account_name, "Cash");
}

#[tokio::test]
async fn test_validation_runs_before_uniqueness() {
    let svc = service();
    add_account(&svc, "1000").await;

    let err = svc
        .add_account(
            &actor(),
            AccountInput {
                account_number: "1000".to_string(),
                ..AccountInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_edit_account_rechecks_changed_number_only() {
    let svc = service();
    let cash = add_account(&svc, "1000").await;
    add_account(&svc, "2000").await;

    // Unchanged number passes.
    let edited = svc
        .edit_account(
            &actor(),
            cash,
            account_input("1000", "Petty Cash", AccountType::Asset, dec!(10)),
        )
        .await
        .unwrap();
    assert_eq!(edited.record.unwrap().account_name, "Petty Cash");

    // Changing into another account's number fails.
    let err = svc
        .edit_account(
            &actor(),
            cash,
            account_input("2000", "Petty Cash", AccountType::Asset, dec!(10)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Account number '2000' already exists.");

    // Changing into a free number works.
    let moved = svc
        .edit_account(
            &actor(),
            cash,
            account_input("1010", "Petty Cash", AccountType::Asset, dec!(10)),
        )
        .await
        .unwrap();
    assert_eq!(moved.record.unwrap().account_number, "1010");
}

#[tokio::test]
async fn test_edit_keeps_created_at() {
    let svc = service();
    let created = svc
        .add_account(
            &actor(),
            account_input("1000", "Cash", AccountType::Asset, dec!(1)),
        )
        .await
        .unwrap()
        .record
        .unwrap();

    let edited = svc
        .edit_account(
            &actor(),
            created.id,
            account_input("1000", "Cash", AccountType::Asset, dec!(2)),
        )
        .await
        .unwrap()
        .record
        .unwrap();
    assert_eq!(edited.created_at, created.created_at);
    assert_eq!(edited.balance, dec!(2));
}

#[tokio::test]
async fn test_edit_missing_target_is_not_found_before_validation() {
    let svc = service();
    let err = svc
        .edit_account(&actor(), AccountId::new(99), AccountInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(
        err,
        LedgerError::NotFound {
            collection: Collection::Accounts,
            id: 99
        }
    ));
}

// ========== Partners and invoices ==========

#[tokio::test]
async fn test_invoice_for_partner_and_dangling_payment() {
    let svc = service();
    let acme = add_partner(&svc, "Acme").await;

    let added = svc
        .add_invoice(
            &actor(),
            InvoiceInput {
                partner_id: Some(acme),
                invoice_number: "INV-100".to_string(),
                amount: dec!(500),
                status: Some(InvoiceStatus::Pending),
                ..InvoiceInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        added.message,
        "Invoice 'INV-100' ($500.00) has been successfully added!"
    );

    let err = svc
        .add_payment(
            &actor(),
            PaymentInput {
                invoice_id: Some(InvoiceId::new(999)),
                payment_number: "PAY-1".to_string(),
                payment_amount: dec!(500),
                ..PaymentInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Referential);
    assert_eq!(err.to_string(), "Selected invoice not found.");
    assert!(
        svc.list_payments(&PaymentFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_invoice_requires_existing_partner() {
    let svc = service();
    let err = svc
        .add_invoice(
            &actor(),
            InvoiceInput {
                partner_id: Some(PartnerId::new(7)),
                invoice_number: "INV-1".to_string(),
                amount: dec!(10),
                ..InvoiceInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Selected partner not found.");
}

#[tokio::test]
async fn test_partner_names_may_repeat() {
    let svc = service();
    let a = add_partner(&svc, "Acme").await;
    let b = add_partner(&svc, "Acme").await;
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_generated_partners_listed_by_name() {
    use fake::Fake;
    use fake::faker::company::en::CompanyName;
    use fake::faker::internet::en::SafeEmail;

    let svc = service();
    for _ in 0..8 {
        let name: String = CompanyName().fake();
        let email: String = SafeEmail().fake();
        let stored = svc
            .add_partner(
                &actor(),
                PartnerInput {
                    partner_name: format!("  {name} "),
                    partner_type: Some(PartnerType::Vendor),
                    email: Some(email.clone()),
                    phone: None,
                },
            )
            .await
            .unwrap()
            .record
            .unwrap();
        assert_eq!(stored.partner_name, name);
        assert_eq!(stored.email, email);
        assert!(stored.phone.is_empty());
    }

    let partners = svc.list_partners(&Default::default()).await.unwrap();
    assert_eq!(partners.len(), 8);
    assert!(
        partners
            .windows(2)
            .all(|pair| pair[0].partner_name <= pair[1].partner_name)
    );
}

#[tokio::test]
async fn test_unstorable_values_rejected_before_anything_is_written() {
    let svc = service();
    let partner = add_partner(&svc, "Acme").await;
    let invoice = add_invoice(&svc, partner, dec!(100)).await;

    let err = svc
        .add_invoice(
            &actor(),
            InvoiceInput {
                partner_id: Some(partner),
                invoice_number: "INV-200".to_string(),
                amount: dec!(0.00001),
                ..InvoiceInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let invoices = svc.list_invoices(&InvoiceFilter::default()).await.unwrap();
    assert_eq!(invoices.len(), 1);

    let err = svc
        .add_invoice_line(
            &actor(),
            InvoiceLineInput {
                invoice_id: Some(invoice),
                description: "Widgets".to_string(),
                quantity: dec!(1.00005),
                unit_price: dec!(3),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let lines = svc
        .list_invoice_lines(&InvoiceLineFilter::default())
        .await
        .unwrap();
    assert!(lines.is_empty());

    let err = svc
        .add_account(
            &actor(),
            account_input(&"9".repeat(60), "Cash", AccountType::Asset, Decimal::ZERO),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(!err.is_system());
    let accounts = svc.list_accounts(&AccountFilter::default()).await.unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_tax_rate_with_too_fine_percentage_not_stored() {
    let svc = service();
    let err = svc
        .add_tax_rate(
            &actor(),
            TaxRateInput {
                tax_code: "SALES".to_string(),
                percentage: dec!(8.12345),
                ..TaxRateInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let stored = svc
        .add_tax_rate(
            &actor(),
            TaxRateInput {
                tax_code: "SALES".to_string(),
                percentage: dec!(8.1234),
                ..TaxRateInput::default()
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();
    assert_eq!(stored.rate, dec!(0.081234));
}

#[tokio::test]
async fn test_invoice_line_total_never_stale() {
    let svc = service();
    let partner = add_partner(&svc, "Acme").await;
    let invoice = add_invoice(&svc, partner, dec!(100)).await;

    let line = svc
        .add_invoice_line(
            &actor(),
            InvoiceLineInput {
                invoice_id: Some(invoice),
                description: "Consulting".to_string(),
                quantity: dec!(2.5),
                unit_price: dec!(40),
            },
        )
        .await
        .unwrap();
    assert_eq!(line.message, "Invoice line added.");
    let line = line.record.unwrap();
    assert_eq!(line.line_total, dec!(100));

    svc.edit_invoice_line(
        &actor(),
        line.id,
        InvoiceLineInput {
            invoice_id: Some(invoice),
            description: "Consulting".to_string(),
            quantity: dec!(3),
            unit_price: dec!(40),
        },
    )
    .await
    .unwrap();

    let stored = svc
        .list_invoice_lines(&InvoiceLineFilter {
            invoice_id: Some(invoice),
        })
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].line_total, dec!(120));
    assert_eq!(stored[0].line_total, stored[0].quantity * stored[0].unit_price);
}

#[tokio::test]
async fn test_invoice_line_requires_existing_invoice() {
    let svc = service();
    let err = svc
        .add_invoice_line(
            &actor(),
            InvoiceLineInput {
                invoice_id: Some(InvoiceId::new(3)),
                description: "Widget".to_string(),
                quantity: dec!(1),
                unit_price: dec!(1),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Referential);
}

// ========== Open balances ==========

#[tokio::test]
async fn test_open_balance_message_names_account() {
    let svc = service();
    let account = svc
        .add_account(
            &actor(),
            account_input("1000", "Cash", AccountType::Asset, Decimal::ZERO),
        )
        .await
        .unwrap()
        .record
        .unwrap();

    let added = svc
        .add_open_balance(
            &actor(),
            OpenBalanceInput {
                account_id: Some(account.id),
                opening_balance: dec!(-1250.5),
                ..OpenBalanceInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        added.message,
        "Open Balance (-$1,250.50) for 'Cash' has been successfully added!"
    );
}

#[tokio::test]
async fn test_open_balance_requires_existing_account() {
    let svc = service();
    let err = svc
        .add_open_balance(
            &actor(),
            OpenBalanceInput {
                account_id: Some(AccountId::new(5)),
                opening_balance: dec!(10),
                ..OpenBalanceInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Selected account not found.");
}

#[tokio::test]
async fn test_deleting_account_leaves_open_balance_dangling() {
    let svc = service();
    let account = add_account(&svc, "1000").await;
    let balance = svc
        .add_open_balance(
            &actor(),
            OpenBalanceInput {
                account_id: Some(account),
                opening_balance: dec!(500),
                description: Some("Opening".to_string()),
                ..OpenBalanceInput::default()
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();

    svc.delete_account(&actor(), account).await.unwrap();

    let remaining = svc
        .list_open_balances(&OpenBalanceFilter::default())
        .await
        .unwrap();
    assert_eq!(remaining, vec![balance]);
    assert_eq!(remaining[0].account_id, account);
    assert!(
        svc.list_accounts(&AccountFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

// ========== Payments ==========

#[tokio::test]
async fn test_duplicate_payment_number_rejected() {
    let svc = service();
    let partner = add_partner(&svc, "Acme").await;
    let invoice = add_invoice(&svc, partner, dec!(100)).await;
    let input = PaymentInput {
        invoice_id: Some(invoice),
        payment_number: "PAY-1".to_string(),
        payment_amount: dec!(60),
        ..PaymentInput::default()
    };

    let added = svc.add_payment(&actor(), input.clone()).await.unwrap();
    assert_eq!(added.message, "Payment ($60.00) has been successfully added!");

    let err = svc.add_payment(&actor(), input).await.unwrap_err();
    assert_eq!(err.to_string(), "Payment number 'PAY-1' already exists.");
}

#[tokio::test]
async fn test_duplicate_check_runs_before_reference_check() {
    let svc = service();
    let partner = add_partner(&svc, "Acme").await;
    let invoice = add_invoice(&svc, partner, dec!(100)).await;
    svc.add_payment(
        &actor(),
        PaymentInput {
            invoice_id: Some(invoice),
            payment_number: "PAY-1".to_string(),
            payment_amount: dec!(10),
            ..PaymentInput::default()
        },
    )
    .await
    .unwrap();

    let err = svc
        .add_payment(
            &actor(),
            PaymentInput {
                invoice_id: Some(InvoiceId::new(404)),
                payment_number: "PAY-1".to_string(),
                payment_amount: dec!(10),
                ..PaymentInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
}

#[tokio::test]
async fn test_overpayment_is_allowed() {
    let svc = service();
    let partner = add_partner(&svc, "Acme").await;
    let invoice = add_invoice(&svc, partner, dec!(100)).await;
    for (number, amount) in [("PAY-1", dec!(80)), ("PAY-2", dec!(80))] {
        svc.add_payment(
            &actor(),
            PaymentInput {
                invoice_id: Some(invoice),
                payment_number: number.to_string(),
                payment_amount: amount,
                ..PaymentInput::default()
            },
        )
        .await
        .unwrap();
    }
    assert_eq!(
        svc.list_payments(&PaymentFilter {
            invoice_id: Some(invoice),
            ..PaymentFilter::default()
        })
        .await
        .unwrap()
        .len(),
        2
    );
}

#[tokio::test]
async fn test_store_unique_constraint_surfaces_as_duplicate_on_edit() {
    let svc = service();
    let partner = add_partner(&svc, "Acme").await;
    let invoice = add_invoice(&svc, partner, dec!(100)).await;
    let mut ids = Vec::new();
    for number in ["PAY-1", "PAY-2"] {
        ids.push(
            svc.add_payment(
                &actor(),
                PaymentInput {
                    invoice_id: Some(invoice),
                    payment_number: number.to_string(),
                    payment_amount: dec!(10),
                    ..PaymentInput::default()
                },
            )
            .await
            .unwrap()
            .record
            .unwrap()
            .id,
        );
    }

    let err = svc
        .edit_payment(
            &actor(),
            ids[1],
            PaymentInput {
                invoice_id: Some(invoice),
                payment_number: "PAY-1".to_string(),
                payment_amount: dec!(10),
                ..PaymentInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
}

// ========== Journal ==========

#[tokio::test]
async fn test_journal_entry_same_account_rejected() {
    let svc = service();
    let cash = add_account(&svc, "1000").await;
    let err = svc
        .add_journal_entry(&actor(), journal_input("JE-1", cash, cash, dec!(100)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Debit and Credit accounts must be different.");
}

#[tokio::test]
async fn test_journal_entry_same_account_rejected_on_edit() {
    let svc = service();
    let cash = add_account(&svc, "1000").await;
    let revenue = add_account(&svc, "4000").await;
    let entry = svc
        .add_journal_entry(&actor(), journal_input("JE-1", cash, revenue, dec!(100)))
        .await
        .unwrap()
        .record
        .unwrap();

    let err = svc
        .edit_journal_entry(
            &actor(),
            entry.id,
            journal_input("JE-1", revenue, revenue, dec!(100)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::SameAccount));
}

#[tokio::test]
async fn test_journal_entry_requires_both_accounts() {
    let svc = service();
    let cash = add_account(&svc, "1000").await;

    let err = svc
        .add_journal_entry(
            &actor(),
            journal_input("JE-1", AccountId::new(50), cash, dec!(10)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Selected debit account not found.");

    let err = svc
        .add_journal_entry(
            &actor(),
            journal_input("JE-1", cash, AccountId::new(51), dec!(10)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Selected credit account not found.");
}

#[tokio::test]
async fn test_duplicate_journal_number_rejected() {
    let svc = service();
    let cash = add_account(&svc, "1000").await;
    let revenue = add_account(&svc, "4000").await;

    let added = svc
        .add_journal_entry(&actor(), journal_input("JE-1", cash, revenue, dec!(100)))
        .await
        .unwrap();
    assert_eq!(
        added.message,
        "Journal Entry ($100.00) has been successfully added!"
    );

    let err = svc
        .add_journal_entry(&actor(), journal_input("JE-1", revenue, cash, dec!(5)))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Journal number 'JE-1' already exists.");
}

#[tokio::test]
async fn test_journal_lines_reference_entry_and_account() {
    let svc = service();
    let cash = add_account(&svc, "1000").await;
    let revenue = add_account(&svc, "4000").await;
    let entry = svc
        .add_journal_entry(&actor(), journal_input("JE-1", cash, revenue, dec!(100)))
        .await
        .unwrap()
        .record
        .unwrap();

    let err = svc
        .add_journal_line(
            &actor(),
            JournalLineInput {
                journal_entry_id: Some(JournalEntryId::new(77)),
                account_id: Some(cash),
                debit: dec!(100),
                ..JournalLineInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Selected journal entry not found.");

    let err = svc
        .add_journal_line(
            &actor(),
            JournalLineInput {
                journal_entry_id: Some(entry.id),
                account_id: Some(AccountId::new(77)),
                debit: dec!(100),
                ..JournalLineInput::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Selected account not found.");

    let line = svc
        .add_journal_line(
            &actor(),
            JournalLineInput {
                journal_entry_id: Some(entry.id),
                account_id: Some(cash),
                debit: dec!(100),
                ..JournalLineInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(line.message, "Journal line added.");
    assert_eq!(line.record.unwrap().net_amount, dec!(100));
}

#[tokio::test]
async fn test_deleting_journal_entry_keeps_lines() {
    let svc = service();
    let cash = add_account(&svc, "1000").await;
    let revenue = add_account(&svc, "4000").await;
    let entry = svc
        .add_journal_entry(&actor(), journal_input("JE-1", cash, revenue, dec!(100)))
        .await
        .unwrap()
        .record
        .unwrap();
    svc.add_journal_line(
        &actor(),
        JournalLineInput {
            journal_entry_id: Some(entry.id),
            account_id: Some(revenue),
            credit: dec!(100),
            ..JournalLineInput::default()
        },
    )
    .await
    .unwrap();

    let deleted = svc.delete_journal_entry(&actor(), entry.id).await.unwrap();
    assert_eq!(deleted.message, "Journal Entry 'JE-1' has been deleted.");
    assert!(deleted.record.is_none());

    let lines = svc
        .list_journal_lines(&JournalLineFilter::default())
        .await
        .unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].journal_entry_id, entry.id);
}

// ========== Tax rates ==========

#[tokio::test]
async fn test_tax_rate_percentage_and_uniqueness() {
    let svc = service();
    let input = TaxRateInput {
        tax_code: "SALES".to_string(),
        percentage: dec!(8),
        ..TaxRateInput::default()
    };
    let added = svc.add_tax_rate(&actor(), input.clone()).await.unwrap();
    assert_eq!(
        added.message,
        "Tax Rate 'SALES' (8%) has been successfully added!"
    );
    assert_eq!(added.record.unwrap().rate, dec!(0.08));

    let err = svc.add_tax_rate(&actor(), input).await.unwrap_err();
    assert_eq!(err.to_string(), "Tax code 'SALES' already exists.");
}

#[tokio::test]
async fn test_edit_tax_rate_does_not_recheck_own_code() {
    let svc = service();
    let tax = svc
        .add_tax_rate(
            &actor(),
            TaxRateInput {
                tax_code: "VAT".to_string(),
                percentage: dec!(20),
                ..TaxRateInput::default()
            },
        )
        .await
        .unwrap()
        .record
        .unwrap();

    let edited = svc
        .edit_tax_rate(
            &actor(),
            tax.id,
            TaxRateInput {
                tax_code: "VAT".to_string(),
                percentage: dec!(17.5),
                ..TaxRateInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.record.unwrap().rate, dec!(0.175));
}

// ========== Deletes ==========

#[tokio::test]
async fn test_delete_missing_reports_not_found_for_every_collection() {
    let svc = service();
    let who = actor();
    let errors = [
        svc.delete_account(&who, AccountId::new(1)).await.unwrap_err(),
        svc.delete_partner(&who, PartnerId::new(1)).await.unwrap_err(),
        svc.delete_invoice(&who, InvoiceId::new(1)).await.unwrap_err(),
        svc.delete_invoice_line(&who, InvoiceLineId::new(1))
            .await
            .unwrap_err(),
        svc.delete_open_balance(&who, OpenBalanceId::new(1))
            .await
            .unwrap_err(),
        svc.delete_payment(&who, PaymentId::new(1)).await.unwrap_err(),
        svc.delete_journal_entry(&who, JournalEntryId::new(1))
            .await
            .unwrap_err(),
        svc.delete_journal_line(&who, JournalLineId::new(1))
            .await
            .unwrap_err(),
        svc.delete_tax_rate(&who, TaxRateId::new(1)).await.unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!err.is_system());
    }
}

#[tokio::test]
async fn test_delete_partner_then_not_found() {
    let svc = service();
    let partner = add_partner(&svc, "Globex").await;

    let removed = svc.delete_partner(&actor(), partner).await.unwrap();
    assert_eq!(removed.message, "Partner 'Globex' has been deleted.");

    let err = svc.delete_partner(&actor(), partner).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Partner {partner} was not found."));
}
