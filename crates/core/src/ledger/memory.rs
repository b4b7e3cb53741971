//! In-memory ledger store.
//!
//! Backs the tests and the `memory` storage backend. Business keys are
//! claimed atomically on insert and update, so two racing inserts with the
//! same key cannot both succeed, mirroring a database `UNIQUE` constraint.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rxerp_shared::types::SurrogateId;

use super::records::{
    Account, Invoice, InvoiceLine, JournalEntry, JournalLine, OpenBalance, Partner, Payment,
    TaxRate,
};
use super::store::{KeyedStore, LedgerStore, Record, RecordStore, StoreError};

/// One collection held in memory.
#[derive(Debug)]
pub struct MemoryCollection<R: Record> {
    rows: DashMap<i32, R>,
    keys: DashMap<String, i32>,
    next_id: AtomicI32,
}

impl<R: Record> Default for MemoryCollection<R> {
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            keys: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }
}

impl<R: Record> MemoryCollection<R> {
    /// Returns the number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn claim_key(&self, key: &str, raw_id: i32) -> Result<(), StoreError> {
        match self.keys.entry(key.to_string()) {
            Entry::Occupied(existing) if *existing.get() != raw_id => {
                Err(StoreError::UniqueViolation {
                    collection: R::COLLECTION,
                    key: key.to_string(),
                })
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(raw_id);
                Ok(())
            }
        }
    }

    fn release_key(&self, key: &str, raw_id: i32) {
        self.keys.remove_if(key, |_, owner| *owner == raw_id);
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryCollection<R> {
    async fn find_by_id(&self, id: R::Id) -> Result<Option<R>, StoreError> {
        Ok(self.rows.get(&id.raw()).map(|row| row.value().clone()))
    }

    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError> {
        let mut rows: Vec<R> = self
            .rows
            .iter()
            .filter(|row| row.value().matches(filter))
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by(R::ordering);
        Ok(rows)
    }

    async fn insert(&self, mut record: R) -> Result<R, StoreError> {
        let raw_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if let Some(key) = record.business_key() {
            self.claim_key(key, raw_id)?;
        }
        record.set_id(R::Id::from_raw(raw_id));
        self.rows.insert(raw_id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &R) -> Result<(), StoreError> {
        let raw_id = record.id().raw();
        let Some(mut row) = self.rows.get_mut(&raw_id) else {
            return Err(StoreError::Missing {
                collection: R::COLLECTION,
                id: raw_id,
            });
        };

        let old_key = row.business_key().map(str::to_string);
        let new_key = record.business_key();
        if old_key.as_deref() != new_key {
            if let Some(key) = new_key {
                self.claim_key(key, raw_id)?;
            }
            if let Some(key) = old_key.as_deref() {
                self.release_key(key, raw_id);
            }
        }

        *row = record.clone();
        Ok(())
    }

    async fn delete(&self, id: R::Id) -> Result<bool, StoreError> {
        let raw_id = id.raw();
        match self.rows.remove(&raw_id) {
            Some((_, removed)) => {
                if let Some(key) = removed.business_key() {
                    self.release_key(key, raw_id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl<R: Record> KeyedStore<R> for MemoryCollection<R> {
    async fn find_by_key(&self, key: &str) -> Result<Option<R>, StoreError> {
        let Some(raw_id) = self.keys.get(key).map(|owner| *owner.value()) else {
            return Ok(None);
        };
        Ok(self.rows.get(&raw_id).map(|row| row.value().clone()))
    }
}

/// All nine collections held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: MemoryCollection<Account>,
    partners: MemoryCollection<Partner>,
    invoices: MemoryCollection<Invoice>,
    invoice_lines: MemoryCollection<InvoiceLine>,
    open_balances: MemoryCollection<OpenBalance>,
    payments: MemoryCollection<Payment>,
    journal_entries: MemoryCollection<JournalEntry>,
    journal_lines: MemoryCollection<JournalLine>,
    tax_rates: MemoryCollection<TaxRate>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn accounts(&self) -> &dyn KeyedStore<Account> {
        &self.accounts
    }

    fn partners(&self) -> &dyn RecordStore<Partner> {
        &self.partners
    }

    fn invoices(&self) -> &dyn RecordStore<Invoice> {
        &self.invoices
    }

    fn invoice_lines(&self) -> &dyn RecordStore<InvoiceLine> {
        &self.invoice_lines
    }

    fn open_balances(&self) -> &dyn RecordStore<OpenBalance> {
        &self.open_balances
    }

    fn payments(&self) -> &dyn KeyedStore<Payment> {
        &self.payments
    }

    fn journal_entries(&self) -> &dyn KeyedStore<JournalEntry> {
        &self.journal_entries
    }

    fn journal_lines(&self) -> &dyn RecordStore<JournalLine> {
        &self.journal_lines
    }

    fn tax_rates(&self) -> &dyn KeyedStore<TaxRate> {
        &self.tax_rates
    }
}
