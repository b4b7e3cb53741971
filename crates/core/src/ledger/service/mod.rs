//! Ledger operations service.
//!
//! Validates and applies every add, edit and delete against the store. Checks
//! run in a fixed order and the first failure aborts the operation:
//!
//! 1. Required fields are present and non-blank
//! 2. Numeric ranges hold and journal entries use two different accounts
//! 3. The business key is not taken (accounts, payments, journal entries, tax rates)
//! 4. Every referenced parent record exists
//!
//! Edits look the target up before validating. Deletes never cascade: child
//! rows keep pointing at the removed parent.
//!
//! Multi-step operations issue sequential store calls without a transaction.
//! A uniqueness check can race a concurrent insert; the store's own unique
//! constraint then rejects the loser as a duplicate key.

mod accounts;
mod balances;
mod invoices;
mod journal;
mod partners;
mod payments;
mod tax;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rxerp_shared::types::SurrogateId;

use super::error::LedgerError;
use super::outcome::Mutation;
use super::store::{KeyedStore, LedgerStore, Record, RecordStore};

/// Validation and mutation for the ledger collections.
#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
}

impl std::fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerService").finish_non_exhaustive()
    }
}

impl LedgerService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &dyn LedgerStore {
        self.store.as_ref()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }
}

/// Loads an edit or delete target.
async fn load<R: Record>(store: &dyn RecordStore<R>, id: R::Id) -> Result<R, LedgerError> {
    store
        .find_by_id(id)
        .await?
        .ok_or(LedgerError::NotFound {
            collection: R::COLLECTION,
            id: id.raw(),
        })
}

/// Loads a referenced parent record.
async fn require<R: Record>(
    store: &dyn RecordStore<R>,
    id: Option<R::Id>,
    reference: &'static str,
) -> Result<R, LedgerError> {
    let missing = |raw| LedgerError::ReferenceNotFound { reference, id: raw };
    let Some(id) = id else {
        return Err(missing(0));
    };
    store.find_by_id(id).await?.ok_or_else(|| missing(id.raw()))
}

/// Fails if another record already uses the business key.
async fn ensure_key_free<R: Record>(
    store: &dyn KeyedStore<R>,
    key: &str,
    except: Option<R::Id>,
) -> Result<(), LedgerError> {
    match store.find_by_key(key).await? {
        Some(existing) if Some(existing.id()) != except => Err(LedgerError::DuplicateKey {
            field: R::COLLECTION.business_key_label().unwrap_or("Key"),
            value: key.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Removes a previously loaded record.
async fn remove<R: Record>(
    store: &dyn RecordStore<R>,
    record: &R,
    message: String,
) -> Result<Mutation<R>, LedgerError> {
    if store.delete(record.id()).await? {
        Ok(Mutation::removed(message))
    } else {
        Err(LedgerError::NotFound {
            collection: R::COLLECTION,
            id: record.id().raw(),
        })
    }
}

#[cfg(test)]
mod tests;
