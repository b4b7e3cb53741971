//! Repository abstractions for data access.
//!
//! Each ledger table gets a repository implementing the core store contract,
//! so the ledger service never sees `SeaORM` types. Database failures are
//! translated into [`StoreError`] here and nowhere else.

use rxerp_core::ledger::{Collection, StoreError};
use sea_orm::{DbErr, SqlErr};
use tracing::warn;

/// Implements the ledger store contract for one table.
///
/// The invoking module provides `to_record`, `to_active` and `select` for its
/// entity and brings `ActiveModelTrait`, `EntityTrait` and `QueryFilter` into
/// scope.
macro_rules! ledger_repository {
    ($(#[$meta:meta])* $repo:ident, $record:ty, $table:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $repo {
            db: sea_orm::DatabaseConnection,
        }

        impl $repo {
            /// Creates a new repository.
            #[must_use]
            pub const fn new(db: sea_orm::DatabaseConnection) -> Self {
                Self { db }
            }
        }

        #[async_trait::async_trait]
        impl rxerp_core::ledger::RecordStore<$record> for $repo {
            async fn find_by_id(
                &self,
                id: <$record as rxerp_core::ledger::Record>::Id,
            ) -> Result<Option<$record>, rxerp_core::ledger::StoreError> {
                let raw = rxerp_shared::types::SurrogateId::raw(id);
                let row = $table::Entity::find_by_id(raw)
                    .one(&self.db)
                    .await
                    .map_err(|e| $crate::repositories::store_error(
                        <$record as rxerp_core::ledger::Record>::COLLECTION,
                        None,
                        raw,
                        e,
                    ))?;
                Ok(row.map(to_record))
            }

            async fn list(
                &self,
                filter: &<$record as rxerp_core::ledger::Record>::Filter,
            ) -> Result<Vec<$record>, rxerp_core::ledger::StoreError> {
                let rows = select(filter).all(&self.db).await.map_err(|e| {
                    $crate::repositories::store_error(
                        <$record as rxerp_core::ledger::Record>::COLLECTION,
                        None,
                        0,
                        e,
                    )
                })?;
                Ok(rows.into_iter().map(to_record).collect())
            }

            async fn insert(
                &self,
                record: $record,
            ) -> Result<$record, rxerp_core::ledger::StoreError> {
                let model = to_active(&record).insert(&self.db).await.map_err(|e| {
                    $crate::repositories::store_error(
                        <$record as rxerp_core::ledger::Record>::COLLECTION,
                        rxerp_core::ledger::Record::business_key(&record),
                        0,
                        e,
                    )
                })?;
                Ok(to_record(model))
            }

            async fn update(
                &self,
                record: &$record,
            ) -> Result<(), rxerp_core::ledger::StoreError> {
                let raw = rxerp_shared::types::SurrogateId::raw(
                    rxerp_core::ledger::Record::id(record),
                );
                to_active(record).update(&self.db).await.map_err(|e| {
                    $crate::repositories::store_error(
                        <$record as rxerp_core::ledger::Record>::COLLECTION,
                        rxerp_core::ledger::Record::business_key(record),
                        raw,
                        e,
                    )
                })?;
                Ok(())
            }

            async fn delete(
                &self,
                id: <$record as rxerp_core::ledger::Record>::Id,
            ) -> Result<bool, rxerp_core::ledger::StoreError> {
                let raw = rxerp_shared::types::SurrogateId::raw(id);
                let result = $table::Entity::delete_by_id(raw)
                    .exec(&self.db)
                    .await
                    .map_err(|e| $crate::repositories::store_error(
                        <$record as rxerp_core::ledger::Record>::COLLECTION,
                        None,
                        raw,
                        e,
                    ))?;
                Ok(result.rows_affected > 0)
            }
        }
    };

    ($(#[$meta:meta])* $repo:ident, $record:ty, $table:ident, key = $column:ident) => {
        ledger_repository!($(#[$meta])* $repo, $record, $table);

        #[async_trait::async_trait]
        impl rxerp_core::ledger::KeyedStore<$record> for $repo {
            async fn find_by_key(
                &self,
                key: &str,
            ) -> Result<Option<$record>, rxerp_core::ledger::StoreError> {
                let row = $table::Entity::find()
                    .filter($table::Column::$column.eq(key))
                    .one(&self.db)
                    .await
                    .map_err(|e| $crate::repositories::store_error(
                        <$record as rxerp_core::ledger::Record>::COLLECTION,
                        Some(key),
                        0,
                        e,
                    ))?;
                Ok(row.map(to_record))
            }
        }
    };
}

pub mod accounts;
pub mod balances;
pub mod invoice_lines;
pub mod invoices;
pub mod journal_entries;
pub mod journal_lines;
pub mod partners;
pub mod payments;
pub mod session;
pub mod store;
pub mod tax;

pub use accounts::AccountRepository;
pub use balances::OpenBalanceRepository;
pub use invoice_lines::InvoiceLineRepository;
pub use invoices::InvoiceRepository;
pub use journal_entries::JournalEntryRepository;
pub use journal_lines::JournalLineRepository;
pub use partners::PartnerRepository;
pub use payments::PaymentRepository;
pub use session::{SessionError, SessionRepository};
pub use store::PostgresLedgerStore;
pub use tax::TaxRateRepository;

/// Translates a database failure into the store contract's error.
pub(crate) fn store_error(
    collection: Collection,
    key: Option<&str>,
    id: i32,
    err: DbErr,
) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        warn!(%collection, %detail, "Unique constraint violated");
        return StoreError::UniqueViolation {
            collection,
            key: key.unwrap_or_default().to_string(),
        };
    }

    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
            StoreError::Missing { collection, id }
        }
        other => StoreError::Unavailable(other.to_string()),
    }
}
