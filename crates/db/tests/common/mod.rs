//! Shared PostgreSQL fixture for integration tests.

use rxerp_db::migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::ContainerAsync;
use testcontainers_modules::testcontainers::runners::AsyncRunner;

/// A migrated database living as long as its container.
pub struct TestDb {
    pub db: DatabaseConnection,
    _container: ContainerAsync<Postgres>,
}

/// Starts PostgreSQL in Docker and applies every migration.
pub async fn migrated_db() -> TestDb {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start postgres container");
    let host = container.get_host().await.expect("Container host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Container port");

    let url = format!("postgres://postgres:postgres@{host}:{port}/postgres");
    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None).await.expect("Failed to migrate");

    TestDb {
        db,
        _container: container,
    }
}
