use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::config::DatabaseConfig;
use crate::entities::{customer, order, order_item, product};
use crate::repositories::{CustomerRepository, OrderRepository, ProductRepository};

/// Lifetime for the single in-memory connection; retiring it would drop the database
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 100);

/// Local storage manager for orders and the aggregates they reference
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Connect to the configured database and create any missing tables
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.file_path().as_deref().and_then(|path| path.parent()) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
            }
        }

        let conn = Database::connect(Self::connect_options(config))
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Fresh, empty in-memory `SQLite` database
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig::in_memory()).await
    }

    fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .sqlx_logging(config.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);

        if config.is_in_memory() {
            // Each connection to `:memory:` opens its own empty database
            options
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
        } else {
            options.max_connections(config.max_connections);
        }

        options
    }

    /// Initialize database schema from the entity definitions
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // Referenced tables first so foreign keys resolve
        let statements = [
            schema.create_table_from_entity(customer::Entity),
            schema.create_table_from_entity(product::Entity),
            schema.create_table_from_entity(order::Entity),
            schema.create_table_from_entity(order_item::Entity),
        ];

        for mut statement in statements {
            statement.if_not_exists();
            self.conn
                .execute(backend.build(&statement))
                .await
                .context("Failed to create database schema")?;
        }

        log::info!("Database schema ready");
        Ok(())
    }

    /// Raw connection handle
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.conn.clone())
    }

    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.conn.clone())
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.conn.clone())
    }
}
