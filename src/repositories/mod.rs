//! Repository layer for database operations.
//!
//! Repositories translate between the domain model in [`crate::domain`] and
//! the SeaORM entities in [`crate::entities`], following the Data Mapper
//! pattern: entities stay pure row definitions, domain types stay free of
//! persistence concerns, and every read or write goes through a repository.

use async_trait::async_trait;

use crate::error::RepositoryResult;

pub mod customer;
pub mod order;
pub mod product;

pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;

/// Capability set shared by every aggregate repository.
///
/// Each call is an independent unit of work. Implementations hold nothing
/// but a connection handle, so they can be cloned and shared freely.
#[async_trait]
pub trait Repository<T: Send + Sync>: Send + Sync {
    /// Persist a new aggregate.
    async fn create(&self, entity: &T) -> RepositoryResult<()>;

    /// Write the aggregate's current state over the stored one.
    async fn update(&self, entity: &T) -> RepositoryResult<()>;

    /// Load one aggregate by id.
    ///
    /// # Errors
    /// Returns [`crate::error::RepositoryError::NotFound`] if no row matches.
    async fn find(&self, id: &str) -> RepositoryResult<T>;

    /// Load every stored aggregate.
    async fn find_all(&self) -> RepositoryResult<Vec<T>>;
}
