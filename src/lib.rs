//! order-store - Persistence for a checkout domain
//!
//! This library stores orders, the customers that place them and the
//! products they contain in a relational database through SeaORM, while
//! keeping the domain model free of persistence concerns.
//!
//! # Modules
//!
//! * [`domain`] - Orders, order items, customers and products
//! * [`entities`] - SeaORM table definitions
//! * [`repositories`] - Mapping between the two, one repository per aggregate
//! * [`storage`] - Connection and schema management
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Domain model, free of persistence annotations
pub mod domain;

/// SeaORM entity models for database tables
pub mod entities;

/// Repository and domain error types
pub mod error;

/// Logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Connection and schema management
pub mod storage;

pub use domain::{Address, Customer, Order, OrderItem, Product};
pub use error::{DomainError, RepositoryError, RepositoryResult};
pub use repositories::{CustomerRepository, OrderRepository, ProductRepository, Repository};
pub use storage::LocalStorage;
