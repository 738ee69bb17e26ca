//! Local storage module for order persistence
//!
//! This module owns the SeaORM connection and the schema for:
//! - Customers
//! - Products
//! - Orders
//! - Order items

pub mod db;

pub use db::LocalStorage;
