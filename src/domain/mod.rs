//! Domain model for the checkout context.
//!
//! These types know nothing about persistence. Repositories in
//! [`crate::repositories`] map them to and from the SeaORM entities in
//! [`crate::entities`].

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Address, Customer};
pub use order::{Order, OrderItem};
pub use product::Product;
