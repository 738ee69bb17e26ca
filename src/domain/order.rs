//! Order aggregate and its line items.

use serde::{Deserialize, Serialize};

/// A single line of an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub product_id: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// An order placed by a customer.
///
/// The order total is never stored on the aggregate, it is always derived
/// from the current items through [`Order::total`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(id: impl Into<String>, customer_id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        }
    }

    /// Sum of every line total.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Look up a line by its id.
    pub fn item(&self, item_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}
