#![allow(dead_code)]

use order_store::{Address, Customer, LocalStorage, Order, OrderItem, Product, Repository};

/// Fresh in-memory storage holding customer "123" and product "123" (price 10).
pub async fn storage_with_customer_and_product() -> LocalStorage {
    let storage = LocalStorage::in_memory().await.expect("storage should open");

    let mut customer = Customer::new("123", "Customer 1");
    customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1"));
    storage.customers().create(&customer).await.expect("customer should be created");

    storage
        .products()
        .create(&product())
        .await
        .expect("product should be created");

    storage
}

pub fn product() -> Product {
    Product::new("123", "Product 1", 10.0)
}

pub fn item(id: &str, quantity: u32) -> OrderItem {
    let product = product();
    OrderItem::new(id, product.name, product.price, product.id, quantity)
}

pub fn order(id: &str, items: Vec<OrderItem>) -> Order {
    Order::new(id, "123", items)
}
