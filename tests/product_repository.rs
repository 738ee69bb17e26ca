mod common;

use order_store::{LocalStorage, Product, Repository, RepositoryError};

#[tokio::test]
async fn test_create_and_find_product() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let products = storage.products();

    let product = common::product();
    products.create(&product).await.unwrap();

    assert_eq!(products.find("123").await.unwrap(), product);
}

#[tokio::test]
async fn test_update_product() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let products = storage.products();

    let mut product = common::product();
    products.create(&product).await.unwrap();

    product.change_name("Product 1 bis");
    product.change_price(12.5);
    products.update(&product).await.unwrap();

    assert_eq!(products.find("123").await.unwrap(), product);
}

#[tokio::test]
async fn test_create_duplicate_product_fails() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let products = storage.products();

    products.create(&common::product()).await.unwrap();
    let result = products.create(&Product::new("123", "Other", 1.0)).await;

    assert!(matches!(result, Err(RepositoryError::Database(_))));
}

#[tokio::test]
async fn test_find_all_products() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let products = storage.products();

    let first = Product::new("1", "Product 1", 10.0);
    let second = Product::new("2", "Product 2", 20.0);
    products.create(&second).await.unwrap();
    products.create(&first).await.unwrap();

    assert_eq!(products.find_all().await.unwrap(), vec![first, second]);
    assert!(products.find("3").await.unwrap_err().is_not_found());
}
