use order_store::{Address, Customer, LocalStorage, Repository};

fn address() -> Address {
    Address::new("Street 1", 1, "Zipcode 1", "City 1")
}

#[tokio::test]
async fn test_create_and_find_customer() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let customers = storage.customers();

    let mut customer = Customer::new("123", "Customer 1");
    customer.change_address(address());
    customer.activate().unwrap();
    customer.add_reward_points(10);
    customers.create(&customer).await.unwrap();

    let found = customers.find("123").await.unwrap();
    assert_eq!(found, customer);
    assert!(found.active);
    assert_eq!(found.reward_points, 10);
}

#[tokio::test]
async fn test_customer_without_address_round_trips() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let customers = storage.customers();

    let customer = Customer::new("123", "Customer 1");
    customers.create(&customer).await.unwrap();

    let found = customers.find("123").await.unwrap();
    assert!(found.address.is_none());
    assert_eq!(found, customer);
}

#[tokio::test]
async fn test_update_customer() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let customers = storage.customers();

    let mut customer = Customer::new("123", "Customer 1");
    customers.create(&customer).await.unwrap();

    customer.change_name("Customer 2");
    customer.change_address(Address::new("Street 2", 2, "Zipcode 2", "City 2"));
    customers.update(&customer).await.unwrap();

    assert_eq!(customers.find("123").await.unwrap(), customer);
}

#[tokio::test]
async fn test_update_missing_customer_returns_not_found() {
    let storage = LocalStorage::in_memory().await.unwrap();

    let err = storage
        .customers()
        .update(&Customer::new("404", "Nobody"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_find_missing_customer_returns_not_found() {
    let storage = LocalStorage::in_memory().await.unwrap();

    let err = storage.customers().find("404").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Customer not found");
}

#[tokio::test]
async fn test_find_all_customers() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let customers = storage.customers();

    let first = Customer::new("1", "Customer 1");
    let mut second = Customer::new("2", "Customer 2");
    second.change_address(address());
    customers.create(&first).await.unwrap();
    customers.create(&second).await.unwrap();

    assert_eq!(customers.find_all().await.unwrap(), vec![first, second]);
}
