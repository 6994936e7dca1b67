use std::sync::Arc;

use crate::{
    AppState, PaginationConfig,
    customer::{Customer, CustomerData, CustomerId, Transaction, TransactionId},
};

/// The example data set: Alice has two transactions and Bob has one.
pub(crate) const EXAMPLE_ASSET: &str = r#"{
    "customers": [
        { "id": 1, "name": "Alice" },
        { "id": 2, "name": "Bob" }
    ],
    "transactions": [
        { "id": 1, "customer_id": 1, "date": "2024-01-01", "amount": 10 },
        { "id": 2, "customer_id": 1, "date": "2024-01-02", "amount": 5 },
        { "id": 3, "customer_id": 2, "date": "2024-01-01", "amount": 20 }
    ]
}"#;

pub(crate) fn customer(id: CustomerId, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_owned(),
    }
}

pub(crate) fn transaction(
    id: TransactionId,
    customer_id: CustomerId,
    date: &str,
    amount: f64,
) -> Transaction {
    Transaction {
        id,
        customer_id,
        date: date.to_owned(),
        amount,
    }
}

pub(crate) fn example_customers() -> Vec<Customer> {
    vec![customer(1, "Alice"), customer(2, "Bob")]
}

pub(crate) fn example_transactions() -> Vec<Transaction> {
    vec![
        transaction(1, 1, "2024-01-01", 10.0),
        transaction(2, 1, "2024-01-02", 5.0),
        transaction(3, 2, "2024-01-01", 20.0),
    ]
}

pub(crate) fn example_data() -> Arc<CustomerData> {
    Arc::new(CustomerData::new(example_customers(), example_transactions()))
}

/// `count` customers named "Customer 1", "Customer 2", ... each with one transaction of `id` dollars.
pub(crate) fn numbered_data(count: i64) -> Arc<CustomerData> {
    let customers = (1..=count)
        .map(|id| customer(id, &format!("Customer {id}")))
        .collect();
    let transactions = (1..=count)
        .map(|id| transaction(id, id, "2024-02-01", id as f64))
        .collect();

    Arc::new(CustomerData::new(customers, transactions))
}

pub(crate) fn example_state() -> AppState {
    AppState::new(example_data(), PaginationConfig::default())
}
