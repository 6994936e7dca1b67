//! Per-customer transaction totals.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::customer::core::{Customer, CustomerId, Transaction};

/// A customer together with the sum of their transaction amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerTotal {
    /// The customer's ID.
    pub id: CustomerId,
    /// The customer's display name.
    pub name: String,
    /// The sum of the amounts of every transaction belonging to the customer.
    pub total_amount: f64,
}

/// Sums transaction amounts by customer.
///
/// Produces exactly one row per customer in `customers`, in the same order.
/// Customers without transactions get a total of zero. Transactions whose
/// `customer_id` does not match any customer are left out of every total.
pub fn aggregate_customer_totals(
    customers: &[Customer],
    transactions: &[Transaction],
) -> Vec<CustomerTotal> {
    let mut sums: HashMap<CustomerId, f64> = HashMap::new();

    for transaction in transactions {
        *sums.entry(transaction.customer_id).or_insert(0.0) += transaction.amount;
    }

    customers
        .iter()
        .map(|customer| CustomerTotal {
            id: customer.id,
            name: customer.name.clone(),
            total_amount: sums.get(&customer.id).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Counts the transactions whose `customer_id` matches none of `customers`.
pub(super) fn count_orphaned_transactions(
    customers: &[Customer],
    transactions: &[Transaction],
) -> usize {
    let customer_ids: HashSet<CustomerId> = customers.iter().map(|customer| customer.id).collect();

    transactions
        .iter()
        .filter(|transaction| !customer_ids.contains(&transaction.customer_id))
        .count()
}
