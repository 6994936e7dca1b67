//! The customer and transaction models and loading them from the data asset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    customer::aggregation::{CustomerTotal, aggregate_customer_totals, count_orphaned_transactions},
};

/// The ID of a customer in the data asset.
pub type CustomerId = i64;

/// The ID of a transaction in the data asset.
pub type TransactionId = i64;

/// A customer as it appears in the data asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// The customer's ID, unique among customers.
    pub id: CustomerId,
    /// The customer's display name.
    pub name: String,
}

/// A transaction as it appears in the data asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction's ID, unique among transactions.
    pub id: TransactionId,
    /// The ID of the customer the transaction belongs to.
    pub customer_id: CustomerId,
    /// The date of the transaction exactly as written in the asset, e.g. "2024-01-01".
    pub date: String,
    /// The transaction amount.
    pub amount: f64,
}

/// The shape of the JSON data asset.
#[derive(Debug, Default, Deserialize)]
struct DataAsset {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
}

/// The customers and transactions loaded from the data asset, plus the
/// per-customer totals computed once at load time.
#[derive(Debug, Default, PartialEq)]
pub struct CustomerData {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    totals: Vec<CustomerTotal>,
}

impl CustomerData {
    /// Create the data set and aggregate the totals for each customer.
    pub fn new(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        let orphaned_count = count_orphaned_transactions(&customers, &transactions);
        if orphaned_count > 0 {
            tracing::warn!(
                "{orphaned_count} transaction(s) reference a customer that does not exist \
                and are excluded from all totals"
            );
        }

        let totals = aggregate_customer_totals(&customers, &transactions);

        Self {
            customers,
            transactions,
            totals,
        }
    }

    /// Parse a data set from the JSON text of the data asset.
    ///
    /// # Errors
    /// Returns [Error::InvalidDataAsset] if `json` does not match the asset format.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let asset: DataAsset = serde_json::from_str(json)?;

        Ok(Self::new(asset.customers, asset.transactions))
    }

    /// All customers in asset order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All transactions in asset order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// One row per customer, in the same order as [CustomerData::customers].
    pub fn totals(&self) -> &[CustomerTotal] {
        &self.totals
    }
}

/// Read and parse the data asset at `path`.
///
/// # Errors
/// Returns [Error::DataAssetUnreadable] if the file cannot be read and
/// [Error::InvalidDataAsset] if its contents are not a valid data asset.
pub async fn load_customer_data(path: impl AsRef<Path>) -> Result<CustomerData, Error> {
    let path = path.as_ref();

    let json = tokio::fs::read_to_string(path).await.map_err(|error| {
        Error::DataAssetUnreadable(path.display().to_string(), error.to_string())
    })?;

    let data = CustomerData::from_json(&json)?;
    tracing::info!(
        "Loaded {} customers and {} transactions from {}",
        data.customers.len(),
        data.transactions.len(),
        path.display()
    );

    Ok(data)
}
