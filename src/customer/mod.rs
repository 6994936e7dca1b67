//! Customers and their transactions.
//!
//! This module contains everything related to customers:
//! - The `Customer` and `Transaction` models and loading them from the JSON asset
//! - Aggregating transaction amounts into per-customer totals
//! - The customer list page with its filter, sort and pagination
//! - The transaction detail table and chart for a selected customer

mod aggregation;
mod chart;
mod core;
mod details;
mod list_page;
mod query;
mod selection;
mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use aggregation::{CustomerTotal, aggregate_customer_totals};
pub use chart::get_transaction_chart;
pub use core::{Customer, CustomerData, CustomerId, Transaction, TransactionId, load_customer_data};
pub use details::{close_transaction_details, get_transaction_details};
pub use list_page::{get_customer_list_page, get_customers_json};
