//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{customer::CustomerData, pagination::PaginationConfig};

/// The state of the server.
///
/// The customer data is loaded once at startup and never changes, so it is
/// shared between requests without a lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The customers, transactions and per-customer totals.
    pub customer_data: Arc<CustomerData>,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] from already loaded customer data.
    pub fn new(customer_data: Arc<CustomerData>, pagination_config: PaginationConfig) -> Self {
        Self {
            customer_data,
            pagination_config,
        }
    }
}
