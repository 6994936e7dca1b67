//! Selecting a single customer for the detail table and the chart.
//!
//! The page shows at most one selected customer at a time. Selecting a
//! customer always re-derives their transactions from the full data set and
//! replaces whatever was shown before. Selecting an unknown customer is an
//! error, which the handlers turn into a response that leaves the page as it
//! was.

use crate::{
    Error,
    customer::core::{Customer, CustomerData, CustomerId, Transaction},
};

/// A customer and their transactions, in asset order.
#[derive(Debug, PartialEq)]
pub struct CustomerSelection<'a> {
    pub customer: &'a Customer,
    pub transactions: Vec<&'a Transaction>,
}

/// Look up `customer_id` and collect the customer's transactions.
///
/// # Errors
/// Returns [Error::CustomerNotFound] if no customer has the ID `customer_id`.
pub fn select_customer(
    data: &CustomerData,
    customer_id: CustomerId,
) -> Result<CustomerSelection<'_>, Error> {
    let customer = data
        .customers()
        .iter()
        .find(|customer| customer.id == customer_id)
        .ok_or(Error::CustomerNotFound(customer_id))?;

    let transactions = data
        .transactions()
        .iter()
        .filter(|transaction| transaction.customer_id == customer_id)
        .collect();

    Ok(CustomerSelection {
        customer,
        transactions,
    })
}
