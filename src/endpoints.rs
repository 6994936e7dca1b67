//! The route URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/customers/{customer_id}/chart', use [format_endpoint].

/// The root route which redirects to the customer list.
pub const ROOT: &str = "/";
/// The page listing every customer with their transaction totals.
pub const CUSTOMER_LIST_VIEW: &str = "/customerlist";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for the aggregated customer rows as JSON.
pub const CUSTOMERS_API: &str = "/api/customers";
/// The route for the transaction detail table of one customer.
pub const CUSTOMER_TRANSACTIONS: &str = "/api/customers/{customer_id}/transactions";
/// The route for the transaction chart of one customer.
pub const CUSTOMER_CHART: &str = "/api/customers/{customer_id}/chart";
/// The route that clears the transaction detail table.
pub const CLOSE_TRANSACTION_DETAILS: &str = "/api/transaction_details/close";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace and ends with a
/// right brace, e.g. '{customer_id}' in '/api/customers/{customer_id}/chart'.
/// Only the first parameter is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
