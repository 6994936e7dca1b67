//! Defines the route handlers for the customer list.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::header::VARY,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;

use crate::{AppState, pagination::PaginationConfig};

use super::{
    aggregation::CustomerTotal,
    core::CustomerData,
    query::{CustomerListParams, CustomerListQuery, select_page},
    view::{customer_list_view, customer_table_view},
};

/// The state needed for the customer list page.
#[derive(Debug, Clone)]
pub struct CustomerListState {
    pub customer_data: Arc<CustomerData>,
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for CustomerListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            customer_data: state.customer_data.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render the customer list.
///
/// htmx requests only get the table so the filter input keeps its focus
/// and the detail table and chart stay on the page. The response varies on
/// `HX-Request` so caches keep the page and the table apart.
pub async fn get_customer_list_page(
    State(state): State<CustomerListState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<CustomerListParams>,
) -> Response {
    let query = CustomerListQuery::from_params(params, &state.pagination_config);
    let page = select_page(state.customer_data.totals(), &query);
    if page.window.page != query.page() {
        tracing::debug!(
            "Page {} is out of range, showing page {} of {}",
            query.page(),
            page.window.page,
            page.window.page_count
        );
    }

    let markup = if is_htmx {
        customer_table_view(&page, &query, &state.pagination_config)
    } else {
        customer_list_view(&page, &query, &state.pagination_config)
    };

    ([(VARY, "HX-Request")], markup).into_response()
}

/// The aggregated customer rows as JSON, in asset order.
pub async fn get_customers_json(State(state): State<CustomerListState>) -> Json<Vec<CustomerTotal>> {
    Json(state.customer_data.totals().to_vec())
}
