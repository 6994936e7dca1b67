//! The transaction detail table shown below the customer list.

use std::sync::Arc;

use axum::extract::{FromRef, Path, State};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    customer::{
        core::{CustomerData, CustomerId},
        selection::{CustomerSelection, select_customer},
    },
    html::{
        BUTTON_SECONDARY_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

/// The ID of the element the detail table is swapped into.
pub(crate) const TRANSACTION_DETAILS_ID: &str = "transaction-details";

/// The state needed to look up a customer's transactions.
#[derive(Debug, Clone)]
pub struct SelectionState {
    pub customer_data: Arc<CustomerData>,
}

impl FromRef<AppState> for SelectionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            customer_data: state.customer_data.clone(),
        }
    }
}

/// Render the transaction table for one customer.
///
/// Responds with 204 No Content if the customer does not exist so htmx
/// leaves the current detail table in place.
pub async fn get_transaction_details(
    State(state): State<SelectionState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Markup, Error> {
    let selection = select_customer(&state.customer_data, customer_id)?;

    Ok(transaction_details_view(&selection))
}

/// Clear the transaction detail table.
///
/// The chart is left as is.
pub async fn close_transaction_details() -> Markup {
    html! {}
}

pub(crate) fn transaction_details_view(selection: &CustomerSelection) -> Markup {
    let close_target = format!("#{TRANSACTION_DETAILS_ID}");

    html! {
        section class="w-full space-y-2" data-customer-id=(selection.customer.id)
        {
            header class="flex justify-between items-end"
            {
                h2 class="text-lg font-semibold"
                {
                    "Transactions for " (selection.customer.name)
                }

                button
                    type="button"
                    hx-get=(endpoints::CLOSE_TRANSACTION_DETAILS)
                    hx-target=(close_target)
                    hx-swap="innerHTML"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Close"
                }
            }

            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Customer ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                    }
                }

                tbody
                {
                    @for transaction in &selection.transactions {
                        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.id) }
                            td class=(TABLE_CELL_STYLE) { (transaction.customer_id) }
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class={ (TABLE_CELL_STYLE) " text-right" } { (format_currency(transaction.amount)) }
                        }
                    }

                    @if selection.transactions.is_empty() {
                        tr
                        {
                            td colspan="4" data-empty-state="true" class="px-6 py-4 text-center"
                            {
                                "This customer has no transactions."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use scraper::Selector;

    use crate::{
        customer::{
            CustomerData,
            details::{SelectionState, close_transaction_details, get_transaction_details},
            test_utils::{customer, example_data},
        },
        test_utils::{assert_valid_html, parse_html_fragment, response_text},
    };

    fn state() -> SelectionState {
        SelectionState {
            customer_data: example_data(),
        }
    }

    fn cell_texts(html: &scraper::Html) -> Vec<Vec<String>> {
        let row_selector = Selector::parse("tr[data-transaction-row='true']").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        html.select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect()
            })
            .collect()
    }

    #[tokio::test]
    async fn shows_only_selected_customer_transactions() {
        let response = get_transaction_details(State(state()), Path(1))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(
            cell_texts(&html),
            [
                ["1", "1", "2024-01-01", "$10.00"],
                ["2", "1", "2024-01-02", "$5.00"],
            ]
        );
    }

    #[tokio::test]
    async fn selecting_another_customer_replaces_rows() {
        let response = get_transaction_details(State(state()), Path(2))
            .await
            .into_response();

        let html = parse_html_fragment(response).await;
        assert_eq!(cell_texts(&html), [["3", "2", "2024-01-01", "$20.00"]]);
    }

    #[tokio::test]
    async fn unknown_customer_responds_with_no_content() {
        let response = get_transaction_details(State(state()), Path(99))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response_text(response).await, "");
    }

    #[tokio::test]
    async fn customer_without_transactions_shows_empty_state() {
        let state = SelectionState {
            customer_data: Arc::new(CustomerData::new(vec![customer(5, "Erin")], vec![])),
        };

        let response = get_transaction_details(State(state), Path(5))
            .await
            .into_response();

        let html = parse_html_fragment(response).await;
        let empty_state = Selector::parse("td[data-empty-state='true']").unwrap();
        assert!(html.select(&empty_state).next().is_some());
    }

    #[tokio::test]
    async fn close_renders_empty_fragment() {
        let response = close_transaction_details().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_text(response).await, "");
    }
}
