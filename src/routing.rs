//! Application router configuration.

use std::path::Path;

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    customer::{
        close_transaction_details, get_customer_list_page, get_customers_json,
        get_transaction_chart, get_transaction_details,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Files in `static_dir` are served under [endpoints::STATIC].
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::CUSTOMER_LIST_VIEW, get(get_customer_list_page))
        .route(endpoints::CUSTOMERS_API, get(get_customers_json))
        .route(endpoints::CUSTOMER_TRANSACTIONS, get(get_transaction_details))
        .route(endpoints::CUSTOMER_CHART, get(get_transaction_chart))
        .route(
            endpoints::CLOSE_TRANSACTION_DETAILS,
            get(close_transaction_details),
        )
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir.as_ref()))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the customer list page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::CUSTOMER_LIST_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_customer_list() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::CUSTOMER_LIST_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use std::io::Write;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        customer::test_utils::example_state, endpoints, routing::build_router,
        test_utils::assert_valid_html,
    };

    fn get_test_server() -> TestServer {
        let app = build_router(example_state(), "static/");

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn root_redirects_to_customer_list() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::CUSTOMER_LIST_VIEW);
    }

    #[tokio::test]
    async fn customer_list_page_renders() {
        let server = get_test_server();

        let response = server.get(endpoints::CUSTOMER_LIST_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        let title = Selector::parse("h1").unwrap();
        let heading = html.select(&title).next().expect("No heading found");
        assert_eq!(heading.text().collect::<String>().trim(), "Customers");
    }

    #[tokio::test]
    async fn customer_list_reads_query_params() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CUSTOMER_LIST_VIEW)
            .add_query_param("filter", "ali")
            .await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        let rows = Selector::parse("tr[data-customer-row='true']").unwrap();
        assert_eq!(html.select(&rows).count(), 1);
    }

    #[tokio::test]
    async fn invalid_query_param_is_rejected() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CUSTOMER_LIST_VIEW)
            .add_query_param("sort", "favourite_colour")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn customers_api_returns_json_totals() {
        let server = get_test_server();

        let response = server.get(endpoints::CUSTOMERS_API).await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!([
            {"id": 1, "name": "Alice", "total_amount": 15.0},
            {"id": 2, "name": "Bob", "total_amount": 20.0},
        ]));
    }

    #[tokio::test]
    async fn transaction_details_route_renders_fragment() {
        let server = get_test_server();

        let response = server.get("/api/customers/2/transactions").await;

        response.assert_status_ok();
        assert!(response.text().contains("Transactions for Bob"));
    }

    #[tokio::test]
    async fn unknown_customer_gets_no_content() {
        let server = get_test_server();

        server
            .get("/api/customers/42/transactions")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get("/api/customers/42/chart")
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn non_numeric_customer_id_is_rejected() {
        let server = get_test_server();

        let response = server.get("/api/customers/alice/chart").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn close_route_renders_empty_fragment() {
        let server = get_test_server();

        let response = server.get(endpoints::CLOSE_TRANSACTION_DETAILS).await;

        response.assert_status_ok();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_page() {
        let server = get_test_server();

        let response = server.get("/customers/everyone").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn serves_static_files() {
        let static_dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(static_dir.path().join("main.css")).unwrap();
        writeln!(file, "body {{ margin: 0; }}").unwrap();
        let server = TestServer::try_new(build_router(example_state(), static_dir.path()))
            .expect("Could not create test server.");

        let response = server.get("/static/main.css").await;

        response.assert_status_ok();
        assert_eq!(response.text(), "body { margin: 0; }\n");
    }
}
