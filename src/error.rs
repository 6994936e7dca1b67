//! Defines the app level error type and its conversion to rendered HTML pages.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{customer::CustomerId, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The data asset could not be read from disk.
    ///
    /// Callers should pass in the path of the asset and the original error as a string.
    #[error("could not read the data asset \"{0}\": {1}")]
    DataAssetUnreadable(String, String),

    /// The data asset was read but is not a valid customer/transaction document.
    #[error("could not parse the data asset: {0}")]
    InvalidDataAsset(String),

    /// No customer has the requested ID.
    #[error("no customer with the ID {0}")]
    CustomerNotFound(CustomerId),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidDataAsset(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // htmx does not swap 204 responses, so the page keeps showing the
            // previously selected customer.
            Error::CustomerNotFound(customer_id) => {
                tracing::warn!("Could not select customer {customer_id}: no such customer");
                StatusCode::NO_CONTENT.into_response()
            }
            error => {
                tracing::error!("{error}");
                InternalServerError {
                    description: "Customer Data Unavailable",
                    fix: "The customer data could not be loaded. Check the server logs and the data file.",
                }
                .into_response()
            }
        }
    }
}
