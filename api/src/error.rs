//! Error types for the shop API client.

use shopgrid_catalog::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to the shop API
#[derive(Debug, Error)]
pub enum ShopApiError {
    /// Missing `SHOPGRID_API_URL` environment variable
    #[error("Missing SHOPGRID_API_URL environment variable")]
    MissingBaseUrl,

    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded into the typed payload
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The server answered 200 but flagged the result as unsuccessful
    #[error("Failed to fetch shops.")]
    NotSuccessful,

    /// The server answered with an error status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the server
        message: String,
    },
}

// The controller renders gateway errors verbatim, so the mapping decides
// the user-visible wording.
impl From<ShopApiError> for GatewayError {
    fn from(error: ShopApiError) -> Self {
        match &error {
            ShopApiError::MissingBaseUrl | ShopApiError::RequestFailed(_) => {
                GatewayError::Transport(error.to_string())
            },
            ShopApiError::ResponseParseFailed(message) => GatewayError::Decode(message.clone()),
            ShopApiError::NotSuccessful | ShopApiError::ApiError { .. } => {
                GatewayError::Rejected(error.to_string())
            },
        }
    }
}
