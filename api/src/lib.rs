//! # Shopgrid API
//!
//! REST client for the shop catalog service.
//!
//! [`ShopApiClient`] speaks the server's wire protocol (the camelCase
//! success envelope on `GET /shops`, created-resource semantics on
//! `POST /shops`) and implements the catalog feature's gateway traits, so
//! it slots straight into a [`CatalogEnvironment`].
//!
//! [`CatalogEnvironment`]: shopgrid_catalog::CatalogEnvironment
//!
//! ## Example
//!
//! ```no_run
//! use shopgrid_api::ShopApiClient;
//!
//! # fn main() -> Result<(), shopgrid_api::ShopApiError> {
//! // Reads SHOPGRID_API_URL
//! let client = ShopApiClient::from_env()?;
//! # Ok(())
//! # }
//! ```

/// Client implementation
pub mod client;
/// Error types
pub mod error;
/// Wire DTOs
pub mod types;

pub use client::{BASE_URL_ENV, ShopApiClient};
pub use error::ShopApiError;
pub use types::{PaginationMeta, ShopsEnvelope, ShopsPayload};
