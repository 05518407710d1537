//! Wire types for the shop API.
//!
//! The server wraps collection responses in a success envelope; these
//! records mirror it field for field. Domain types (`Shop`, `Product`,
//! `NewShop`) come from the catalog crate and deserialize strictly, so a
//! drifting server schema fails loudly instead of rendering defaults.

use serde::{Deserialize, Serialize};
use shopgrid_catalog::Shop;

/// Envelope around every collection response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopsEnvelope {
    /// Server-side success flag; `false` means the request was rejected
    pub is_success: bool,
    /// Present on success
    #[serde(default)]
    pub data: Option<ShopsPayload>,
}

/// The paginated collection payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopsPayload {
    /// The shops on the requested page
    pub shops: Vec<Shop>,
    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata reported by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total pages for the query
    pub total_pages: u32,
}
