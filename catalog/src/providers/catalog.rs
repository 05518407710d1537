//! Remote collection gateway trait.

use crate::error::GatewayError;
use crate::types::{ShopPage, ShopQuery};

/// Remote collection gateway.
///
/// Fetches one page of shops for the given filters, page number, and page
/// size. Implementations send only the non-empty filter values to the
/// server.
pub trait ShopCatalogGateway: Send + Sync {
    /// Fetch one page of shops
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] for transport failures, undecodable
    /// responses, and server-side rejections. The controller treats every
    /// variant the same way: surface the message, keep the previous results.
    fn fetch_shops(
        &self,
        query: ShopQuery,
    ) -> impl std::future::Future<Output = Result<ShopPage, GatewayError>> + Send;
}
