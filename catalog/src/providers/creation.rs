//! Shop creation gateway trait.

use crate::error::GatewayError;
use crate::types::NewShop;

/// Shop creation gateway.
///
/// Issues a create request for a new shop. The payload is validated by the
/// creation form before it gets here; the gateway just transports it.
pub trait ShopCreationGateway: Send + Sync {
    /// Create a new shop
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the server does not answer with
    /// created-resource semantics. Creation failures are surfaced by the
    /// creation form alone and never reach list-view state.
    fn create_shop(
        &self,
        shop: NewShop,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;
}
