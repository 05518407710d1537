//! Mock creation gateway.

use crate::error::GatewayError;
use crate::providers::ShopCreationGateway;
use crate::types::NewShop;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

/// Mock creation gateway.
///
/// Succeeds by default; flip [`MockCreationGateway::failing`] to simulate a
/// rejecting server. Accepted payloads are recorded for assertions.
#[derive(Debug, Clone)]
pub struct MockCreationGateway {
    should_succeed: bool,
    created: Arc<Mutex<Vec<NewShop>>>,
}

impl MockCreationGateway {
    /// Create a mock that accepts every payload
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_succeed: true,
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that rejects every payload
    #[must_use]
    pub fn failing() -> Self {
        Self {
            should_succeed: false,
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every payload the mock accepted, in call order
    #[must_use]
    pub fn created(&self) -> Vec<NewShop> {
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockCreationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopCreationGateway for MockCreationGateway {
    fn create_shop(&self, shop: NewShop) -> impl Future<Output = Result<(), GatewayError>> + Send {
        let accepted = self.should_succeed;
        if accepted {
            self.created
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(shop);
        }

        async move {
            if accepted {
                Ok(())
            } else {
                Err(GatewayError::Rejected("Failed to create shop.".into()))
            }
        }
    }
}
