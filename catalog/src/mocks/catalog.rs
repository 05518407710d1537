//! Mock collection gateway.

use crate::error::GatewayError;
use crate::providers::ShopCatalogGateway;
use crate::types::{ShopPage, ShopQuery};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// One scripted reply
#[derive(Debug, Clone)]
struct Scripted {
    result: Result<ShopPage, GatewayError>,
    delay: Duration,
}

/// Mock collection gateway.
///
/// Replies are scripted per call with [`MockCatalogGateway::enqueue_ok`] /
/// [`MockCatalogGateway::enqueue_err`]; once the script runs out, every call
/// returns the default page. Each call records its query for assertions, and
/// an optional per-reply delay lets tests overlap in-flight fetches.
#[derive(Debug, Clone)]
pub struct MockCatalogGateway {
    default_page: ShopPage,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    queries: Arc<Mutex<Vec<ShopQuery>>>,
}

impl MockCatalogGateway {
    /// Create a mock that answers every call with an empty single page
    #[must_use]
    pub fn new() -> Self {
        Self::with_page(ShopPage::empty())
    }

    /// Create a mock whose default reply is the given page
    #[must_use]
    pub fn with_page(default_page: ShopPage) -> Self {
        Self {
            default_page,
            script: Arc::new(Mutex::new(VecDeque::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the next un-scripted call to succeed with `page`
    pub fn enqueue_ok(&self, page: ShopPage) {
        self.enqueue_ok_after(page, Duration::ZERO);
    }

    /// Script a success that settles only after `delay`
    pub fn enqueue_ok_after(&self, page: ShopPage, delay: Duration) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Scripted {
                result: Ok(page),
                delay,
            });
    }

    /// Script the next un-scripted call to fail with `error`
    pub fn enqueue_err(&self, error: GatewayError) {
        self.enqueue_err_after(error, Duration::ZERO);
    }

    /// Script a failure that settles only after `delay`
    pub fn enqueue_err_after(&self, error: GatewayError, delay: Duration) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Scripted {
                result: Err(error),
                delay,
            });
    }

    /// Every query received so far, in call order
    #[must_use]
    pub fn queries(&self) -> Vec<ShopQuery> {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many calls have been received
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for MockCatalogGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopCatalogGateway for MockCatalogGateway {
    fn fetch_shops(
        &self,
        query: ShopQuery,
    ) -> impl Future<Output = Result<ShopPage, GatewayError>> + Send {
        self.queries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query);

        let scripted = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Scripted {
                result: Ok(self.default_page.clone()),
                delay: Duration::ZERO,
            });

        async move {
            if !scripted.delay.is_zero() {
                tokio::time::sleep(scripted.delay).await;
            }
            scripted.result
        }
    }
}
