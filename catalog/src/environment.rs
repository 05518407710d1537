//! Catalog environment.
//!
//! All external dependencies of the list-view controller, injected behind
//! traits so tests can swap in mocks.

use crate::providers::{ShopCatalogGateway, ShopCreationGateway};
use shopgrid_core::environment::Clock;
use std::sync::Arc;

/// Dependencies injected into the catalog reducer.
///
/// # Type Parameters
///
/// - `G`: remote collection gateway
/// - `C`: shop creation gateway
#[derive(Clone)]
pub struct CatalogEnvironment<G, C>
where
    G: ShopCatalogGateway + Clone,
    C: ShopCreationGateway + Clone,
{
    /// Remote collection gateway
    pub catalog: G,

    /// Shop creation gateway
    pub creation: C,

    /// Clock for stamping successful loads
    pub clock: Arc<dyn Clock>,
}

impl<G, C> CatalogEnvironment<G, C>
where
    G: ShopCatalogGateway + Clone,
    C: ShopCreationGateway + Clone,
{
    /// Create a new catalog environment
    #[must_use]
    pub fn new(catalog: G, creation: C, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            creation,
            clock,
        }
    }
}
