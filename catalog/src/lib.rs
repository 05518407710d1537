//! # Shopgrid Catalog
//!
//! The shop catalog browsing feature: a paginated, filterable list view
//! backed by a remote API.
//!
//! The heart of the crate is the list-view controller, expressed as a
//! [`CatalogReducer`] over [`CatalogState`]: filter values, pagination,
//! loading/error state, and the creation modal flag all live in one record
//! and change only through [`CatalogAction`]s. Fetches run as effects
//! against the [`providers::ShopCatalogGateway`]; responses apply in trigger
//! order (last-triggered-wins), so a slow stale response can never overwrite
//! a newer page.
//!
//! ## Example
//!
//! ```ignore
//! use shopgrid_catalog::{CatalogAction, CatalogEnvironment, CatalogReducer, CatalogState};
//! use shopgrid_core::environment::SystemClock;
//! use shopgrid_runtime::Store;
//! use std::sync::Arc;
//!
//! let env = CatalogEnvironment::new(catalog_gateway, creation_gateway, Arc::new(SystemClock));
//! let store = Store::new(CatalogState::new(), CatalogReducer::new(), env);
//!
//! store.send(CatalogAction::Started).await?;
//! ```

/// Actions processed by the list-view controller
pub mod actions;
/// Catalog environment (injected gateways and clock)
pub mod environment;
/// Error types for gateways and creation-payload validation
pub mod error;
/// Mock gateways for tests and demos
pub mod mocks;
/// Gateway traits
pub mod providers;
/// Transition logic
pub mod reducer;
/// List-view state record
pub mod state;
/// Domain types (filters, pagination, shops)
pub mod types;

pub use actions::CatalogAction;
pub use environment::CatalogEnvironment;
pub use error::{GatewayError, ShopValidationError};
pub use reducer::CatalogReducer;
pub use state::{CatalogState, FetchState, LoadPhase, PaginationState};
pub use types::{
    FilterField, FilterKey, FilterSet, InputKind, NewShop, PageSize, Product, Shop, ShopId,
    ShopPage, ShopQuery,
};
