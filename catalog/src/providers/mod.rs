//! Gateway traits for the catalog feature.
//!
//! Gateways are pure I/O boundaries: they own no state and the controller
//! never sees transport details, only typed results.

mod catalog;
mod creation;

pub use catalog::ShopCatalogGateway;
pub use creation::ShopCreationGateway;
