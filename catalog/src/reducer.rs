//! Transition logic for the shop list view.
//!
//! The reducer is the only place list-view state changes. Fetches are
//! triggered by explicit events (start, submit, clear, shop created) and by
//! observable pagination transitions (page or size actually changing); a
//! filter edit alone never fetches. That asymmetry (edit is deferred,
//! submit is immediate) is the core UX contract.
//!
//! Every trigger stamps a fresh token and the matching feedback action
//! carries it back; a settled response whose token is no longer current is
//! discarded, so responses apply in trigger order no matter how they
//! interleave on the wire.

use crate::actions::CatalogAction;
use crate::environment::CatalogEnvironment;
use crate::providers::{ShopCatalogGateway, ShopCreationGateway};
use crate::state::CatalogState;
use crate::types::ShopQuery;
use shopgrid_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the shop list view
///
/// Generic over the gateway types so production clients and test mocks plug
/// in through the same environment.
#[derive(Debug, Clone, Copy)]
pub struct CatalogReducer<G, C> {
    _phantom: std::marker::PhantomData<(G, C)>,
}

impl<G, C> CatalogReducer<G, C> {
    /// Create a new catalog reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<G, C> Default for CatalogReducer<G, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, C> CatalogReducer<G, C>
where
    G: ShopCatalogGateway + Clone + 'static,
    C: ShopCreationGateway + Clone + 'static,
{
    /// Start a fetch for the state's current filters, page, and size.
    ///
    /// The query is captured from `state` *after* the caller's mutations, so
    /// a clear-then-fetch can never observe stale filter values. Returns the
    /// single gateway effect; its feedback action carries the new token.
    fn trigger_fetch(
        state: &mut CatalogState,
        env: &CatalogEnvironment<G, C>,
    ) -> SmallVec<[Effect<CatalogAction>; 4]> {
        state.request_seq += 1;
        let token = state.request_seq;
        state.fetch.loading = true;
        state.fetch.error = None;

        let query = ShopQuery {
            filters: state.filters.clone(),
            page: state.pagination.current_page,
            size: state.pagination.page_size,
        };
        tracing::debug!(token, page = query.page, size = %query.size, "fetching shops");

        let gateway = env.catalog.clone();
        smallvec![Effect::future(async move {
            match gateway.fetch_shops(query).await {
                Ok(page) => Some(CatalogAction::PageLoaded {
                    token,
                    shops: page.shops,
                    total_pages: page.total_pages,
                }),
                Err(error) => Some(CatalogAction::FetchFailed {
                    token,
                    message: error.to_string(),
                }),
            }
        })]
    }
}

impl<G, C> Reducer for CatalogReducer<G, C>
where
    G: ShopCatalogGateway + Clone + 'static,
    C: ShopCreationGateway + Clone + 'static,
{
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = CatalogEnvironment<G, C>;

    #[allow(clippy::too_many_lines)] // one arm per event
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CatalogAction::Started => Self::trigger_fetch(state, env),

            CatalogAction::FilterEdited { key, value } => {
                // Deferred: edits change the form only, submit issues the fetch
                state.filters.set(key, value);
                smallvec![Effect::None]
            },

            CatalogAction::FiltersSubmitted => {
                state.pagination.current_page = 1;
                Self::trigger_fetch(state, env)
            },

            CatalogAction::FiltersCleared => {
                // Reset and fetch atomically: the trigger reads the filters
                // just cleared, never an in-flight value
                state.filters.clear();
                state.pagination.current_page = 1;
                Self::trigger_fetch(state, env)
            },

            CatalogAction::PageSizeChanged { size } => {
                let before = (state.pagination.current_page, state.pagination.page_size);
                state.pagination.page_size = size;
                state.pagination.current_page = 1;

                if before == (1, size) {
                    // No observable pagination transition, so no fetch
                    smallvec![Effect::None]
                } else {
                    Self::trigger_fetch(state, env)
                }
            },

            CatalogAction::PageRequested { page } => {
                if page < 1 || page > state.pagination.total_pages {
                    tracing::debug!(
                        page,
                        total_pages = state.pagination.total_pages,
                        "ignoring out-of-range page request"
                    );
                    return smallvec![Effect::None];
                }
                if page == state.pagination.current_page {
                    return smallvec![Effect::None];
                }

                state.pagination.current_page = page;
                Self::trigger_fetch(state, env)
            },

            CatalogAction::CreateModalOpened => {
                state.create_modal_open = true;
                smallvec![Effect::None]
            },

            CatalogAction::CreateModalClosed => {
                state.create_modal_open = false;
                smallvec![Effect::None]
            },

            CatalogAction::ShopCreationRequested { shop } => {
                // The form validated the payload already; failures stay at
                // the form boundary and never touch list-view state
                let gateway = env.creation.clone();
                smallvec![Effect::future(async move {
                    match gateway.create_shop(shop).await {
                        Ok(()) => Some(CatalogAction::ShopCreated),
                        Err(error) => {
                            tracing::warn!(error = %error, "shop creation rejected");
                            None
                        },
                    }
                })]
            },

            CatalogAction::ShopCreated => {
                // Refetch the current filters and page so the new shop shows
                // up without moving the user; the page is deliberately not
                // re-validated against a possibly shrunken page count
                state.create_modal_open = false;
                Self::trigger_fetch(state, env)
            },

            CatalogAction::PageLoaded {
                token,
                shops,
                total_pages,
            } => {
                if token != state.request_seq {
                    tracing::trace!(token, current = state.request_seq, "discarding stale response");
                    return smallvec![Effect::None];
                }

                state.fetch.loading = false;
                state.fetch.error = None;
                state.fetch.shops = shops;
                state.fetch.last_loaded_at = Some(env.clock.now());
                state.pagination.total_pages = total_pages.max(1);
                smallvec![Effect::None]
            },

            CatalogAction::FetchFailed { token, message } => {
                if token != state.request_seq {
                    tracing::trace!(token, current = state.request_seq, "discarding stale failure");
                    return smallvec![Effect::None];
                }

                // Previous results stay visible under the inline error
                state.fetch.loading = false;
                state.fetch.error = Some(message);
                smallvec![Effect::None]
            },
        }
    }
}
