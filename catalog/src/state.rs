//! State of the shop list view.
//!
//! The controller exclusively owns this record for its lifetime. Descendant
//! presentational components read it and request mutation through actions;
//! nothing else mutates it.

use crate::types::{FilterField, FilterSet, PageSize, Shop};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination values for the list view.
///
/// `total_pages` is authoritative only when it came from a successful fetch;
/// until then it holds the default of 1. `current_page` never leaves
/// `[1, total_pages]` through navigation, though a refetch after a shop
/// creation may leave it pointing past a shrunken `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// 1-based page currently shown
    pub current_page: u32,
    /// Total pages reported by the last successful fetch
    pub total_pages: u32,
    /// Rows per page
    pub page_size: PageSize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size: PageSize::default(),
        }
    }
}

/// Outcome of the most recent fetch.
///
/// After any fetch settles exactly one of these holds: `loading` is true, or
/// `error` is set, or `shops` is current with `error` empty. On failure the
/// previously loaded shops stay visible rather than flashing an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchState {
    /// A fetch is in flight
    pub loading: bool,
    /// Human-readable message from the last failed fetch
    pub error: Option<String>,
    /// The last successfully loaded page, replaced wholesale on success
    pub shops: Vec<Shop>,
    /// When the visible page was loaded
    pub last_loaded_at: Option<DateTime<Utc>>,
}

/// Derived view of the fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadPhase {
    /// No fetch has ever been triggered
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch settled successfully
    Loaded,
    /// The last fetch settled with an error
    Errored,
}

/// The list-view controller's state record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    /// Current filter values
    pub filters: FilterSet,
    /// Current pagination values
    pub pagination: PaginationState,
    /// Loading/error/results of the most recent fetch
    pub fetch: FetchState,
    /// Whether the shop creation modal is shown
    pub create_modal_open: bool,
    /// Token of the most recently triggered fetch; 0 = never triggered.
    ///
    /// Feedback actions carry the token of the trigger that produced them;
    /// any settled response whose token is not the latest is discarded
    /// (last-triggered-wins).
    pub(crate) request_seq: u64,
}

impl CatalogState {
    /// Create the initial state: empty filters, page 1, nothing loaded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the view is in the fetch lifecycle
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        if self.fetch.loading {
            LoadPhase::Loading
        } else if self.request_seq == 0 {
            LoadPhase::Idle
        } else if self.fetch.error.is_some() {
            LoadPhase::Errored
        } else {
            LoadPhase::Loaded
        }
    }

    /// Input descriptors for the four filter fields, with live values
    #[must_use]
    pub fn filter_fields(&self) -> [FilterField; 4] {
        self.filters.fields()
    }

    /// How many skeleton cards the shell should render right now
    ///
    /// One per expected result slot while a fetch is in flight, zero
    /// otherwise.
    #[must_use]
    pub const fn skeleton_slots(&self) -> usize {
        if self.fetch.loading {
            self.pagination.page_size.as_u32() as usize
        } else {
            0
        }
    }

    /// Whether pagination controls are worth rendering
    #[must_use]
    pub const fn shows_pagination(&self) -> bool {
        !self.fetch.loading && self.pagination.total_pages > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_idle_on_page_one() {
        let state = CatalogState::new();
        assert_eq!(state.phase(), LoadPhase::Idle);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.total_pages, 1);
        assert_eq!(state.pagination.page_size, PageSize::Ten);
        assert!(state.filters.is_empty());
        assert!(!state.create_modal_open);
        assert_eq!(state.skeleton_slots(), 0);
    }

    #[test]
    fn phase_follows_fetch_outcome() {
        let mut state = CatalogState::new();

        state.request_seq = 1;
        state.fetch.loading = true;
        assert_eq!(state.phase(), LoadPhase::Loading);

        state.fetch.loading = false;
        assert_eq!(state.phase(), LoadPhase::Loaded);

        state.fetch.error = Some("Failed to fetch shops.".into());
        assert_eq!(state.phase(), LoadPhase::Errored);
    }

    #[test]
    fn skeleton_slots_match_page_size_while_loading() {
        let mut state = CatalogState::new();
        state.pagination.page_size = PageSize::Twenty;
        state.fetch.loading = true;
        assert_eq!(state.skeleton_slots(), 20);
    }

    #[test]
    fn pagination_controls_hidden_for_single_page_or_loading() {
        let mut state = CatalogState::new();
        assert!(!state.shows_pagination());

        state.pagination.total_pages = 3;
        assert!(state.shows_pagination());

        state.fetch.loading = true;
        assert!(!state.shows_pagination());
    }
}
