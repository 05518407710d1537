//! Actions processed by the list-view controller.
//!
//! The enum covers both user events (edits, submits, navigation, modal
//! toggles) and the feedback events produced when a gateway effect settles.
//! Feedback variants carry the trigger token so stale responses can be
//! recognized and discarded.

use crate::types::{FilterKey, NewShop, PageSize, Shop};
use serde::{Deserialize, Serialize};

/// Every input the shop list view can receive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogAction {
    // ========== User events ==========
    /// The view mounted; load the first page
    Started,

    /// One filter field was edited
    ///
    /// Deliberately does NOT fetch: edits are deferred until submit.
    FilterEdited {
        /// Which field changed
        key: FilterKey,
        /// New value ("" clears the field)
        value: String,
    },

    /// The filter form was submitted
    FiltersSubmitted,

    /// The "Clear Filters" control was used
    FiltersCleared,

    /// A new rows-per-page value was selected
    PageSizeChanged {
        /// The selected size
        size: PageSize,
    },

    /// A pagination control asked for a page
    ///
    /// Out-of-range requests are ignored without error.
    PageRequested {
        /// 1-based page number
        page: u32,
    },

    /// The "Create New Shop" button opened the modal
    CreateModalOpened,

    /// The modal was dismissed without creating anything
    CreateModalClosed,

    /// The creation form submitted an already-validated payload
    ShopCreationRequested {
        /// The payload to send to the creation gateway
        shop: NewShop,
    },

    /// The creation gateway reported success
    ///
    /// Refetches the current filters and current page so the new shop shows
    /// up without disturbing the user's place in the list.
    ShopCreated,

    // ========== Gateway feedback ==========
    /// A fetch settled successfully
    PageLoaded {
        /// Token of the trigger that issued the fetch
        token: u64,
        /// The loaded page, replacing the previous one wholesale
        shops: Vec<Shop>,
        /// Authoritative page count for the query
        total_pages: u32,
    },

    /// A fetch settled with a failure
    FetchFailed {
        /// Token of the trigger that issued the fetch
        token: u64,
        /// Human-readable message for the inline error slot
        message: String,
    },
}
