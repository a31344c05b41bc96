//! State of the catalog page: the listed products, the active search,
//! category and sort, and the requests in flight.
//!
//! The state never performs I/O. Every user action returns the request it
//! wants issued (if any); the caller runs it through a
//! [`CatalogGateway`](crate::gateway::CatalogGateway) and hands the outcome
//! back to [`BrowseState::apply`].
//!
//! Requests carry a sequence number. Only the latest filter and the latest
//! load-more are live; a response for anything older is dropped, and issuing
//! a filter retires any load-more still in flight since its cursor belongs
//! to the previous listing.

use std::collections::VecDeque;

use storefront_core::{
    CatalogPageProps, Category, FilterProductsRequest, LoadMoreProductsRequest, ProductSummary,
    SortInput, SortOption,
};

use crate::gateway::{FilterResult, GatewayError, LoadMoreResult};
use crate::notification::Notification;

/// Search text shorter than this (after trimming) does not filter.
pub const SEARCH_MIN_CHARS: usize = 4;

/// Search actually sent to the backend for the text in the search box.
#[must_use]
pub fn effective_search(text: &str) -> &str {
    if text.trim().chars().count() < SEARCH_MIN_CHARS {
        ""
    } else {
        text
    }
}

/// Everything that determines which listing is shown. A change of key means
/// a new first page has to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    pub search: String,
    pub category_id: Option<String>,
    pub sort: SortOption,
}

impl QueryKey {
    fn filter_request(&self) -> FilterProductsRequest {
        FilterProductsRequest {
            search_query: Some(self.search.clone()),
            category_id: self.category_id.clone(),
            sort_by: SortInput::from(self.sort.sort_by),
        }
    }

    fn load_more_request(&self, end_cursor: &str) -> LoadMoreProductsRequest {
        LoadMoreProductsRequest {
            end_cursor: end_cursor.to_owned(),
            search_query: Some(self.search.clone()),
            category_id: self.category_id.clone(),
            sort_by: SortInput::from(self.sort.sort_by),
        }
    }
}

impl Default for QueryKey {
    fn default() -> Self {
        Self {
            search: String::new(),
            category_id: None,
            sort: SortOption::default(),
        }
    }
}

/// A gateway call the state wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseRequest {
    Filter {
        seq: u64,
        request: FilterProductsRequest,
    },
    LoadMore {
        seq: u64,
        request: LoadMoreProductsRequest,
    },
}

impl BrowseRequest {
    #[must_use]
    pub fn seq(&self) -> u64 {
        match self {
            Self::Filter { seq, .. } | Self::LoadMore { seq, .. } => *seq,
        }
    }
}

/// Outcome of a [`BrowseRequest`], tagged with the same sequence number.
#[derive(Debug)]
pub enum BrowseResponse {
    Filter {
        seq: u64,
        result: Result<FilterResult, GatewayError>,
    },
    LoadMore {
        seq: u64,
        result: Result<LoadMoreResult, GatewayError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The listing was updated.
    Applied,
    /// The request failed; a notification was queued and the listing kept.
    Failed,
    /// A newer request superseded this one; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct BrowseState {
    items: Vec<ProductSummary>,
    total_count: usize,
    end_cursor: Option<String>,
    categories: Vec<Category>,

    search_text: String,
    category_id: Option<String>,
    sort: SortOption,

    /// Query the listed items belong to.
    shown: QueryKey,
    /// Query of the most recently issued filter.
    requested: QueryKey,

    last_seq: u64,
    filter_in_flight: Option<(u64, QueryKey)>,
    load_more_in_flight: Option<u64>,
    notifications: VecDeque<Notification>,
}

impl BrowseState {
    /// Seeds the state from the generated catalog page: default sort, empty
    /// search, all categories.
    #[must_use]
    pub fn new(props: CatalogPageProps) -> Self {
        Self {
            items: props.products,
            total_count: props.total_products,
            end_cursor: props.end_cursor,
            categories: props.categories,
            search_text: String::new(),
            category_id: None,
            sort: SortOption::default(),
            shown: QueryKey::default(),
            requested: QueryKey::default(),
            last_seq: 0,
            filter_in_flight: None,
            load_more_in_flight: None,
            notifications: VecDeque::new(),
        }
    }

    /// Echoes `text` into the search box and re-filters if the effective
    /// search changed.
    pub fn on_search_input(&mut self, text: &str) -> Option<BrowseRequest> {
        text.clone_into(&mut self.search_text);
        self.refilter_if_changed()
    }

    /// Selects a category (`""` for all products) and clears the search.
    pub fn on_category_change(&mut self, category_id: &str) -> Option<BrowseRequest> {
        self.search_text.clear();
        self.category_id = (!category_id.is_empty()).then(|| category_id.to_owned());
        self.refilter_if_changed()
    }

    /// Selects a sort order. The search is kept.
    pub fn on_sort_change(&mut self, option: SortOption) -> Option<BrowseRequest> {
        self.sort = option;
        self.refilter_if_changed()
    }

    /// Requests the page after the current one.
    ///
    /// Returns `None` when everything is listed, or while a filter or another
    /// load-more is still in flight.
    pub fn on_load_more(&mut self) -> Option<BrowseRequest> {
        if self.show_load_more() && self.end_cursor.is_none() {
            tracing::warn!(
                items = self.items.len(),
                total = self.total_count,
                "load more pressed but the backend returned no cursor"
            );
            return None;
        }
        if !self.can_load_more() {
            tracing::debug!(
                items = self.items.len(),
                total = self.total_count,
                filter_loading = self.is_filter_loading(),
                load_more_loading = self.is_load_more_loading(),
                "load more ignored"
            );
            return None;
        }
        let cursor = self.end_cursor.clone()?;
        let seq = self.next_seq();
        self.load_more_in_flight = Some(seq);
        Some(BrowseRequest::LoadMore {
            seq,
            request: self.shown.load_more_request(&cursor),
        })
    }

    /// Applies the outcome of a request issued by this state.
    pub fn apply(&mut self, response: BrowseResponse) -> ApplyOutcome {
        match response {
            BrowseResponse::Filter { seq, result } => self.apply_filter(seq, result),
            BrowseResponse::LoadMore { seq, result } => self.apply_load_more(seq, result),
        }
    }

    fn apply_filter(
        &mut self,
        seq: u64,
        result: Result<FilterResult, GatewayError>,
    ) -> ApplyOutcome {
        let key = match self.filter_in_flight.take() {
            Some((live, key)) if live == seq => key,
            other => {
                self.filter_in_flight = other;
                tracing::debug!(seq, "discarding stale filter response");
                return ApplyOutcome::Stale;
            }
        };

        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_count = page.total_count;
                self.end_cursor = page.end_cursor;
                self.shown = key;
                ApplyOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "filter request failed");
                // Listing still shows the old query; let the next change
                // of input retry against it.
                self.requested = self.shown.clone();
                self.notifications.push_back(Notification::error(e.to_string()));
                ApplyOutcome::Failed
            }
        }
    }

    fn apply_load_more(
        &mut self,
        seq: u64,
        result: Result<LoadMoreResult, GatewayError>,
    ) -> ApplyOutcome {
        if self.load_more_in_flight != Some(seq) {
            tracing::debug!(seq, "discarding stale load-more response");
            return ApplyOutcome::Stale;
        }
        self.load_more_in_flight = None;

        match result {
            Ok(page) => {
                self.items.extend(page.items);
                self.end_cursor = page.end_cursor;
                ApplyOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "load more request failed");
                self.notifications.push_back(Notification::error(e.to_string()));
                ApplyOutcome::Failed
            }
        }
    }

    fn refilter_if_changed(&mut self) -> Option<BrowseRequest> {
        let key = self.query_key();
        if key == self.requested {
            return None;
        }
        self.requested = key.clone();

        let seq = self.next_seq();
        if let Some(retired) = self.load_more_in_flight.take() {
            tracing::debug!(retired, seq, "filter supersedes load more in flight");
        }
        let request = key.filter_request();
        self.filter_in_flight = Some((seq, key));
        Some(BrowseRequest::Filter { seq, request })
    }

    fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    /// Query described by the current inputs.
    #[must_use]
    pub fn query_key(&self) -> QueryKey {
        QueryKey {
            search: effective_search(&self.search_text).to_owned(),
            category_id: self.category_id.clone(),
            sort: self.sort,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ProductSummary] {
        &self.items
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    #[must_use]
    pub fn end_cursor(&self) -> Option<&str> {
        self.end_cursor.as_deref()
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    #[must_use]
    pub fn sort_option(&self) -> SortOption {
        self.sort
    }

    /// A filter is in flight; the grid shows a spinner instead of items.
    #[must_use]
    pub fn is_filter_loading(&self) -> bool {
        self.filter_in_flight.is_some()
    }

    #[must_use]
    pub fn is_load_more_loading(&self) -> bool {
        self.load_more_in_flight.is_some()
    }

    /// Whether the "Load More" button is rendered.
    ///
    /// Follows the count alone. Without a cursor the button stays inert:
    /// [`Self::can_load_more`] is false and pressing it issues nothing.
    #[must_use]
    pub fn show_load_more(&self) -> bool {
        self.items.len() < self.total_count
    }

    /// Whether pressing "Load More" would issue a request.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.show_load_more()
            && self.end_cursor.is_some()
            && !self.is_filter_loading()
            && !self.is_load_more_loading()
    }

    /// `"{listed} / {total}"` under the grid.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.items.len(), self.total_count)
    }

    /// Nothing matched the current query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_filter_loading() && self.items.is_empty()
    }

    /// Whether `category_id` (`""` for "All Products") is highlighted.
    #[must_use]
    pub fn is_category_active(&self, category_id: &str) -> bool {
        self.category_id.as_deref().unwrap_or("") == category_id
    }

    #[must_use]
    pub fn is_sort_active(&self, option: &SortOption) -> bool {
        self.sort == *option
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Removes and returns the queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}

#[cfg(test)]
#[path = "browse_test.rs"]
mod tests;
