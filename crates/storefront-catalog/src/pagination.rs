//! Cursor bookkeeping for enumerating every product id.
//!
//! The backend pages products as a Relay connection. Enumeration ends on the
//! explicit last-page signal (`pageInfo.hasNextPage == false`), not on a
//! comparison against `totalCount`: the total can move while pages are being
//! read, and trusting it either truncates the list or loops forever.
//! `totalCount` is only used to log a mismatch.

use std::collections::HashSet;

use crate::error::CatalogError;

/// One page of product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdPage {
    pub ids: Vec<String>,
    pub total_count: usize,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// Accumulates ids page by page and decides where to continue.
#[derive(Debug, Default)]
pub struct PathCollector {
    ids: Vec<String>,
    seen: HashSet<String>,
    last_total: usize,
}

impl PathCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a page and returns the cursor for the next request, or `None`
    /// when the last page has been read.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProductId`] if an id was already collected.
    /// - [`CatalogError::PaginationStalled`] if the page claims a successor
    ///   but is empty or carries no cursor.
    pub fn push_page(&mut self, page: IdPage) -> Result<Option<String>, CatalogError> {
        let page_len = page.ids.len();
        for id in page.ids {
            if !self.seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateProductId { id });
            }
            self.ids.push(id);
        }
        self.last_total = page.total_count;

        if !page.has_next_page {
            if self.ids.len() != page.total_count {
                tracing::warn!(
                    collected = self.ids.len(),
                    total_count = page.total_count,
                    "product id enumeration finished with a count different from totalCount"
                );
            }
            return Ok(None);
        }

        if page_len == 0 {
            return Err(CatalogError::PaginationStalled {
                collected: self.ids.len(),
                reason: "returned an empty page",
            });
        }

        match page.end_cursor {
            Some(cursor) if !cursor.is_empty() => Ok(Some(cursor)),
            _ => Err(CatalogError::PaginationStalled {
                collected: self.ids.len(),
                reason: "returned no end cursor",
            }),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Most recent `totalCount` reported by the backend.
    #[must_use]
    pub fn reported_total(&self) -> usize {
        self.last_total
    }

    #[must_use]
    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }
}
