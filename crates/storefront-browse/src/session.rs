//! Drives a [`BrowseState`] against a [`CatalogGateway`].

use storefront_core::{CatalogPageProps, SortOption};

use crate::browse::{ApplyOutcome, BrowseRequest, BrowseResponse, BrowseState};
use crate::gateway::CatalogGateway;
use crate::notification::Notification;

/// Runs a request issued by a [`BrowseState`] and tags the outcome with the
/// request's sequence number.
pub async fn dispatch<G>(gateway: &G, request: BrowseRequest) -> BrowseResponse
where
    G: CatalogGateway + ?Sized,
{
    match request {
        BrowseRequest::Filter { seq, request } => BrowseResponse::Filter {
            seq,
            result: gateway.filter(&request).await,
        },
        BrowseRequest::LoadMore { seq, request } => BrowseResponse::LoadMore {
            seq,
            result: gateway.load_more(&request).await,
        },
    }
}

/// One browsing session on the catalog page.
///
/// Each action awaits its request before returning. Callers that need
/// overlapping requests drive [`BrowseState`] and [`dispatch`] directly.
#[derive(Debug)]
pub struct BrowseSession<G> {
    gateway: G,
    state: BrowseState,
}

impl<G: CatalogGateway> BrowseSession<G> {
    #[must_use]
    pub fn new(gateway: G, props: CatalogPageProps) -> Self {
        Self {
            gateway,
            state: BrowseState::new(props),
        }
    }

    #[must_use]
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Returns `None` when the input did not change the query.
    pub async fn search(&mut self, text: &str) -> Option<ApplyOutcome> {
        let request = self.state.on_search_input(text);
        self.run(request).await
    }

    pub async fn change_category(&mut self, category_id: &str) -> Option<ApplyOutcome> {
        let request = self.state.on_category_change(category_id);
        self.run(request).await
    }

    pub async fn change_sort(&mut self, option: SortOption) -> Option<ApplyOutcome> {
        let request = self.state.on_sort_change(option);
        self.run(request).await
    }

    /// Returns `None` when there was nothing more to load.
    pub async fn load_more(&mut self) -> Option<ApplyOutcome> {
        let request = self.state.on_load_more();
        self.run(request).await
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.state.take_notifications()
    }

    #[must_use]
    pub fn into_state(self) -> BrowseState {
        self.state
    }

    async fn run(&mut self, request: Option<BrowseRequest>) -> Option<ApplyOutcome> {
        let request = request?;
        let response = dispatch(&self.gateway, request).await;
        Some(self.state.apply(response))
    }
}
