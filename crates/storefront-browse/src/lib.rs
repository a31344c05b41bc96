pub mod browse;
pub mod detail;
pub mod gateway;
pub mod notification;
pub mod session;

pub use browse::{
    effective_search, ApplyOutcome, BrowseRequest, BrowseResponse, BrowseState, QueryKey,
    SEARCH_MIN_CHARS,
};
pub use detail::ProductDetailState;
pub use gateway::{CatalogGateway, FilterResult, GatewayError, HttpGateway, LoadMoreResult};
pub use notification::Notification;
pub use session::{dispatch, BrowseSession};
