pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use pagination::{IdPage, PathCollector};
pub use query::CatalogFilter;
