pub mod app_config;
pub mod catalog;
pub mod config;
pub mod description;
pub mod error;
pub mod gateway;
pub mod product;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    product_path, CatalogPage, CatalogPageProps, Category, Image, Money, ProductPaths,
    ProductSummary, SortBy, SortDirection, SortField, SortOption, CATALOG_PAGE_SIZE,
    CATEGORY_LIMIT, PATHS_PAGE_SIZE, PLACEHOLDER_IMAGE_URL, SORT_OPTIONS,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use description::{DescriptionBlock, DescriptionDocument};
pub use error::ConfigError;
pub use gateway::{
    FilterProductsRequest, FilterProductsResponse, LoadMoreProductsRequest,
    LoadMoreProductsResponse, SortInput,
};
pub use product::{Media, ProductDetail, Variant, VariantRef};
