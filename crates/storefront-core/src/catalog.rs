//! Catalog listing types shared by the gateway, the static build and the
//! browse state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Page size used by the catalog listing and the "load more" action.
pub const CATALOG_PAGE_SIZE: u32 = 20;

/// Page size used when enumerating every product id for static routes.
pub const PATHS_PAGE_SIZE: u32 = 100;

/// Number of categories offered in the catalog sidebar.
pub const CATEGORY_LIMIT: u32 = 50;

pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder-image.png";

/// A gross price as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    /// Alt text; the backend sends `null` or `""` for images without one.
    #[serde(default)]
    pub alt: String,
}

impl Image {
    #[must_use]
    pub fn placeholder(alt: &str) -> Self {
        Self {
            url: PLACEHOLDER_IMAGE_URL.to_string(),
            alt: alt.to_string(),
        }
    }
}

/// A product as it appears in the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<Image>,
    /// Start of the product's gross price range.
    pub price: Option<Money>,
}

impl ProductSummary {
    /// Route of the statically generated detail page.
    #[must_use]
    pub fn href(&self) -> String {
        product_path(&self.id)
    }

    /// Thumbnail to render, falling back to the placeholder image. An empty
    /// alt text is replaced with `"Placeholder image"`.
    #[must_use]
    pub fn card_image(&self) -> Image {
        match &self.thumbnail {
            Some(img) if img.alt.is_empty() => Image {
                url: img.url.clone(),
                alt: "Placeholder image".to_string(),
            },
            Some(img) => img.clone(),
            None => Image::placeholder("Placeholder image"),
        }
    }

    #[must_use]
    pub fn price_label(&self) -> Option<String> {
        self.price.as_ref().map(ToString::to_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortField {
    Name,
    MinimalPrice,
    PublicationDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// `(field, direction)` pair passed to the backend's `sortBy` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortBy {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortBy {
    fn default() -> Self {
        SORT_OPTIONS[0].sort_by
    }
}

/// A sort choice offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOption {
    #[serde(rename = "friendlyName")]
    pub label: &'static str,
    #[serde(rename = "sorting")]
    pub sort_by: SortBy,
}

impl SortOption {
    /// Looks up the offered option with the given label.
    #[must_use]
    pub fn by_label(label: &str) -> Option<Self> {
        SORT_OPTIONS.iter().copied().find(|o| o.label == label)
    }
}

impl Default for SortOption {
    fn default() -> Self {
        SORT_OPTIONS[0]
    }
}

/// The five sort options, in sidebar order. The first one is the default.
pub const SORT_OPTIONS: [SortOption; 5] = [
    SortOption {
        label: "A-Z",
        sort_by: SortBy {
            field: SortField::Name,
            direction: SortDirection::Asc,
        },
    },
    SortOption {
        label: "Z-A",
        sort_by: SortBy {
            field: SortField::Name,
            direction: SortDirection::Desc,
        },
    },
    SortOption {
        label: "Price high to low",
        sort_by: SortBy {
            field: SortField::MinimalPrice,
            direction: SortDirection::Desc,
        },
    },
    SortOption {
        label: "Price low to high",
        sort_by: SortBy {
            field: SortField::MinimalPrice,
            direction: SortDirection::Asc,
        },
    },
    SortOption {
        label: "What's new?",
        sort_by: SortBy {
            field: SortField::PublicationDate,
            direction: SortDirection::Desc,
        },
    },
];

/// One page of catalog results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub items: Vec<ProductSummary>,
    /// Total matching products across all pages.
    pub total_count: usize,
    /// Cursor after the last item of this page, `None` for an empty page.
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// Route of the detail page for product `id`.
#[must_use]
pub fn product_path(id: &str) -> String {
    format!("/product/{id}")
}

/// Routes of every statically generated detail page, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPaths {
    pub paths: Vec<String>,
}

impl ProductPaths {
    #[must_use]
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        Self {
            paths: ids.iter().map(|id| product_path(id.as_ref())).collect(),
        }
    }
}

/// Props of the statically generated catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPageProps {
    pub products: Vec<ProductSummary>,
    pub categories: Vec<Category>,
    pub total_products: usize,
    pub end_cursor: Option<String>,
}
