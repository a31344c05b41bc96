use serde::{Deserialize, Serialize};

use crate::catalog::Money;
use crate::description::DescriptionDocument;

/// Props of a statically generated product detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    /// JSON-encoded rich-text document, exactly as the backend returns it.
    pub description: Option<String>,
    pub default_variant: Option<VariantRef>,
    pub variants: Vec<Variant>,
    pub media: Vec<Media>,
}

impl ProductDetail {
    #[must_use]
    pub fn description_document(&self) -> DescriptionDocument {
        DescriptionDocument::parse(self.description.as_deref())
    }

    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    pub id: String,
    pub name: String,
}

/// A purchasable configuration of a product, e.g. a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub price: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt: String,
}
