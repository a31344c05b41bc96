//! Conversion from GraphQL wire types to the shared `storefront_core` types.

use storefront_core::{
    CatalogPage, Category, Image, Media, Money, ProductDetail, ProductSummary, Variant,
    VariantRef,
};

use crate::types::{
    CategoryNode, Connection, ImageNode, MediaNode, MoneyNode, ProductDetailNode, ProductNode,
    TaxedMoney, VariantNode,
};

fn money(node: MoneyNode) -> Money {
    Money {
        amount: node.amount,
        currency: node.currency,
    }
}

fn image(node: ImageNode) -> Image {
    Image {
        url: node.url,
        alt: node.alt.unwrap_or_default(),
    }
}

#[must_use]
pub fn normalize_summary(node: ProductNode) -> ProductSummary {
    let price = node
        .pricing
        .and_then(|p| p.price_range)
        .and_then(|r| r.start)
        .map(|TaxedMoney { gross }| money(gross));

    ProductSummary {
        id: node.id,
        name: node.name,
        thumbnail: node.thumbnail.map(image),
        price,
    }
}

/// Converts a product connection into a [`CatalogPage`].
///
/// A missing `totalCount` is read as zero; a negative one (never observed)
/// is clamped to zero.
#[must_use]
pub fn normalize_page(connection: Connection<ProductNode>) -> CatalogPage {
    let total_count = connection
        .total_count
        .map_or(0, |n| usize::try_from(n).unwrap_or(0));
    let (end_cursor, has_next_page) = connection
        .page_info
        .map_or((None, false), |p| (p.end_cursor, p.has_next_page));

    CatalogPage {
        items: connection
            .edges
            .into_iter()
            .map(|edge| normalize_summary(edge.node))
            .collect(),
        total_count,
        end_cursor,
        has_next_page,
    }
}

#[must_use]
pub fn normalize_categories(connection: Connection<CategoryNode>) -> Vec<Category> {
    connection
        .edges
        .into_iter()
        .map(|edge| Category {
            id: edge.node.id,
            name: edge.node.name,
        })
        .collect()
}

fn normalize_variant(node: VariantNode) -> Variant {
    Variant {
        id: node.id,
        name: node.name,
        price: node
            .pricing
            .and_then(|p| p.price)
            .map(|TaxedMoney { gross }| money(gross)),
    }
}

fn normalize_media(node: MediaNode) -> Media {
    Media {
        id: node.id,
        url: node.url,
        alt: node.alt.unwrap_or_default(),
    }
}

#[must_use]
pub fn normalize_product(node: ProductDetailNode) -> ProductDetail {
    ProductDetail {
        id: node.id,
        name: node.name,
        description: node.description.filter(|d| !d.is_empty()),
        default_variant: node.default_variant.map(|v| VariantRef {
            id: v.id,
            name: v.name,
        }),
        variants: node
            .variants
            .unwrap_or_default()
            .into_iter()
            .map(normalize_variant)
            .collect(),
        media: node
            .media
            .unwrap_or_default()
            .into_iter()
            .map(normalize_media)
            .collect(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
