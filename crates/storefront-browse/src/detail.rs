//! Selection state of a product detail page.

use storefront_core::{DescriptionDocument, Image, Media, ProductDetail, Variant};

/// Alt text of the main image when a product has no media.
pub const DETAIL_PLACEHOLDER_ALT: &str = "Placeholder Image";

/// Selected media and variant for one product page. Lives as long as the
/// page is shown and performs no I/O.
#[derive(Debug, Clone)]
pub struct ProductDetailState {
    product: ProductDetail,
    description: DescriptionDocument,
    selected_media: usize,
    selected_variant: usize,
}

impl ProductDetailState {
    /// Starts with the first media item and the first variant selected.
    #[must_use]
    pub fn new(product: ProductDetail) -> Self {
        let description = product.description_document();
        Self {
            product,
            description,
            selected_media: 0,
            selected_variant: 0,
        }
    }

    #[must_use]
    pub fn product(&self) -> &ProductDetail {
        &self.product
    }

    /// Large preview image: the selected media item, or the placeholder
    /// when the product has no media.
    #[must_use]
    pub fn main_image(&self) -> Image {
        self.selected_media().map_or_else(
            || Image::placeholder(DETAIL_PLACEHOLDER_ALT),
            |media| Image {
                url: media.url.clone(),
                alt: media.alt.clone(),
            },
        )
    }

    #[must_use]
    pub fn selected_media(&self) -> Option<&Media> {
        self.product.media.get(self.selected_media)
    }

    /// Selects the thumbnail at `index`. Out-of-range indices are ignored.
    pub fn select_media(&mut self, index: usize) -> bool {
        if index >= self.product.media.len() {
            return false;
        }
        self.selected_media = index;
        true
    }

    /// Selects the media item with the given id.
    pub fn select_media_by_id(&mut self, id: &str) -> bool {
        match self
            .product
            .media
            .iter()
            .position(|m| m.id.as_deref() == Some(id))
        {
            Some(index) => self.select_media(index),
            None => false,
        }
    }

    /// Whether the thumbnail at `index` gets the highlight border.
    #[must_use]
    pub fn is_media_selected(&self, index: usize) -> bool {
        match (self.selected_media(), self.product.media.get(index)) {
            (Some(selected), Some(candidate)) => match (&selected.id, &candidate.id) {
                (Some(a), Some(b)) => a == b,
                _ => index == self.selected_media,
            },
            _ => false,
        }
    }

    #[must_use]
    pub fn selected_variant(&self) -> Option<&Variant> {
        self.product.variants.get(self.selected_variant)
    }

    /// Selects a variant from the dropdown. Unknown ids leave the selection
    /// unchanged.
    pub fn select_variant(&mut self, id: &str) -> bool {
        match self.product.variants.iter().position(|v| v.id == id) {
            Some(index) => {
                self.selected_variant = index;
                true
            }
            None => {
                tracing::debug!(variant = id, product = %self.product.id, "unknown variant");
                false
            }
        }
    }

    /// Price shown under the product name, e.g. `"12.50 GBP"`.
    #[must_use]
    pub fn displayed_price(&self) -> Option<String> {
        self.selected_variant()
            .and_then(|v| v.price.as_ref())
            .map(ToString::to_string)
    }

    /// The dropdown is only rendered when there is a choice to make.
    #[must_use]
    pub fn show_variant_picker(&self) -> bool {
        self.product.variants.len() > 1
    }

    /// Paragraph blocks of the description, markup passed through as-is.
    pub fn description_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.description.rendered_paragraphs()
    }

    #[must_use]
    pub fn page_title(&self) -> String {
        format!("{} | Lush", self.product.name)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront_core::{Money, VariantRef, PLACEHOLDER_IMAGE_URL};

    use super::*;

    fn variant(id: &str, cents: i64) -> Variant {
        Variant {
            id: id.to_owned(),
            name: format!("{id} size"),
            price: Some(Money {
                amount: Decimal::new(cents, 2),
                currency: "GBP".to_owned(),
            }),
        }
    }

    fn media(id: &str) -> Media {
        Media {
            id: Some(id.to_owned()),
            url: format!("https://cdn.example.com/{id}.png"),
            alt: format!("{id} alt"),
        }
    }

    fn product(variants: Vec<Variant>, media: Vec<Media>) -> ProductDetail {
        ProductDetail {
            id: "UHJvZHVjdDox".to_owned(),
            name: "Sleepy".to_owned(),
            description: Some(
                r#"{"blocks":[
                    {"type":"paragraph","data":{"text":"Lavender <b>and</b> tonka."}},
                    {"type":"header","data":{"text":"Ingredients","level":2}},
                    {"type":"paragraph","data":{"text":"Vegan."}}
                ]}"#
                .to_owned(),
            ),
            default_variant: Some(VariantRef {
                id: "v1".to_owned(),
                name: "v1 size".to_owned(),
            }),
            variants,
            media,
        }
    }

    #[test]
    fn defaults_to_first_media_and_variant() {
        let state = ProductDetailState::new(product(
            vec![variant("v1", 1250), variant("v2", 2500)],
            vec![media("m1"), media("m2")],
        ));
        assert_eq!(state.main_image().url, "https://cdn.example.com/m1.png");
        assert!(state.is_media_selected(0));
        assert!(!state.is_media_selected(1));
        assert_eq!(state.selected_variant().unwrap().id, "v1");
        assert_eq!(state.displayed_price().as_deref(), Some("12.50 GBP"));
        assert!(state.show_variant_picker());
    }

    #[test]
    fn no_media_shows_placeholder() {
        let state = ProductDetailState::new(product(vec![variant("v1", 700)], vec![]));
        let image = state.main_image();
        assert_eq!(image.url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(image.alt, "Placeholder Image");
        assert!(!state.is_media_selected(0));
    }

    #[test]
    fn select_media_changes_preview_and_highlight() {
        let mut state = ProductDetailState::new(product(
            vec![variant("v1", 700)],
            vec![media("m1"), media("m2"), media("m3")],
        ));
        assert!(state.select_media(2));
        assert_eq!(state.main_image().alt, "m3 alt");
        assert!(state.is_media_selected(2));
        assert!(!state.is_media_selected(0));

        assert!(state.select_media_by_id("m2"));
        assert!(state.is_media_selected(1));

        assert!(!state.select_media(9));
        assert!(!state.select_media_by_id("missing"));
        assert!(state.is_media_selected(1));
    }

    #[test]
    fn select_variant_drives_price() {
        let mut state = ProductDetailState::new(product(
            vec![variant("v1", 1250), variant("v2", 2500)],
            vec![],
        ));
        assert!(state.select_variant("v2"));
        assert_eq!(state.displayed_price().as_deref(), Some("25.00 GBP"));

        assert!(!state.select_variant("v9"));
        assert_eq!(state.selected_variant().unwrap().id, "v2");
    }

    #[test]
    fn single_variant_hides_picker() {
        let state = ProductDetailState::new(product(vec![variant("v1", 700)], vec![]));
        assert!(!state.show_variant_picker());
    }

    #[test]
    fn description_renders_paragraphs_only() {
        let state = ProductDetailState::new(product(vec![variant("v1", 700)], vec![]));
        let paragraphs: Vec<_> = state.description_paragraphs().collect();
        assert_eq!(paragraphs, vec!["Lavender <b>and</b> tonka.", "Vegan."]);
    }

    #[test]
    fn invalid_description_renders_nothing() {
        let mut detail = product(vec![variant("v1", 700)], vec![]);
        detail.description = Some("not json".to_owned());
        let state = ProductDetailState::new(detail);
        assert_eq!(state.description_paragraphs().count(), 0);
    }

    #[test]
    fn no_variants_has_no_price() {
        let state = ProductDetailState::new(product(vec![], vec![]));
        assert!(state.selected_variant().is_none());
        assert!(state.displayed_price().is_none());
        assert_eq!(state.page_title(), "Sleepy | Lush");
    }
}
