//! Rich-text product descriptions.
//!
//! The backend stores descriptions as an editor document serialized to a
//! JSON string:
//!
//! ```text
//! {"time": 1637..., "blocks": [{"id": "x1", "type": "paragraph", "data": {"text": "Soft <b>and</b> fresh"}}], "version": "2.22.2"}
//! ```
//!
//! Block kinds are a closed set. A block whose `type` is not one of them, or
//! whose `data` does not match its kind, becomes [`DescriptionBlock::Unknown`]
//! and is never rendered.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionBlock {
    Paragraph { text: String },
    Header { text: String, level: u8 },
    List { ordered: bool, items: Vec<String> },
    Quote { text: String, caption: String },
    Unknown { kind: String },
}

impl DescriptionBlock {
    fn from_value(value: serde_json::Value) -> Self {
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        match serde_json::from_value::<RawBlock>(value) {
            Ok(RawBlock::Paragraph { text }) => Self::Paragraph { text },
            Ok(RawBlock::Header { text, level }) => Self::Header { text, level },
            Ok(RawBlock::List { style, items }) => Self::List {
                ordered: style == "ordered",
                items: items.into_iter().filter_map(list_item_text).collect(),
            },
            Ok(RawBlock::Quote { text, caption }) => Self::Quote { text, caption },
            Err(_) => Self::Unknown { kind },
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
enum RawBlock {
    Paragraph {
        #[serde(default)]
        text: String,
    },
    Header {
        #[serde(default)]
        text: String,
        #[serde(default = "default_header_level")]
        level: u8,
    },
    List {
        #[serde(default)]
        style: String,
        #[serde(default)]
        items: Vec<serde_json::Value>,
    },
    Quote {
        #[serde(default)]
        text: String,
        #[serde(default)]
        caption: String,
    },
}

fn default_header_level() -> u8 {
    2
}

/// List items are plain strings in older editor versions and
/// `{"content": "..."}` objects in newer ones.
fn list_item_text(item: serde_json::Value) -> Option<String> {
    match item {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Object(mut map) => match map.remove("content") {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionDocument {
    pub blocks: Vec<DescriptionBlock>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    blocks: Vec<serde_json::Value>,
}

impl DescriptionDocument {
    /// Parses the backend's JSON-encoded description.
    ///
    /// `None`, an empty string, or text that is not a JSON document yields an
    /// empty document.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        match serde_json::from_str::<RawDocument>(raw) {
            Ok(doc) => Self {
                blocks: doc
                    .blocks
                    .into_iter()
                    .map(DescriptionBlock::from_value)
                    .collect(),
            },
            Err(e) => {
                tracing::debug!(error = %e, "product description is not a JSON document");
                Self::default()
            }
        }
    }

    /// Inline HTML of each paragraph block, in document order. Other block
    /// kinds are not rendered.
    pub fn rendered_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            DescriptionBlock::Paragraph { text } => Some(text.as_str()),
            _ => None,
        })
    }
}
