//! Page identity and template kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a page that survives reordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// The role a page plays in the document.
///
/// Only `Cover`, `Blank` and `Toc` affect numbering. The content kinds the
/// designer ships with get their own variants; anything else is kept verbatim
/// in `Custom` so a round trip through JSON never loses the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateKey {
    Cover,
    Blank,
    Toc,
    Itinerary,
    Daily,
    Hotel,
    Memo,
    Vehicle,
    Table,
    Custom(String),
}

impl TemplateKey {
    /// The tag used by the designer for this kind
    pub fn as_str(&self) -> &str {
        match self {
            TemplateKey::Cover => "cover",
            TemplateKey::Blank => "blank",
            TemplateKey::Toc => "toc",
            TemplateKey::Itinerary => "itinerary",
            TemplateKey::Daily => "daily",
            TemplateKey::Hotel => "hotel",
            TemplateKey::Memo => "memo",
            TemplateKey::Vehicle => "vehicle",
            TemplateKey::Table => "table",
            TemplateKey::Custom(tag) => tag,
        }
    }

    pub fn is_cover(&self) -> bool {
        matches!(self, TemplateKey::Cover)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, TemplateKey::Blank)
    }

    pub fn is_toc(&self) -> bool {
        matches!(self, TemplateKey::Toc)
    }
}

/// An untagged content page
impl Default for TemplateKey {
    fn default() -> Self {
        TemplateKey::Custom(String::new())
    }
}

impl From<&str> for TemplateKey {
    fn from(tag: &str) -> Self {
        match tag {
            "cover" => TemplateKey::Cover,
            "blank" => TemplateKey::Blank,
            "toc" => TemplateKey::Toc,
            "itinerary" => TemplateKey::Itinerary,
            "daily" => TemplateKey::Daily,
            "hotel" => TemplateKey::Hotel,
            "memo" => TemplateKey::Memo,
            "vehicle" => TemplateKey::Vehicle,
            "table" => TemplateKey::Table,
            other => TemplateKey::Custom(other.to_string()),
        }
    }
}

impl From<String> for TemplateKey {
    fn from(tag: String) -> Self {
        match TemplateKey::from(tag.as_str()) {
            TemplateKey::Custom(_) => TemplateKey::Custom(tag),
            known => known,
        }
    }
}

impl From<TemplateKey> for String {
    fn from(key: TemplateKey) -> Self {
        match key {
            TemplateKey::Custom(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One page of a designed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    /// Missing in older saved pages; such pages number like content
    #[serde(default)]
    pub template_key: TemplateKey,
    /// Display name shown in the page list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Explicit day for `daily` pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_index: Option<u32>,
}

impl Page {
    /// Create a page with the given id and template tag
    pub fn new(id: impl Into<PageId>, template_key: impl Into<TemplateKey>) -> Self {
        Self {
            id: id.into(),
            template_key: template_key.into(),
            name: None,
            day_index: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_day_index(mut self, day_index: u32) -> Self {
        self.day_index = Some(day_index);
        self
    }

    /// Name for listings, falling back to the template tag
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.template_key.as_str())
    }
}
