//! Document model: an ordered snapshot of designed pages

mod page;

pub use page::{Page, PageId, TemplateKey};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An immutable, ordered list of pages.
///
/// Order is the only input to numbering. Lookups by id resolve to the first
/// page carrying that id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Page>", into = "Vec<Page>")]
pub struct PageList {
    pages: Vec<Page>,
    /// Maps page ID to its first position
    positions: FxHashMap<PageId, usize>,
    /// Position of the first ToC page
    toc_index: Option<usize>,
}

impl PageList {
    /// Create an empty page list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the designer's JSON page array
    pub fn from_json(json: &str) -> Result<Self, crate::PagingError> {
        let pages: Vec<Page> = serde_json::from_str(json)?;
        tracing::debug!(count = pages.len(), "loaded page list");
        Ok(Self::from(pages))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Position of the first page with the given id
    pub fn position_of(&self, id: &PageId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Find a page by id
    pub fn find(&self, id: &PageId) -> Option<&Page> {
        self.position_of(id).map(|index| &self.pages[index])
    }

    /// Position of the table-of-contents page, if any
    pub fn toc_index(&self) -> Option<usize> {
        self.toc_index
    }

    /// Day number (0-based) of a `daily` page.
    ///
    /// An explicit `day_index` wins; otherwise the page's rank among the
    /// `daily` pages that precede it.
    pub fn daily_index(&self, index: usize) -> Option<u32> {
        let page = self.pages.get(index)?;
        if page.template_key != TemplateKey::Daily {
            return None;
        }
        if let Some(day) = page.day_index {
            return Some(day);
        }

        let preceding = self.pages[..index]
            .iter()
            .filter(|p| p.template_key == TemplateKey::Daily)
            .count();
        Some(preceding as u32)
    }
}

impl From<Vec<Page>> for PageList {
    fn from(pages: Vec<Page>) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(pages.len());
        let mut toc_index = None;

        for (index, page) in pages.iter().enumerate() {
            positions.entry(page.id.clone()).or_insert(index);
            if toc_index.is_none() && page.template_key.is_toc() {
                toc_index = Some(index);
            }
        }

        Self {
            pages,
            positions,
            toc_index,
        }
    }
}

impl From<PageList> for Vec<Page> {
    fn from(list: PageList) -> Self {
        list.pages
    }
}

impl FromIterator<Page> for PageList {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a PageList {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brochure() -> PageList {
        PageList::from(vec![
            Page::new("cover", "cover"),
            Page::new("blank-a", "blank"),
            Page::new("toc", "toc"),
            Page::new("day-1", "daily"),
            Page::new("day-2", "daily"),
            Page::new("hotel", "hotel"),
            Page::new("day-x", "daily").with_day_index(7),
        ])
    }

    #[test]
    fn test_positions_and_toc() {
        let pages = brochure();
        assert_eq!(pages.len(), 7);
        assert_eq!(pages.toc_index(), Some(2));
        assert_eq!(pages.position_of(&"hotel".into()), Some(5));
        assert_eq!(pages.position_of(&"missing".into()), None);
        assert_eq!(pages.find(&"toc".into()).map(|p| p.id.as_str()), Some("toc"));
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let pages = PageList::from(vec![
            Page::new("dup", "blank"),
            Page::new("toc", "toc"),
            Page::new("dup", "itinerary"),
        ]);
        assert_eq!(pages.position_of(&"dup".into()), Some(0));
    }

    #[test]
    fn test_first_toc_wins() {
        let pages = PageList::from(vec![
            Page::new("a", "itinerary"),
            Page::new("t1", "toc"),
            Page::new("t2", "toc"),
        ]);
        assert_eq!(pages.toc_index(), Some(1));
    }

    #[test]
    fn test_no_toc() {
        let pages = PageList::from(vec![Page::new("c", "cover")]);
        assert_eq!(pages.toc_index(), None);
        assert!(PageList::new().is_empty());
    }

    #[test]
    fn test_daily_index() {
        let pages = brochure();
        assert_eq!(pages.daily_index(3), Some(0));
        assert_eq!(pages.daily_index(4), Some(1));
        assert_eq!(pages.daily_index(6), Some(7));
        assert_eq!(pages.daily_index(5), None);
        assert_eq!(pages.daily_index(99), None);
    }

    #[test]
    fn test_from_json() {
        let pages = PageList::from_json(
            r#"[{"id":"c","templateKey":"cover"},{"id":"t","templateKey":"toc"}]"#,
        )
        .unwrap();
        assert_eq!(pages.toc_index(), Some(1));

        assert!(PageList::from_json("{not json").is_err());
    }

    #[test]
    fn test_from_json_tolerates_missing_template_key() {
        let pages =
            PageList::from_json(r#"[{"id":"a","name":"x"},{"id":"t","templateKey":"toc"}]"#)
                .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages.toc_index(), Some(1));
        assert_eq!(
            crate::numbering::page_numbers(&pages),
            vec![Some(1), Some(2)]
        );
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let pages = PageList::from(vec![Page::new("t", "toc")]);
        let json = serde_json::to_string(&pages).unwrap();
        assert_eq!(json, r#"[{"id":"t","templateKey":"toc"}]"#);
    }
}
