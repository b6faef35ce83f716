//! Table-of-contents items and the content rendered on the ToC page

use serde::{Deserialize, Serialize};

use crate::document::{PageId, PageList};
use crate::numbering::{calculate_page_number_for_toc, should_count_page_number};

/// A row in the ToC editor, pointing at a page of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocItem {
    pub page_id: PageId,
    pub display_name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// `0` when the page has no printed number
    #[serde(default)]
    pub page_number: u32,
}

fn enabled_by_default() -> bool {
    true
}

/// A line printed on the ToC page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub name: String,
    pub page: u32,
    pub icon: String,
}

/// Recompute every item's page number against the current page order
pub fn refresh_page_numbers(items: &mut [TocItem], pages: &PageList) {
    for item in items.iter_mut() {
        item.page_number = calculate_page_number_for_toc(&item.page_id, pages);
    }
}

/// Entries for the enabled items, in editor order
pub fn toc_content(items: &[TocItem]) -> Vec<TocEntry> {
    items
        .iter()
        .filter(|item| item.enabled)
        .map(|item| TocEntry {
            name: item.display_name.clone(),
            page: item.page_number,
            icon: item.icon.clone(),
        })
        .collect()
}

/// Default items: one per numbered content page (not the ToC, not blanks)
pub fn items_from_pages(pages: &PageList) -> Vec<TocItem> {
    let mut items: Vec<TocItem> = pages
        .iter()
        .filter(|page| !page.template_key.is_toc() && !page.template_key.is_blank())
        .filter(|page| should_count_page_number(page, pages))
        .map(|page| TocItem {
            page_id: page.id.clone(),
            display_name: page.display_name().to_string(),
            icon: String::new(),
            enabled: true,
            page_number: 0,
        })
        .collect();

    refresh_page_numbers(&mut items, pages);
    items
}
