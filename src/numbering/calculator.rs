//! Page number assignment counted from the table of contents

use crate::document::{Page, PageId, PageList};

use super::NumberingRules;

/// Decide whether a page shows a printed number.
///
/// Covers never count. Blank pages before the ToC are binding filler and do
/// not count either. Everything else does, including the ToC itself and
/// blanks after it. A page whose id is not in the list sits before the ToC.
pub fn should_count_page_number(page: &Page, pages: &PageList) -> bool {
    if page.template_key.is_cover() {
        return false;
    }

    match pages.toc_index() {
        Some(toc) if page.template_key.is_blank() => match pages.position_of(&page.id) {
            Some(index) => index >= toc,
            None => false,
        },
        _ => true,
    }
}

/// Printed number of the page at `page_index`, if it has one.
///
/// Numbers run from 1 over countable pages only, so they stay contiguous no
/// matter how many covers or filler blanks come first.
pub fn calculate_page_number(page_index: usize, pages: &PageList) -> Option<u32> {
    let page = pages.get(page_index)?;
    if !should_count_page_number(page, pages) {
        return None;
    }

    let counted = pages.pages()[..=page_index]
        .iter()
        .filter(|p| should_count_page_number(p, pages))
        .count();
    Some(counted as u32)
}

/// Format with the default rules: `1 -> "p. 01"`, `100 -> "p. 100"`
pub fn format_page_number(number: u32) -> String {
    NumberingRules::default().format(number)
}

/// Page number for ToC listings, where "no number" is `0`
pub fn calculate_page_number_for_toc(page_id: &PageId, pages: &PageList) -> u32 {
    let Some(index) = pages.position_of(page_id) else {
        tracing::trace!(%page_id, "page not in list");
        return 0;
    };
    calculate_page_number(index, pages).unwrap_or(0)
}

/// Numbers for every page in one pass.
///
/// Same result as calling [`calculate_page_number`] for each index.
pub fn page_numbers(pages: &PageList) -> Vec<Option<u32>> {
    let mut next = 1;
    pages
        .iter()
        .map(|page| {
            if should_count_page_number(page, pages) {
                let number = next;
                next += 1;
                Some(number)
            } else {
                None
            }
        })
        .collect()
}
