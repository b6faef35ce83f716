//! WASM bindings for the page designer

pub mod flat_buffer;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::document::{PageId, PageList};
use crate::numbering::{self, NumberingRules};
use crate::toc::{self, TocItem};
use crate::PagingError;
use flat_buffer::NumberBuffer;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Format a number with the default rules ("p. 01")
#[wasm_bindgen(js_name = formatPageNumber)]
pub fn format_page_number(number: u32) -> String {
    numbering::format_page_number(number)
}

/// WASM-exposed numbering over a snapshot of the designer's pages
#[wasm_bindgen]
pub struct WasmPageNumbering {
    pages: PageList,
    rules: NumberingRules,
}

#[wasm_bindgen]
impl WasmPageNumbering {
    /// Create from the designer's JSON page array
    #[wasm_bindgen(constructor)]
    pub fn new(pages_json: &str) -> Result<WasmPageNumbering, JsValue> {
        let pages = PageList::from_json(pages_json).map_err(to_js_error)?;
        Ok(Self {
            pages,
            rules: NumberingRules::default(),
        })
    }

    /// Replace the page snapshot after the designer adds, moves or deletes pages
    #[wasm_bindgen(js_name = setPages)]
    pub fn set_pages(&mut self, pages_json: &str) -> Result<(), JsValue> {
        self.pages = PageList::from_json(pages_json).map_err(to_js_error)?;
        Ok(())
    }

    /// Change the number prefix and minimum digit count
    #[wasm_bindgen(js_name = setRules)]
    pub fn set_rules(&mut self, prefix: &str, min_digits: usize) {
        self.rules = NumberingRules {
            prefix: prefix.to_string(),
            min_digits,
        };
    }

    /// Number of pages in the snapshot
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the page with this id shows a number
    #[wasm_bindgen(js_name = shouldCount)]
    pub fn should_count(&self, page_id: &str) -> bool {
        self.pages
            .find(&PageId::from(page_id))
            .map(|page| numbering::should_count_page_number(page, &self.pages))
            .unwrap_or(false)
    }

    /// Printed number of the page at `index`, or undefined
    #[wasm_bindgen(js_name = pageNumber)]
    pub fn page_number(&self, index: usize) -> Option<u32> {
        numbering::calculate_page_number(index, &self.pages)
    }

    /// Printed number for ToC listings; 0 when there is none
    #[wasm_bindgen(js_name = pageNumberForToc)]
    pub fn page_number_for_toc(&self, page_id: &str) -> u32 {
        numbering::calculate_page_number_for_toc(&PageId::from(page_id), &self.pages)
    }

    /// Formatted number of the page at `index`, or undefined
    #[wasm_bindgen(js_name = formattedPageNumber)]
    pub fn formatted_page_number(&self, index: usize) -> Option<String> {
        self.page_number(index).map(|n| self.rules.format(n))
    }

    /// Day number of a `daily` page, or undefined
    #[wasm_bindgen(js_name = dailyIndex)]
    pub fn daily_index(&self, index: usize) -> Option<u32> {
        self.pages.daily_index(index)
    }

    /// All page numbers as a JS array (null for unnumbered pages)
    #[wasm_bindgen(js_name = pageNumbers)]
    pub fn page_numbers(&self) -> Result<JsValue, JsValue> {
        to_js_value(&numbering::page_numbers(&self.pages))
    }

    /// All page numbers as a flat `Uint32Array` (see `flat_buffer`)
    #[wasm_bindgen(js_name = numberBuffer)]
    pub fn number_buffer(&self) -> js_sys::Uint32Array {
        let buffer = NumberBuffer::encode(&self.pages);
        js_sys::Uint32Array::from(buffer.as_slice())
    }

    /// Default ToC items for the current pages
    #[wasm_bindgen(js_name = defaultTocItems)]
    pub fn default_toc_items(&self) -> Result<JsValue, JsValue> {
        to_js_value(&toc::items_from_pages(&self.pages))
    }

    /// Refresh the page numbers of the given ToC items
    #[wasm_bindgen(js_name = refreshToc)]
    pub fn refresh_toc(&self, items_json: &str) -> Result<JsValue, JsValue> {
        let mut items = parse_items(items_json)?;
        toc::refresh_page_numbers(&mut items, &self.pages);
        to_js_value(&items)
    }

    /// Content for the ToC page: enabled items as `{ name, page, icon }`
    #[wasm_bindgen(js_name = tocContent)]
    pub fn toc_content(&self, items_json: &str) -> Result<JsValue, JsValue> {
        let items = parse_items(items_json)?;
        to_js_value(&toc::toc_content(&items))
    }
}

fn parse_items(items_json: &str) -> Result<Vec<TocItem>, JsValue> {
    serde_json::from_str(items_json)
        .map_err(PagingError::from)
        .map_err(to_js_error)
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value)
        .map_err(PagingError::from)
        .map_err(to_js_error)?;
    js_sys::JSON::parse(&json)
}

fn to_js_error(err: PagingError) -> JsValue {
    tracing::debug!(%err, "rejecting input from JS");
    js_sys::Error::new(&err.to_string()).into()
}
