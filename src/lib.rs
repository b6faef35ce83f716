//! Brochure Paging: printed page numbers for designed travel brochures
//!
//! This crate provides the numbering core behind the page designer:
//! - Page numbering counted from the table of contents
//! - Table-of-contents items kept in sync with page order
//! - WASM bindings for the web designer
//!
//! Covers are never numbered, and blank filler pages before the ToC are
//! skipped, so the ToC is normally page 1.

pub mod document;
pub mod error;
pub mod numbering;
pub mod toc;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPageNumbering;

// Re-export primary types
pub use document::{Page, PageId, PageList, TemplateKey};
pub use error::PagingError;
pub use numbering::{
    calculate_page_number, calculate_page_number_for_toc, format_page_number, page_numbers,
    should_count_page_number, NumberingRules,
};
pub use toc::{TocEntry, TocItem};
