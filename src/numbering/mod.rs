//! Printed page numbering for designed documents

mod calculator;
mod rules;

pub use calculator::{
    calculate_page_number, calculate_page_number_for_toc, format_page_number, page_numbers,
    should_count_page_number,
};
pub use rules::NumberingRules;
