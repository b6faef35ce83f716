//! Formatting rules for printed page numbers

use serde::{Deserialize, Serialize};

const MAX_DIGITS: usize = u16::MAX as usize;

/// How a page number is rendered on the page and in the ToC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberingRules {
    /// Text placed before the number
    pub prefix: String,
    /// Minimum digit count; shorter numbers are zero-padded
    pub min_digits: usize,
}

impl Default for NumberingRules {
    fn default() -> Self {
        Self {
            prefix: "p. ".to_string(),
            min_digits: 2,
        }
    }
}

impl NumberingRules {
    /// Render a page number. Wider numbers are never truncated.
    ///
    /// Padding is capped at `u16::MAX` digits, the widest `format!` accepts.
    pub fn format(&self, number: u32) -> String {
        let width = self.min_digits.min(MAX_DIGITS);
        format!("{}{:0width$}", self.prefix, number, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = NumberingRules::default();
        assert_eq!(rules.format(1), "p. 01");
        assert_eq!(rules.format(12), "p. 12");
        assert_eq!(rules.format(100), "p. 100");
    }

    #[test]
    fn test_custom_rules() {
        let rules = NumberingRules {
            prefix: String::new(),
            min_digits: 3,
        };
        assert_eq!(rules.format(7), "007");
        assert_eq!(rules.format(1234), "1234");
    }

    #[test]
    fn test_oversized_width_is_capped() {
        let rules: NumberingRules = serde_json::from_str(r#"{"prefix":"","minDigits":70000}"#).unwrap();
        let formatted = rules.format(1);
        assert_eq!(formatted.len(), MAX_DIGITS);
        assert!(formatted.ends_with("01"));

        let rules = NumberingRules {
            prefix: "p. ".to_string(),
            min_digits: usize::MAX,
        };
        assert_eq!(rules.format(7).len(), 3 + MAX_DIGITS);
    }

    #[test]
    fn test_rules_from_partial_json() {
        let rules: NumberingRules = serde_json::from_str(r#"{"prefix":"P"}"#).unwrap();
        assert_eq!(rules.min_digits, 2);
        assert_eq!(rules.format(3), "P03");
    }
}
