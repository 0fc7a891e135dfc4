//! Script detection and language-keyed text

pub mod catalog;

pub use catalog::{Catalog, Messages};

use crate::types::Language;

/// Arabic block, U+0600..=U+06FF
fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

/// Classify text by script: any Arabic-block character selects Arabic.
pub fn classify(text: &str) -> Language {
    if text.chars().any(is_arabic) {
        Language::Arabic
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_is_default() {
        assert_eq!(classify("ADNOC"), Language::English);
        assert_eq!(classify(""), Language::English);
        assert_eq!(classify("Émirates Café 2024"), Language::English);
    }

    #[test]
    fn test_arabic_detected() {
        assert_eq!(classify("أدنوك"), Language::Arabic);
        assert_eq!(classify("الشركة العربية المتحدة"), Language::Arabic);
    }

    #[test]
    fn test_presence_not_majority() {
        assert_eq!(classify("ADNOC Group ش"), Language::Arabic);
        // Arabic-Indic digit zero, still inside the block
        assert_eq!(classify("Tower \u{0660}"), Language::Arabic);
    }

    #[test]
    fn test_block_edges() {
        assert_eq!(classify("\u{0600}"), Language::Arabic);
        assert_eq!(classify("\u{06FF}"), Language::Arabic);
        // Arabic Supplement sits outside the block
        assert_eq!(classify("\u{0750}"), Language::English);
        assert_eq!(classify("\u{05FF}"), Language::English);
    }
}
