//! Accent and case folding shared by header resolution and the name filter.

use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Lowercase, decompose to NFD, drop combining diacritics and drop all whitespace.
///
/// `"Éléa Dupont"` folds to `"eleadupont"`.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c) && !c.is_whitespace())
        .collect()
}

/// Normalized key for a CSV header cell, e.g. `" Place par Catégorie "` -> `"placeparcategorie"`.
#[inline]
pub fn header_key(header: &str) -> String {
    fold(header.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_case_and_spaces() {
        assert_eq!(fold("Éléa Dupont"), "eleadupont");
        assert_eq!(fold("  JOSÉ  María\tÑúñez "), "josemarianunez");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn precomposed_and_decomposed_agree() {
        // U+00E9 vs 'e' + U+0301
        assert_eq!(fold("\u{e9}l\u{e8}ve"), fold("e\u{301}le\u{300}ve"));
    }

    #[test]
    fn header_variants_collapse() {
        for h in ["Catégorie", "CATÉGORIE", "categorie", " Caté gorie "] {
            assert_eq!(header_key(h), "categorie");
        }
        assert_eq!(header_key("Ecart par catégorie"), "ecartparcategorie");
        assert_eq!(header_key("Temps Puce"), "tempspuce");
    }
}
