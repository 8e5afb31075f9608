// crates/traveldb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Bālī` -> `Bali`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use traveldb_core::text::fold_key;
///
/// assert_eq!(fold_key("Bālī"), "bali");
/// assert_eq!(fold_key("CANCÚN"), "cancun");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// This enables matching strings that differ only in diacritics or case.
///
/// # Examples
///
/// ```rust
/// use traveldb_core::text::equals_folded;
///
/// assert!(equals_folded("Cancún", "cancun"));
/// assert!(equals_folded("KYOTO", "kyoto"));
/// assert!(!equals_folded("Bali", "Kyoto"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_lowercases_and_strips_accents() {
        assert_eq!(fold_key("Cancún Beach"), "cancun beach");
        assert_eq!(fold_key("TAJ MAHAL"), "taj mahal");
    }

    #[test]
    fn equals_folded_ignores_case_and_diacritics() {
        assert!(equals_folded("Bora Borá", "bora bora"));
        assert!(!equals_folded("beach", "temple"));
    }
}
