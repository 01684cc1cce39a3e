//! Case- and accent-insensitive string ordering.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings on their base letters.
///
/// Letter case and diacritics are ignored, so `"Éclair"`, `"eclair"` and
/// `"ECLAIR"` compare equal.
pub fn collate(left: &str, right: &str) -> Ordering {
    fold(left).cmp(fold(right))
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case() {
        assert_eq!(collate("algebra", "ALGEBRA"), Ordering::Equal);
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn ignores_diacritics() {
        assert_eq!(collate("Éclair", "eclair"), Ordering::Equal);
        assert_eq!(collate("résumé", "resume"), Ordering::Equal);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(collate("", "a"), Ordering::Less);
        assert_eq!(collate("Intro", "Introduction"), Ordering::Less);
    }
}
