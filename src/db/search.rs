//! Case-tolerant search over the frequency database.

use crate::db::FrequencyDb;

/// Resolve a raw user-entered name to a count.
///
/// Order matters: trim, exact lookup, then a single fallback that
/// uppercases only the first character ("peas" → "Peas"). Nothing else is
/// attempted — this is a narrow heuristic, not case-insensitive search,
/// so "PEAS" never matches "Peas". A miss is `Ok(None)`.
pub fn resolve(db: &FrequencyDb, raw: &str) -> crate::Result<Option<u64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Some(count) = db.get(trimmed)? {
        return Ok(Some(count));
    }

    match capitalized(trimmed) {
        Some(candidate) => db.get(&candidate),
        None => Ok(None),
    }
}

/// Uppercase the first character, leaving the rest untouched. Returns
/// `None` when that produces no new candidate (first character already
/// uppercase, or not a cased letter).
fn capitalized(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let upper: String = first.to_uppercase().collect();
    if upper.chars().eq(std::iter::once(first)) {
        return None;
    }
    Some(upper + chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> FrequencyDb {
        let mut db = FrequencyDb::new();
        db.ingest(
            ["Apple", "Banana", "Orange", "Apple", "Peas"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();
        db
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(resolve(&db(), "Banana").unwrap(), Some(1));
    }

    #[test]
    fn test_fallback_capitalizes_first_letter() {
        assert_eq!(resolve(&db(), "peas").unwrap(), Some(1));
        assert_eq!(resolve(&db(), "apple").unwrap(), Some(2));
    }

    #[test]
    fn test_trimmed_then_fallback() {
        // "  apple  " trims to "apple", falls back to "Apple".
        assert_eq!(resolve(&db(), "  apple  ").unwrap(), Some(2));
    }

    #[test]
    fn test_all_caps_never_matches() {
        // First character already uppercase: no second transformation.
        assert_eq!(resolve(&db(), "PEAS").unwrap(), None);
    }

    #[test]
    fn test_leading_digit_unchanged() {
        assert_eq!(resolve(&db(), "1peas").unwrap(), None);
    }

    #[test]
    fn test_empty_and_whitespace_query() {
        assert_eq!(resolve(&db(), "").unwrap(), None);
        assert_eq!(resolve(&db(), "   \t").unwrap(), None);
    }

    #[test]
    fn test_miss_is_not_an_error() {
        assert_eq!(resolve(&db(), "Durian").unwrap(), None);
    }

    #[test]
    fn test_capitalized_helper() {
        assert_eq!(capitalized("peas").as_deref(), Some("Peas"));
        assert_eq!(capitalized("PEAS"), None);
        assert_eq!(capitalized("1peas"), None);
    }
}
