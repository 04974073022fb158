//! Case-insensitive substring matching for listing pages.

/// A normalized search query.
///
/// Blank queries match everything. Matching lowercases both sides, so
/// `"PIZZA"` finds `"Veggie Supreme Pizza"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(Option<String>);

impl SearchQuery {
    /// Build a query from raw user input.
    #[must_use]
    pub fn new(raw: Option<&str>) -> Self {
        Self(
            raw.map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_lowercase),
        )
    }

    /// Whether the query is blank.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.0.is_none()
    }

    /// Whether `field` contains the query.
    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        self.0
            .as_deref()
            .is_none_or(|q| field.to_lowercase().contains(q))
    }

    /// Whether any of `fields` contains the query.
    #[must_use]
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.is_blank() {
            return true;
        }
        fields.into_iter().any(|field| self.matches(field))
    }
}

/// One-shot form of [`SearchQuery::matches_any`] for raw input.
#[must_use]
pub fn matches_query<'a>(query: Option<&str>, fields: impl IntoIterator<Item = &'a str>) -> bool {
    SearchQuery::new(query).matches_any(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_everything() {
        assert!(SearchQuery::new(None).matches("anything"));
        assert!(SearchQuery::new(Some("   ")).matches("anything"));
        assert!(SearchQuery::new(Some("")).matches_any(std::iter::empty::<&str>()));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let query = SearchQuery::new(Some("PiZ"));
        assert!(query.matches("Veggie Supreme Pizza"));
        assert!(!query.matches("Garlic Bread"));
    }

    #[test]
    fn test_matches_any() {
        let query = SearchQuery::new(Some("japanese"));
        assert!(query.matches_any(["Sushi Supreme", "Japanese"]));
        assert!(!query.matches_any(["Taco Town", "Mexican"]));
        assert!(!query.matches_any(std::iter::empty::<&str>()));
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query(Some("  "), ["Taco Town"]));
        assert!(matches_query(Some("TACO"), ["Taco Town"]));
        assert!(!matches_query(Some("curry"), ["Taco Town", "Mexican"]));
    }
}
