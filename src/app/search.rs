//! Search term ownership and profile filtering.
//!
//! The search term is interpreted as a case-insensitive regular expression and
//! tested against three derived fields of every profile: the email address,
//! `"First Last"` and `"City, State"`. A profile is kept if any field matches.
//! The empty term matches everything.
//!
//! A term that is not a valid regular expression (for example a lone `(` typed
//! on the way to `(555)`) is matched as literal text instead, so every
//! keystroke produces a result.

use crate::domain::ProfileRecord;
use crate::store::ProfileStore;
use regex::{Regex, RegexBuilder};

/// Owns the search query and the compiled matcher derived from it.
#[derive(Debug, Clone)]
pub struct SearchController {
    query: String,
    matcher: Option<Regex>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::with_query("")
    }
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller whose query is already set to `term`.
    #[must_use]
    pub fn with_query(term: &str) -> Self {
        Self {
            query: term.to_string(),
            matcher: build_matcher(term),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, term: &str) {
        self.query = term.to_string();
        self.matcher = build_matcher(term);
    }

    /// Appends one typed character.
    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.matcher = build_matcher(&self.query);
    }

    /// Removes the last character. Returns `false` if the query was already empty.
    pub fn pop(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.matcher = build_matcher(&self.query);
        true
    }

    pub fn clear(&mut self) {
        self.set_query("");
    }

    /// Returns `true` if any searchable field of `profile` matches the query.
    #[must_use]
    pub fn matches(&self, profile: &ProfileRecord) -> bool {
        let Some(matcher) = &self.matcher else {
            return false;
        };

        matcher.is_match(&profile.email)
            || matcher.is_match(&profile.full_name())
            || matcher.is_match(&profile.location())
    }

    /// Returns the matching profiles with their store indices, in store order.
    pub fn filter<'a>(&self, store: &'a ProfileStore) -> Vec<(usize, &'a ProfileRecord)> {
        let _span = tracing::debug_span!(
            "filter_profiles",
            total_profiles = store.len(),
            query_len = self.query.len()
        )
        .entered();

        let subset: Vec<(usize, &ProfileRecord)> =
            store.all().filter(|(_, profile)| self.matches(profile)).collect();

        tracing::debug!(matched = subset.len(), "search filter applied");
        subset
    }

    /// Computes `(start, end)` character ranges of the query's matches in `text`.
    ///
    /// Used to highlight matches on cards. Empty matches produce no range, so
    /// the empty query highlights nothing.
    #[must_use]
    pub fn highlight_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        let Some(matcher) = &self.matcher else {
            return vec![];
        };
        if self.query.is_empty() {
            return vec![];
        }

        matcher
            .find_iter(text)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| {
                let start = text[..m.start()].chars().count();
                (start, start + m.as_str().chars().count())
            })
            .collect()
    }
}

/// Compiles `term` as a case-insensitive pattern, falling back to literal text.
fn build_matcher(term: &str) -> Option<Regex> {
    RegexBuilder::new(term)
        .case_insensitive(true)
        .build()
        .or_else(|e| {
            tracing::debug!(term = %term, error = %e, "invalid search pattern, matching literally");
            RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()
        })
        .map_err(|e| tracing::warn!(term = %term, error = %e, "search term could not be compiled"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str, email: &str, city: &str, state: &str) -> ProfileRecord {
        ProfileRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            ..ProfileRecord::default()
        }
    }

    fn store() -> ProfileStore {
        let mut store = ProfileStore::new();
        store.load(vec![
            profile("Alice", "Smith", "alice@example.com", "Boston", "Massachusetts"),
            profile("Bob", "Jones", "bob@example.org", "Austin", "Texas"),
            profile("Carol", "White", "carol@example.com", "Boston", "Massachusetts"),
        ]);
        store
    }

    fn indices(subset: &[(usize, &ProfileRecord)]) -> Vec<usize> {
        subset.iter().map(|(i, _)| *i).collect()
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let store = store();
        let search = SearchController::new();
        assert_eq!(indices(&search.filter(&store)), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let store = store();
        let search = SearchController::with_query("zzz-nobody");
        assert!(search.filter(&store).is_empty());
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let store = store();
        let search = SearchController::with_query("SMITH");
        assert_eq!(indices(&search.filter(&store)), vec![0]);
    }

    #[test]
    fn test_location_match_keeps_store_indices() {
        let store = store();
        let search = SearchController::with_query("boston");
        assert_eq!(indices(&search.filter(&store)), vec![0, 2]);
    }

    #[test]
    fn test_full_name_spans_first_and_last() {
        let store = store();
        let search = SearchController::with_query("bob jo");
        assert_eq!(indices(&search.filter(&store)), vec![1]);
    }

    #[test]
    fn test_email_match() {
        let store = store();
        let search = SearchController::with_query("example.org");
        assert_eq!(indices(&search.filter(&store)), vec![1]);
    }

    #[test]
    fn test_location_separator_is_searchable() {
        let store = store();
        let search = SearchController::with_query("austin, tex");
        assert_eq!(indices(&search.filter(&store)), vec![1]);
    }

    #[test]
    fn test_regex_syntax_is_honoured() {
        let store = store();
        let search = SearchController::with_query("^(alice|carol)@");
        assert_eq!(indices(&search.filter(&store)), vec![0, 2]);
    }

    #[test]
    fn test_invalid_regex_falls_back_to_literal() {
        let mut store = ProfileStore::new();
        store.load(vec![profile("Dee", "(Dotty)", "d@example.com", "Reno", "Nevada")]);

        let search = SearchController::with_query("(dot");
        assert_eq!(indices(&search.filter(&store)), vec![0]);

        let search = SearchController::with_query("[");
        assert!(search.filter(&store).is_empty());
    }

    #[test]
    fn test_push_and_pop_refilter() {
        let store = store();
        let mut search = SearchController::new();
        for c in "bos".chars() {
            search.push(c);
        }
        assert_eq!(search.query(), "bos");
        assert_eq!(indices(&search.filter(&store)), vec![0, 2]);

        search.clear();
        assert!(!search.pop());
        assert_eq!(indices(&search.filter(&store)), vec![0, 1, 2]);
    }

    #[test]
    fn test_highlight_ranges_are_char_based() {
        let search = SearchController::with_query("zo");
        assert_eq!(search.highlight_ranges("Zoë Zola"), vec![(0, 2), (4, 6)]);

        let search = SearchController::with_query("ë z");
        assert_eq!(search.highlight_ranges("Zoë Zola"), vec![(2, 5)]);
    }

    #[test]
    fn test_empty_query_highlights_nothing() {
        let search = SearchController::new();
        assert!(search.highlight_ranges("Alice Smith").is_empty());
    }
}
