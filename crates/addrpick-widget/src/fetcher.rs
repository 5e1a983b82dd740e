//! Suggestion fetching: threshold gating and staleness tokens.

use addrpick_core::SuggestionItem;

use crate::error::ProviderError;
use crate::provider::GeocodeProvider;

/// Queries shorter than this (in characters, after trimming) never reach the
/// provider.
pub const MIN_QUERY_CHARS: usize = 3;

/// Trimmed search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, so `"Å"` counts as one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn meets_threshold(&self) -> bool {
        self.len() >= MIN_QUERY_CHARS
    }
}

/// Identifies one dispatched search. Tokens only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryToken(u64);

/// Issues tokens and remembers the most recent one.
#[derive(Debug, Default)]
pub struct QueryTokens {
    latest: u64,
}

impl QueryTokens {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token, superseding every earlier one.
    pub fn issue(&mut self) -> QueryToken {
        self.latest += 1;
        QueryToken(self.latest)
    }

    /// Supersedes every outstanding token without dispatching anything.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    #[must_use]
    pub fn is_current(&self, token: QueryToken) -> bool {
        token.0 == self.latest
    }
}

/// Result of one suggestion fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The query was below the threshold; no request was made.
    Skipped,
    Loaded(Vec<SuggestionItem>),
    Failed(ProviderError),
}

/// Fetches suggestions for `query`, short-circuiting short queries.
pub async fn fetch_suggestions<G: GeocodeProvider>(provider: &G, query: &Query) -> FetchOutcome {
    if !query.meets_threshold() {
        return FetchOutcome::Skipped;
    }
    match provider.autocomplete(query.as_str()).await {
        Ok(items) => FetchOutcome::Loaded(items),
        Err(err) => FetchOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let q = Query::new("  Vestergade  ");
        assert_eq!(q.as_str(), "Vestergade");
        assert_eq!(q.len(), 10);
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(!Query::new("Åø").meets_threshold());
        assert!(Query::new("Åøæ").meets_threshold());
    }

    #[test]
    fn whitespace_only_is_empty_and_below_threshold() {
        let q = Query::new("     ");
        assert!(q.is_empty());
        assert!(!q.meets_threshold());
    }

    #[test]
    fn newest_token_is_current() {
        let mut tokens = QueryTokens::new();
        let first = tokens.issue();
        assert!(tokens.is_current(first));

        let second = tokens.issue();
        assert!(second > first);
        assert!(!tokens.is_current(first));
        assert!(tokens.is_current(second));
    }

    #[test]
    fn invalidate_supersedes_outstanding_token() {
        let mut tokens = QueryTokens::new();
        let token = tokens.issue();
        tokens.invalidate();
        assert!(!tokens.is_current(token));
    }
}
