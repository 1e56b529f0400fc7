//! Fuzzy match pipeline: score, order, and highlight candidates for a query.
//!
//! This module implements the component's matching contract. Given a query and
//! a candidate list it produces an ordered result list, best match first, with
//! each result carrying typed highlight spans for the matched characters.
//!
//! # Matching Algorithm
//!
//! Matching is approximate subsequence matching via the `fuzzy-matcher` crate's
//! Skim scorer: a candidate matches when every query character appears in it in
//! order, not necessarily contiguously. The scorer favors contiguous runs and
//! word-boundary hits and penalizes longer haystacks. Matching is
//! case-insensitive. Candidates the scorer rejects are dropped entirely rather
//! than ranked low.
//!
//! Exact score values are an implementation detail of the scorer; only the
//! relative ordering is part of the contract.
//!
//! # Modules
//!
//! - [`highlight`]: Coalesces matched character positions into spans

pub mod highlight;

use crate::domain::Match;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Runs the fuzzy matcher over the candidate list.
///
/// Pure function of its inputs: no side effects beyond trace logging, never
/// fails. An empty query or empty candidate list yields an empty result list.
///
/// # Parameters
///
/// * `query` - Current search term
/// * `candidates` - Ordered universe of searchable strings
///
/// # Returns
///
/// Matches in strictly non-increasing score order. Ties keep the candidates'
/// original relative order (the sort is stable). Every returned match is an
/// element of `candidates`; nothing is fabricated or mutated.
///
/// # Example
///
/// ```
/// use fuzzbox::matcher;
///
/// let candidates = vec![
///     "apple".to_string(),
///     "banana".to_string(),
///     "grape".to_string(),
/// ];
/// let results = matcher::rank("ap", &candidates);
/// assert_eq!(results[0].text, "apple");
/// assert!(results.iter().all(|m| m.text != "banana"));
/// ```
#[must_use]
pub fn rank(query: &str, candidates: &[String]) -> Vec<Match> {
    let _span = tracing::debug_span!("rank",
        query_len = query.len(),
        candidate_count = candidates.len()
    )
    .entered();

    if query.is_empty() {
        return vec![];
    }

    let matcher = SkimMatcherV2::default().ignore_case();

    let mut matches: Vec<Match> = candidates
        .iter()
        .filter_map(|candidate| {
            matcher
                .fuzzy_indices(candidate, query)
                .map(|(score, indices)| Match {
                    text: candidate.clone(),
                    spans: highlight::spans_for(candidate, &indices),
                    score,
                })
        })
        .collect();

    // Stable sort: equal scores keep candidate order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(result_count = matches.len(), "match pass completed");

    matches
}
