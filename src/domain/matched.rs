//! Match domain model: a candidate that satisfied the fuzzy query.
//!
//! This module defines the core [`Match`] type, pairing an original candidate
//! string with its highlight spans, and [`MatchSpan`], the typed "marked string"
//! segment that replaces raw markup injection. The rendering collaborator decides
//! how matched spans become visual emphasis; the core never produces HTML.
//!
//! Both types serialize, so hosts can ship result lists across process or
//! worker boundaries as-is.

use serde::{Deserialize, Serialize};

/// One contiguous run of characters within a matched candidate.
///
/// A candidate's highlight form is a sequence of spans alternating between
/// matched and unmatched runs. Concatenating the `text` of every span in order
/// reproduces the original candidate string exactly; no characters are added,
/// escaped, or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// The run's text, a substring of the original candidate.
    pub text: String,

    /// Whether every character in this run was matched by the query.
    pub is_match: bool,
}

impl MatchSpan {
    /// Creates a span from a run of characters and its match flag.
    #[must_use]
    pub fn new(text: impl Into<String>, is_match: bool) -> Self {
        Self {
            text: text.into(),
            is_match,
        }
    }
}

/// A candidate that satisfied the fuzzy query.
///
/// Holds the original string, its highlight spans, and the matcher's score.
/// Rank is implicit: a match's position in the result list is its rank, best
/// match first. Matches are recomputed wholesale on every query change.
///
/// # Examples
///
/// ```
/// use fuzzbox::matcher;
///
/// let candidates = vec!["apple".to_string(), "grape".to_string()];
/// let results = matcher::rank("ap", &candidates);
/// assert_eq!(results[0].text, "apple");
/// assert_eq!(results[0].bare(), "apple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The original candidate string, untouched.
    pub text: String,

    /// Highlight runs covering the whole candidate, in order.
    pub spans: Vec<MatchSpan>,

    /// Relevance score from the fuzzy matcher.
    ///
    /// Only relative order between scores is meaningful; exact values are an
    /// implementation detail of the scoring heuristic.
    pub score: i64,
}

impl Match {
    /// Returns the bare candidate string.
    ///
    /// This is the value carried by selection notifications: the original
    /// string without any highlight information.
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_concatenation_reproduces_text() {
        let m = Match {
            text: "apple".to_string(),
            spans: vec![
                MatchSpan::new("ap", true),
                MatchSpan::new("ple", false),
            ],
            score: 10,
        };
        let rebuilt: String = m.spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, m.text);
    }

    #[test]
    fn bare_returns_original_string() {
        let m = Match {
            text: "banana".to_string(),
            spans: vec![MatchSpan::new("banana", false)],
            score: 0,
        };
        assert_eq!(m.bare(), "banana");
    }
}
