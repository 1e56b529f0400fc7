//! Highlight span construction from matched character positions.
//!
//! The fuzzy matcher reports which character positions of a candidate were
//! matched. This module coalesces those positions into alternating runs of
//! matched and unmatched text, producing the typed span sequence the rendering
//! collaborator consumes. Consecutive matched characters collapse into a single
//! span so a query like `"ap"` against `"apple"` yields one `"ap"` run, not two
//! single-character runs.

use crate::domain::MatchSpan;

/// Builds the highlight span sequence for a candidate.
///
/// Walks the candidate's characters in order, starting a new span whenever the
/// matched/unmatched state flips relative to the previous character. Positions
/// in `indices` are character positions (not byte offsets), as reported by the
/// skim matcher, so multi-byte text is handled correctly.
///
/// # Parameters
///
/// * `text` - The original candidate string
/// * `indices` - Sorted character positions matched by the query
///
/// # Returns
///
/// Spans covering the entire candidate in order. Concatenating their text
/// reproduces `text` exactly. An empty `indices` slice yields a single
/// unmatched span (or no spans for an empty candidate).
pub fn spans_for(text: &str, indices: &[usize]) -> Vec<MatchSpan> {
    let mut spans: Vec<MatchSpan> = Vec::new();
    let mut run = String::new();
    let mut run_is_match = false;
    let mut next = indices.iter().copied().peekable();

    for (pos, ch) in text.chars().enumerate() {
        let is_match = next.peek() == Some(&pos);
        if is_match {
            next.next();
        }

        if run.is_empty() {
            run_is_match = is_match;
        } else if is_match != run_is_match {
            spans.push(MatchSpan::new(std::mem::take(&mut run), run_is_match));
            run_is_match = is_match;
        }
        run.push(ch);
    }

    if !run.is_empty() {
        spans.push(MatchSpan::new(run, run_is_match));
    }

    spans
}
