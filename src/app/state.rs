//! Component state management.
//!
//! This module defines [`SearchBox`], the central state container for the
//! component, along with methods for query updates, cursor navigation, and
//! selection commits. It is the single source of truth for all component state.
//!
//! # State Components
//!
//! - **Candidates**: Ordered universe of searchable strings, replaced wholesale
//!   when the data source delivers
//! - **Query**: Current search term, mutated on every input event
//! - **Results**: Ordered match list for the current query, replaced wholesale
//!   on every match pass
//! - **Cursor**: Keyboard-highlighted result index, `None` when nothing is
//!   highlighted
//! - **Selection**: The committed result string, surviving result-list changes
//!   until the next commit
//!
//! # Invariants
//!
//! The cursor is always valid for the current result list: it resets to `None`
//! whenever the result list is replaced, and navigation arithmetic is modular
//! and guarded against an empty list. No out-of-range index is observable.

use crate::app::subscription::{KeyRegistration, KeySubscription};
use crate::domain::Match;
use crate::matcher;
use std::rc::Rc;

/// Central component state container.
///
/// Holds the candidate set, query, computed results, cursor, and committed
/// selection. Mutated by the event handler in response to host events; view
/// models are computed on demand from state snapshots.
///
/// # Example
///
/// ```
/// use fuzzbox::app::SearchBox;
///
/// let mut component = SearchBox::new(vec![
///     "apple".to_string(),
///     "banana".to_string(),
/// ]);
/// component.set_query("ap");
/// assert_eq!(component.results().len(), 1);
/// assert_eq!(component.cursor(), None);
/// ```
#[derive(Debug, Clone)]
pub struct SearchBox {
    /// Ordered universe of searchable strings.
    ///
    /// Owned by the data-source collaborator conceptually: replaced wholesale
    /// by `replace_candidates`, read-only to the matching pipeline.
    candidates: Vec<String>,

    /// Current search term.
    query: String,

    /// Ordered match list for the current query, best match first.
    ///
    /// Its length is the sole bound for cursor arithmetic.
    results: Vec<Match>,

    /// Keyboard-highlighted result index. `None` means nothing highlighted.
    cursor: Option<usize>,

    /// The committed result string, if any.
    selection: Option<String>,

    /// Registration state shared with key subscription handles.
    keys: Rc<KeyRegistration>,
}

impl SearchBox {
    /// Creates a component with an initial candidate set and empty query.
    ///
    /// The result list starts empty (an empty query matches nothing), the
    /// cursor is unset, and no selection exists. Key handling is inert until
    /// [`subscribe_keys`](Self::subscribe_keys) is called.
    #[must_use]
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            query: String::new(),
            results: vec![],
            cursor: None,
            selection: None,
            keys: Rc::new(KeyRegistration::default()),
        }
    }

    /// Current search term.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current candidate set.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Ordered match list for the current query.
    #[must_use]
    pub fn results(&self) -> &[Match] {
        &self.results
    }

    /// Keyboard-highlighted result index, if any.
    ///
    /// Always within `[0, results.len() - 1]` when `Some`.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The last committed selection, if any.
    ///
    /// Survives query edits and candidate reloads until the next commit.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Sets the query and recomputes the result list.
    ///
    /// Equivalent to handling an `Input` event: one match pass, cursor reset.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_results();
    }

    /// Appends one character to the query and recomputes the result list.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_results();
    }

    /// Removes the last query character and recomputes the result list.
    ///
    /// No-op on an already-empty query beyond the (trivial) match pass.
    pub fn pop_char(&mut self) {
        self.query.pop();
        self.refresh_results();
    }

    /// Replaces the candidate set wholesale and recomputes the result list.
    ///
    /// Last load wins: a later delivery overwrites an earlier one. The current
    /// query is re-run against the new candidates, matching the original
    /// fetch-then-search flow.
    pub fn replace_candidates(&mut self, candidates: Vec<String>) {
        tracing::debug!(candidate_count = candidates.len(), "candidate set replaced");
        self.candidates = candidates;
        self.refresh_results();
    }

    /// Runs one match pass over the current query and candidates.
    ///
    /// This is the single downstream recomputation entry point: every state
    /// mutation that invalidates the result list funnels through here exactly
    /// once. The cursor resets to `None` because the new list generally has no
    /// row corresponding to the previously highlighted one; the selection is
    /// left untouched.
    pub fn refresh_results(&mut self) {
        self.results = matcher::rank(&self.query, &self.candidates);
        self.cursor = None;
    }

    /// Moves the cursor down one row, wrapping to the top past the end.
    ///
    /// From the unset position the cursor lands on the first row. Guarded
    /// no-op when the result list is empty.
    pub fn move_cursor_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            None => 0,
            Some(i) => (i + 1) % self.results.len(),
        });
    }

    /// Moves the cursor up one row, wrapping to the bottom past the start.
    ///
    /// From the unset position the cursor lands on the last row, matching the
    /// mathematical-modulo convention for `-1 mod N`. Guarded no-op when the
    /// result list is empty.
    pub fn move_cursor_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            None | Some(0) => self.results.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Returns the match under the cursor, if any.
    #[must_use]
    pub fn cursor_match(&self) -> Option<&Match> {
        self.cursor.and_then(|i| self.results.get(i))
    }

    /// Commits the result under the cursor.
    ///
    /// Returns the committed bare string, or `None` when no row is highlighted
    /// (in which case nothing changes).
    pub fn commit_cursor(&mut self) -> Option<String> {
        let text = self.cursor_match()?.text.clone();
        self.selection = Some(text.clone());
        Some(text)
    }

    /// Commits the result at `index` directly, bypassing the cursor.
    ///
    /// Used for item activation (click) from the rendering collaborator.
    /// Returns `None` for an out-of-range index, leaving state unchanged.
    pub fn commit_index(&mut self, index: usize) -> Option<String> {
        let text = self.results.get(index)?.text.clone();
        self.selection = Some(text.clone());
        Some(text)
    }

    /// Arms key handling and returns the subscription guard.
    ///
    /// Navigation and submit events are processed only while the returned
    /// handle is alive; dropping it detaches key handling deterministically.
    /// A fresh call supersedes any older handle, which then releases nothing
    /// on drop.
    pub fn subscribe_keys(&mut self) -> KeySubscription {
        tracing::debug!("key subscription acquired");
        KeySubscription::new(Rc::clone(&self.keys))
    }

    /// Whether a key subscription is currently live.
    #[must_use]
    pub fn keys_live(&self) -> bool {
        self.keys.is_live()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component_with_results(n: usize) -> SearchBox {
        let candidates: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
        let mut component = SearchBox::new(candidates);
        component.set_query("item");
        assert_eq!(component.results().len(), n);
        component
    }

    #[test]
    fn new_component_has_no_results_cursor_or_selection() {
        let component = SearchBox::new(vec!["apple".to_string()]);
        assert!(component.results().is_empty());
        assert_eq!(component.cursor(), None);
        assert_eq!(component.selection(), None);
    }

    #[test]
    fn cursor_up_from_unset_wraps_to_last() {
        let mut component = component_with_results(5);
        component.move_cursor_up();
        assert_eq!(component.cursor(), Some(4));
    }

    #[test]
    fn cursor_down_from_last_wraps_to_first() {
        let mut component = component_with_results(5);
        component.move_cursor_up(); // lands on 4
        component.move_cursor_down();
        assert_eq!(component.cursor(), Some(0));
    }

    #[test]
    fn cursor_down_from_unset_lands_on_first() {
        let mut component = component_with_results(3);
        component.move_cursor_down();
        assert_eq!(component.cursor(), Some(0));
    }

    #[test]
    fn arrows_on_empty_results_are_noops() {
        let mut component = SearchBox::new(vec![]);
        component.move_cursor_down();
        assert_eq!(component.cursor(), None);
        component.move_cursor_up();
        assert_eq!(component.cursor(), None);
    }

    #[test]
    fn requery_resets_cursor() {
        let mut component = component_with_results(3);
        component.move_cursor_down();
        assert_eq!(component.cursor(), Some(0));
        component.push_char('-');
        assert_eq!(component.cursor(), None);
    }

    #[test]
    fn cursor_never_exceeds_shrunken_result_list() {
        let mut component = component_with_results(3);
        component.move_cursor_up();
        assert_eq!(component.cursor(), Some(2));
        component.set_query("item-1");
        assert_eq!(component.results().len(), 1);
        assert!(component.cursor().map_or(true, |i| i < 1));
    }

    #[test]
    fn commit_cursor_without_highlight_is_noop() {
        let mut component = component_with_results(3);
        assert_eq!(component.commit_cursor(), None);
        assert_eq!(component.selection(), None);
    }

    #[test]
    fn commit_cursor_stores_bare_string() {
        let mut component = component_with_results(3);
        component.move_cursor_down();
        component.move_cursor_down();
        let committed = component.commit_cursor();
        assert_eq!(committed.as_deref(), Some("item-1"));
        assert_eq!(component.selection(), Some("item-1"));
    }

    #[test]
    fn commit_index_bypasses_cursor() {
        let mut component = component_with_results(3);
        component.move_cursor_down(); // cursor on 0
        let committed = component.commit_index(2);
        assert_eq!(committed.as_deref(), Some("item-2"));
        assert_eq!(component.selection(), Some("item-2"));
    }

    #[test]
    fn commit_index_out_of_range_is_noop() {
        let mut component = component_with_results(2);
        assert_eq!(component.commit_index(7), None);
        assert_eq!(component.selection(), None);
    }

    #[test]
    fn selection_survives_requery_until_next_commit() {
        let mut component = component_with_results(3);
        component.move_cursor_down();
        component.commit_cursor();
        assert_eq!(component.selection(), Some("item-0"));

        component.set_query("nothing-matches-this");
        assert!(component.results().is_empty());
        assert_eq!(component.selection(), Some("item-0"));
    }

    #[test]
    fn replace_candidates_reruns_current_query() {
        let mut component = SearchBox::new(vec![]);
        component.set_query("ap");
        assert!(component.results().is_empty());

        component.replace_candidates(vec!["apple".to_string(), "pear".to_string()]);
        assert_eq!(component.results().len(), 1);
        assert_eq!(component.results()[0].text, "apple");
    }
}
