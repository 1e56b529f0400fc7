//! View model types representing renderable component state.
//!
//! This module defines the immutable view model computed from component state.
//! The rendering collaborator consumes it to draw the search box; it contains
//! no business logic, only display-ready data: the query text, the ordered
//! result items with their highlight spans, and the cursor position.

use crate::app::SearchBox;
use crate::domain::MatchSpan;

/// Complete view model for one render pass.
///
/// Computed from a [`SearchBox`] snapshot after the host is told its view is
/// stale. Replaced wholesale; the renderer never diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxView {
    /// Current query text, for the input field.
    pub query: String,

    /// Ordered result items, best match first.
    pub items: Vec<DisplayItem>,

    /// Index of the keyboard-highlighted item, if any.
    ///
    /// Always within bounds of `items` when `Some`.
    pub cursor: Option<usize>,
}

/// Display information for a single result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// The bare candidate string.
    pub text: String,

    /// Highlight runs covering the whole string, in order.
    pub spans: Vec<MatchSpan>,

    /// Whether the cursor is on this row.
    pub is_cursor: bool,
}

impl SearchBoxView {
    /// Computes a view model from current component state.
    ///
    /// # Example
    ///
    /// ```
    /// use fuzzbox::app::SearchBox;
    /// use fuzzbox::ui::SearchBoxView;
    ///
    /// let mut component = SearchBox::new(vec!["apple".to_string()]);
    /// component.set_query("ap");
    /// let view = SearchBoxView::from_state(&component);
    /// assert_eq!(view.items.len(), 1);
    /// assert_eq!(view.cursor, None);
    /// ```
    #[must_use]
    pub fn from_state(state: &SearchBox) -> Self {
        let cursor = state.cursor();
        let items = state
            .results()
            .iter()
            .enumerate()
            .map(|(index, m)| DisplayItem {
                text: m.text.clone(),
                spans: m.spans.clone(),
                is_cursor: cursor == Some(index),
            })
            .collect();

        Self {
            query: state.query().to_string(),
            items,
            cursor,
        }
    }
}
