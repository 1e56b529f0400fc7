//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes host input and
//! data-source outcomes, translating them into state changes and notification
//! sequences. It is the component's single entry point for mutations, so every
//! event causes at most one downstream match pass.
//!
//! # Event Types
//!
//! Events fall into three categories:
//! - **Query edits**: `Input`, `Char`, `Backspace` rerun the matcher
//! - **Navigation/commit**: `CursorDown`, `CursorUp`, `Submit`, and
//!   `Activate` move the cursor or commit a selection
//! - **Data source**: `CandidatesLoaded` and `LoadFailed` replace or keep
//!   the candidate set
//!
//! Keys the host does not map to one of these events are simply never
//! forwarded; "any other key" is a no-op by construction.
//!
//! # Example
//!
//! ```
//! use fuzzbox::app::{handle_event, Event, Notification, SearchBox};
//!
//! let mut component = SearchBox::new(vec!["apple".to_string()]);
//! let (stale, notifications) =
//!     handle_event(&mut component, &Event::Input("ap".to_string()))?;
//! assert!(stale);
//! assert_eq!(notifications, vec![Notification::ResultsChanged]);
//! # Ok::<(), fuzzbox::FuzzboxError>(())
//! ```

use crate::app::{Notification, SearchBox};
use crate::domain::error::Result;

/// Events delivered to the component by the embedding host.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and notification emissions. The handler processes them sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the query with the input field's full text.
    ///
    /// Sent by the rendering collaborator on every input change.
    Input(String),

    /// Appends a character to the query.
    ///
    /// Convenience for hosts that deliver keystrokes instead of full text.
    Char(char),

    /// Removes the last character from the query.
    Backspace,

    /// Moves the cursor down one result (wraps to the top).
    CursorDown,

    /// Moves the cursor up one result (wraps to the bottom).
    CursorUp,

    /// Commits the result under the cursor (Enter).
    Submit,

    /// Commits the result at the given index directly (item click).
    ///
    /// Bypasses the cursor entirely; the index is the item's position in the
    /// current result list as rendered.
    Activate(usize),

    /// Delivers a freshly loaded candidate set.
    ///
    /// Sent by the data-source collaborator once its one-shot load completes.
    /// Replaces the candidate set wholesale; last load wins.
    CandidatesLoaded(Vec<String>),

    /// Reports a candidate load failure.
    ///
    /// Logged at the boundary; the candidate set is left as it was. Not fatal
    /// and not retried.
    LoadFailed {
        /// Error message describing the failure.
        error: String,
    },
}

/// Processes an event, mutates component state, and returns notifications.
///
/// # Parameters
///
/// * `state` - Mutable reference to component state
/// * `event` - Event to process
///
/// # Returns
///
/// A `(stale, notifications)` pair: `stale` tells the host its rendered view
/// no longer reflects state, and `notifications` carries the observable
/// events in emission order. Both may be empty/false for guarded no-ops.
///
/// # Errors
///
/// None of the current transitions fail; the `Result` return keeps the
/// signature stable for hosts that thread errors through their event loop.
///
/// # Guards
///
/// Navigation and submit events (`CursorDown`, `CursorUp`, `Submit`) are
/// processed only while a key subscription is live; otherwise they are
/// no-ops. Navigation on an empty result list is likewise a no-op, never an
/// error.
pub fn handle_event(state: &mut SearchBox, event: &Event) -> Result<(bool, Vec<Notification>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Input(text) => {
            state.set_query(text.clone());
            tracing::trace!(query = %state.query(), "query replaced");
            Ok((true, vec![Notification::ResultsChanged]))
        }
        Event::Char(c) => {
            state.push_char(*c);
            tracing::trace!(query = %state.query(), char = %c, "query updated");
            Ok((true, vec![Notification::ResultsChanged]))
        }
        Event::Backspace => {
            state.pop_char();
            Ok((true, vec![Notification::ResultsChanged]))
        }
        Event::CursorDown => {
            if !state.keys_live() {
                tracing::debug!("no key subscription, ignoring cursor event");
                return Ok((false, vec![]));
            }
            if state.results().is_empty() {
                return Ok((false, vec![]));
            }
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            if !state.keys_live() {
                tracing::debug!("no key subscription, ignoring cursor event");
                return Ok((false, vec![]));
            }
            if state.results().is_empty() {
                return Ok((false, vec![]));
            }
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if !state.keys_live() {
                tracing::debug!("no key subscription, ignoring submit");
                return Ok((false, vec![]));
            }
            state.commit_cursor().map_or_else(
                || {
                    tracing::debug!("submit with no highlighted result");
                    Ok((false, vec![]))
                },
                |text| {
                    tracing::debug!(selected = %text, "selection committed");
                    Ok((true, vec![Notification::SelectedItemChanged(text)]))
                },
            )
        }
        Event::Activate(index) => state.commit_index(*index).map_or_else(
            || {
                tracing::debug!(index = index, "activation index out of range");
                Ok((false, vec![]))
            },
            |text| {
                tracing::debug!(selected = %text, index = index, "item activated");
                Ok((true, vec![Notification::SelectedItemChanged(text)]))
            },
        ),
        Event::CandidatesLoaded(candidates) => {
            state.replace_candidates(candidates.clone());
            Ok((true, vec![Notification::ResultsChanged]))
        }
        Event::LoadFailed { error } => {
            tracing::error!(error = %error, "candidate data load failed");
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_component() -> SearchBox {
        SearchBox::new(vec![
            "apple".to_string(),
            "banana".to_string(),
            "grape".to_string(),
        ])
    }

    fn assert_handled(
        state: &mut SearchBox,
        event: &Event,
        expect_stale: bool,
        expect: &[Notification],
    ) {
        let (stale, notifications) = handle_event(state, event).unwrap();
        assert_eq!(stale, expect_stale, "stale flag for {event:?}");
        assert_eq!(notifications, expect, "notifications for {event:?}");
    }

    #[test]
    fn input_reruns_matcher_and_notifies() {
        let mut state = fruit_component();
        assert_handled(
            &mut state,
            &Event::Input("ap".to_string()),
            true,
            &[Notification::ResultsChanged],
        );
        assert!(state.results().iter().any(|m| m.text == "apple"));
    }

    #[test]
    fn char_and_backspace_edit_query() {
        let mut state = fruit_component();
        handle_event(&mut state, &Event::Char('a')).unwrap();
        handle_event(&mut state, &Event::Char('p')).unwrap();
        assert_eq!(state.query(), "ap");
        assert_handled(
            &mut state,
            &Event::Backspace,
            true,
            &[Notification::ResultsChanged],
        );
        assert_eq!(state.query(), "a");
    }

    #[test]
    fn cursor_events_require_live_subscription() {
        let mut state = fruit_component();
        state.set_query("a");
        assert!(!state.results().is_empty());

        assert_handled(&mut state, &Event::CursorDown, false, &[]);
        assert_eq!(state.cursor(), None);

        let _keys = state.subscribe_keys();
        assert_handled(&mut state, &Event::CursorDown, true, &[]);
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn submit_without_cursor_emits_nothing() {
        let mut state = fruit_component();
        state.set_query("a");
        let _keys = state.subscribe_keys();
        assert_handled(&mut state, &Event::Submit, false, &[]);
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn enter_commits_highlighted_result() {
        let mut state = fruit_component();
        let _keys = state.subscribe_keys();
        handle_event(&mut state, &Event::Input("ap".to_string())).unwrap();
        // Best match is "apple"; move the cursor onto it.
        handle_event(&mut state, &Event::CursorDown).unwrap();
        let (stale, notifications) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(stale);
        assert_eq!(
            notifications,
            vec![Notification::SelectedItemChanged("apple".to_string())]
        );
        assert_eq!(state.selection(), Some("apple"));
    }

    #[test]
    fn activation_commits_regardless_of_cursor() {
        let mut state = fruit_component();
        let _keys = state.subscribe_keys();
        handle_event(&mut state, &Event::Input("a".to_string())).unwrap();
        assert!(state.results().len() >= 2);
        handle_event(&mut state, &Event::CursorDown).unwrap(); // cursor on 0

        let clicked = state.results()[1].text.clone();
        let (_, notifications) = handle_event(&mut state, &Event::Activate(1)).unwrap();
        assert_eq!(
            notifications,
            vec![Notification::SelectedItemChanged(clicked)]
        );
    }

    #[test]
    fn activation_out_of_range_is_guarded() {
        let mut state = fruit_component();
        assert_handled(&mut state, &Event::Activate(99), false, &[]);
    }

    #[test]
    fn arrows_with_no_results_leave_cursor_unset() {
        let mut state = SearchBox::new(vec![]);
        let _keys = state.subscribe_keys();
        assert_handled(&mut state, &Event::CursorUp, false, &[]);
        assert_handled(&mut state, &Event::CursorDown, false, &[]);
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn candidates_loaded_reruns_query_and_notifies() {
        let mut state = SearchBox::new(vec![]);
        handle_event(&mut state, &Event::Input("ap".to_string())).unwrap();
        assert!(state.results().is_empty());

        assert_handled(
            &mut state,
            &Event::CandidatesLoaded(vec!["apple".to_string()]),
            true,
            &[Notification::ResultsChanged],
        );
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn load_failure_leaves_state_untouched() {
        let mut state = fruit_component();
        state.set_query("ap");
        let before = state.results().len();
        assert_handled(
            &mut state,
            &Event::LoadFailed {
                error: "404".to_string(),
            },
            false,
            &[],
        );
        assert_eq!(state.results().len(), before);
        assert_eq!(state.candidates().len(), 3);
    }
}
