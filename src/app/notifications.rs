//! Notifications emitted by the event handler for host consumption.
//!
//! This module defines the [`Notification`] type, the component's observable
//! output channel. Notifications bridge pure state transitions and the host's
//! effectful world: the embedding application receives them after each handled
//! event and reacts (re-reads the view model, forwards the selection, etc.).
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Notification>` after processing each event,
//! allowing multiple observations to be delivered atomically. The host consumes
//! them in order; the component never calls back into the host directly.

/// Observable events emitted by the component.
///
/// Produced by the event handler and consumed by the embedding host. They are
/// the only way state changes become visible outside the component besides
/// reading the view model directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The result list was recomputed and is fresh.
    ///
    /// Fired after every completed match pass, whether triggered by a query
    /// edit or a candidate-set replacement. Carries no payload; the host
    /// re-reads component state.
    ResultsChanged,

    /// A result was committed by Enter or by activating a rendered item.
    ///
    /// The payload is the bare candidate string at the committed index,
    /// without any highlight markup.
    SelectedItemChanged(String),
}
