//! Candidate data-source boundary.
//!
//! This module defines the [`CandidateSource`] trait that abstracts over
//! suppliers of the searchable string universe, plus the JSON file
//! implementation used by the demo binary. The component core never loads data
//! itself: a source delivers an ordered candidate list once per component
//! lifetime, and the outcome is fed to the event handler as
//! `CandidatesLoaded` or `LoadFailed`.
//!
//! # Design Philosophy
//!
//! The trait is deliberately one method. Loading is a one-shot
//! fetch-then-replace with "last load wins" semantics; there is no refresh,
//! watch, or pagination surface because the component recomputes everything
//! from whatever list it currently holds.
//!
//! # Modules
//!
//! - [`json`]: JSON array-of-strings file source

pub mod json;

pub use json::JsonFileSource;

use crate::app::Event;
use crate::domain::error::Result;

/// Abstraction over candidate data suppliers.
///
/// Implementations produce the ordered sequence of searchable strings. The
/// order is meaningful: it is the tie-break order for equally scored matches.
///
/// # Implementations
///
/// - [`JsonFileSource`]: Reads a JSON array of strings from a file
pub trait CandidateSource {
    /// Loads the full candidate list.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying resource cannot be read or does not
    /// contain an ordered sequence of strings.
    fn load(&self) -> Result<Vec<String>>;
}

/// Runs a source's one-shot load and converts the outcome into an event.
///
/// Failures are logged here, at the boundary, and become a `LoadFailed` event
/// rather than propagating: a missing or malformed data resource leaves the
/// component running with whatever candidates it already has (initially none).
///
/// # Example
///
/// ```no_run
/// use fuzzbox::app::{handle_event, SearchBox};
/// use fuzzbox::source::{self, JsonFileSource};
///
/// let mut component = SearchBox::new(vec![]);
/// let event = source::load_into_event(&JsonFileSource::new("words.json"));
/// handle_event(&mut component, &event)?;
/// # Ok::<(), fuzzbox::FuzzboxError>(())
/// ```
pub fn load_into_event(source: &dyn CandidateSource) -> Event {
    match source.load() {
        Ok(candidates) => {
            tracing::debug!(candidate_count = candidates.len(), "candidate load succeeded");
            Event::CandidatesLoaded(candidates)
        }
        Err(e) => {
            tracing::error!(error = %e, "candidate load failed");
            Event::LoadFailed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::FuzzboxError;

    struct FixedSource(Vec<String>);

    impl CandidateSource for FixedSource {
        fn load(&self) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl CandidateSource for FailingSource {
        fn load(&self) -> Result<Vec<String>> {
            Err(FuzzboxError::Config("unreachable resource".to_string()))
        }
    }

    #[test]
    fn successful_load_becomes_candidates_loaded() {
        let source = FixedSource(vec!["apple".to_string()]);
        let event = load_into_event(&source);
        assert_eq!(event, Event::CandidatesLoaded(vec!["apple".to_string()]));
    }

    #[test]
    fn failed_load_becomes_load_failed() {
        let event = load_into_event(&FailingSource);
        assert!(matches!(event, Event::LoadFailed { .. }));
    }
}
