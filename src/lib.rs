//! Fuzzbox: an embeddable fuzzy search-box component.
//!
//! Fuzzbox pairs a query string with a result list that provides:
//! - Fuzzy subsequence matching over an in-memory candidate list
//! - Typed highlight spans for matched characters (no raw markup injection)
//! - Wrap-around keyboard navigation with a guarded cursor
//! - Selection commits via Enter or item activation, emitted as notifications
//!
//! Rendering, styling, and fetching are external collaborators: a data source
//! supplies an ordered list of strings, and a rendering layer consumes the
//! computed view model (ordered results, highlight spans, cursor index).
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shim (main.rs demo, or embedding app)         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Cursor and selection transitions                 │
//! │  - Notification emission                            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Match Layer   │   │ UI Layer      │   │ Source Layer  │
//! │ (matcher/)    │   │ (ui/)         │   │ (source/)     │
//! │ - Skim scorer │   │ - View model  │   │ - JSON array  │
//! │ - Span runs   │   │ - Markers     │   │ - Load events │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Match / MatchSpan types                          │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Component state machine with event/notification model
//! - [`domain`]: Core domain types (Match, spans, errors)
//! - [`matcher`]: Fuzzy match/highlight pipeline
//! - [`source`]: Candidate data-source boundary
//! - [`ui`]: View model and reference marker renderer
//! - [`observability`]: Tracing subscriber setup
//!
//! # Data Flow
//!
//! Query text → matcher → ordered match list (bare + spans) → component state
//! → navigator bounds cursor movement by the same list length → selection
//! notification carries the bare string at the committed index.
//!
//! # Example
//!
//! ```
//! use fuzzbox::app::{handle_event, Event, Notification, SearchBox};
//!
//! let mut component = SearchBox::new(vec![
//!     "apple".to_string(),
//!     "banana".to_string(),
//!     "grape".to_string(),
//! ]);
//! let _keys = component.subscribe_keys();
//!
//! handle_event(&mut component, &Event::Input("ap".to_string()))?;
//! handle_event(&mut component, &Event::CursorDown)?;
//! let (_, notifications) = handle_event(&mut component, &Event::Submit)?;
//!
//! assert_eq!(
//!     notifications,
//!     vec![Notification::SelectedItemChanged("apple".to_string())]
//! );
//! # Ok::<(), fuzzbox::FuzzboxError>(())
//! ```
//!
//! # Concurrency Model
//!
//! Single-threaded and event-driven: each match pass runs synchronously to
//! completion on the calling thread before the next event. Candidate loading
//! is the only asynchronous concern and is modeled as a one-shot event with
//! "last load wins" semantics. No state crosses thread boundaries.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod matcher;
pub mod observability;
pub mod source;
pub mod ui;

pub use app::{handle_event, Event, KeySubscription, Notification, SearchBox};
pub use domain::{FuzzboxError, Match, MatchSpan, Result};
pub use ui::{Markers, SearchBoxView};

use std::collections::BTreeMap;

/// Externally visible description of one configuration field.
///
/// The component's configurable surface is enumerated explicitly in
/// [`FIELDS`]: each entry names the field as hosts address it, its type, and
/// its default. Hosts can introspect this table to build settings UIs or
/// validate incoming configuration instead of relying on annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// External field name as it appears in configuration maps.
    pub name: &'static str,

    /// Human-readable type description.
    pub kind: &'static str,

    /// Default value, rendered as the string form hosts would pass.
    pub default: &'static str,
}

/// Registry of every configuration field: external name, type, default.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "term",
        kind: "string",
        default: "",
    },
    FieldSpec {
        name: "data_resource",
        kind: "string (path to JSON array of strings)",
        default: "",
    },
    FieldSpec {
        name: "highlight_open",
        kind: "string",
        default: "<em>",
    },
    FieldSpec {
        name: "highlight_close",
        kind: "string",
        default: "</em>",
    },
    FieldSpec {
        name: "trace_level",
        kind: "string (trace|debug|info|warn|error)",
        default: "info",
    },
];

/// Component configuration.
///
/// Plain struct, constructed directly or parsed from a string map via
/// [`Config::from_map`]. See [`FIELDS`] for the external names and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial search term.
    ///
    /// Applied once at initialization; subsequent queries arrive as events.
    /// Default: `""`
    pub term: String,

    /// Path to the candidate data resource, a JSON array of strings.
    ///
    /// Loaded once per component lifetime by the host via the source layer.
    /// `None` means the host supplies candidates directly. Default: `None`
    pub data_resource: Option<String>,

    /// Marker emitted before each matched run by the reference renderer.
    ///
    /// Default: `"<em>"`
    pub highlight_open: String,

    /// Marker emitted after each matched run by the reference renderer.
    ///
    /// Default: `"</em>"`
    pub highlight_close: String,

    /// Tracing level for the demo subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            term: String::new(),
            data_resource: None,
            highlight_open: "<em>".to_string(),
            highlight_close: "</em>".to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Hosts provide configuration as a `BTreeMap<String, String>`; this
    /// function extracts typed values with fallback defaults for anything
    /// missing. Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use fuzzbox::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("term".to_string(), "ap".to_string());
    /// map.insert("data_resource".to_string(), "words.json".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.term, "ap");
    /// assert_eq!(config.data_resource.as_deref(), Some("words.json"));
    /// assert_eq!(config.highlight_open, "<em>");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            term: config.get("term").cloned().unwrap_or(defaults.term),
            data_resource: config
                .get("data_resource")
                .filter(|s| !s.is_empty())
                .cloned(),
            highlight_open: config
                .get("highlight_open")
                .cloned()
                .unwrap_or(defaults.highlight_open),
            highlight_close: config
                .get("highlight_close")
                .cloned()
                .unwrap_or(defaults.highlight_close),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Marker pair for the reference renderer.
    #[must_use]
    pub fn markers(&self) -> Markers {
        Markers::new(self.highlight_open.clone(), self.highlight_close.clone())
    }
}

/// Initializes a component from configuration.
///
/// Creates a [`SearchBox`] with an empty candidate set (populated later by
/// the data source) and the configured initial term already applied, so the
/// first `CandidatesLoaded` event immediately produces results for it.
///
/// # Example
///
/// ```
/// use fuzzbox::{initialize, Config};
///
/// let config = Config {
///     term: "ap".to_string(),
///     ..Default::default()
/// };
/// let component = initialize(&config);
/// assert_eq!(component.query(), "ap");
/// assert!(component.results().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> SearchBox {
    tracing::debug!(term = %config.term, "initializing fuzzbox component");

    let mut component = SearchBox::new(vec![]);
    if !config.term.is_empty() {
        component.set_query(config.term.clone());
    }
    component
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_applies_defaults_for_missing_keys() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn from_map_reads_all_fields() {
        let mut map = BTreeMap::new();
        map.insert("term".to_string(), "gr".to_string());
        map.insert("data_resource".to_string(), "fruit.json".to_string());
        map.insert("highlight_open".to_string(), "[".to_string());
        map.insert("highlight_close".to_string(), "]".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.term, "gr");
        assert_eq!(config.data_resource.as_deref(), Some("fruit.json"));
        assert_eq!(config.markers(), Markers::new("[", "]"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_data_resource_is_treated_as_unset() {
        let mut map = BTreeMap::new();
        map.insert("data_resource".to_string(), String::new());
        let config = Config::from_map(&map);
        assert_eq!(config.data_resource, None);
    }

    #[test]
    fn fields_registry_covers_every_config_field() {
        let names: Vec<&str> = FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "term",
                "data_resource",
                "highlight_open",
                "highlight_close",
                "trace_level"
            ]
        );
    }

    #[test]
    fn initialize_applies_initial_term() {
        let config = Config {
            term: "ap".to_string(),
            ..Default::default()
        };
        let component = initialize(&config);
        assert_eq!(component.query(), "ap");
        assert!(component.results().is_empty());
    }
}
