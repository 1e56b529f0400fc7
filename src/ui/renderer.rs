//! Marker-based highlight rendering.
//!
//! The core hands the rendering collaborator typed spans, never markup. This
//! module is the reference consumer: it wraps matched runs in a configurable
//! marker pair (`<em>…</em>` by default) and formats result rows for the demo
//! binary. A host targeting HTML, a terminal, or anything else can do the same
//! with its own emphasis mechanism.

use crate::domain::{Match, MatchSpan};
use crate::ui::viewmodel::SearchBoxView;

/// Marker pair wrapped around matched runs.
///
/// Defaults to `<em>`/`</em>`. Empty markers reproduce the bare string, which
/// is also how the highlight invariant is checked: stripping the markers from
/// rendered output must yield exactly the original candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Emitted before each matched run.
    pub open: String,

    /// Emitted after each matched run.
    pub close: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: "<em>".to_string(),
            close: "</em>".to_string(),
        }
    }
}

impl Markers {
    /// Creates a marker pair from open/close strings.
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Renders highlight spans with matched runs wrapped in the marker pair.
///
/// # Example
///
/// ```
/// use fuzzbox::matcher;
/// use fuzzbox::ui::renderer::{render_spans, Markers};
///
/// let results = matcher::rank("ap", &["apple".to_string()]);
/// let tagged = render_spans(&results[0].spans, &Markers::default());
/// assert_eq!(tagged, "<em>ap</em>ple");
/// ```
#[must_use]
pub fn render_spans(spans: &[MatchSpan], markers: &Markers) -> String {
    let mut out = String::new();
    for span in spans {
        if span.is_match {
            out.push_str(&markers.open);
            out.push_str(&span.text);
            out.push_str(&markers.close);
        } else {
            out.push_str(&span.text);
        }
    }
    out
}

/// Renders one match's highlight form.
#[must_use]
pub fn render_item(item: &Match, markers: &Markers) -> String {
    render_spans(&item.spans, markers)
}

/// Renders the whole view as plain text lines for the demo binary.
///
/// The first line echoes the query; each result row follows, prefixed with a
/// cursor arrow on the highlighted row.
#[must_use]
pub fn render_view(view: &SearchBoxView, markers: &Markers) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.items.len() + 1);
    lines.push(format!("> {}", view.query));
    for item in &view.items {
        let prefix = if item.is_cursor { "→ " } else { "  " };
        lines.push(format!("{prefix}{}", render_spans(&item.spans, markers)));
    }
    lines
}
