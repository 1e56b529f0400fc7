//! Interactive demo shim and entry point.
//!
//! This binary is the thin integration layer between the fuzzbox library and a
//! terminal host. It loads a candidate list from a JSON file, then runs a
//! line-oriented loop translating input lines into component events and
//! printing the rendered view after each one.
//!
//! # Usage
//!
//! ```text
//! fuzzbox words.json
//! ```
//!
//! where `words.json` contains a JSON array of strings.
//!
//! # Input Mapping
//!
//! Lines are translated to library events:
//!
//! - `/down` → `Event::CursorDown`
//! - `/up` → `Event::CursorUp`
//! - `/enter` → `Event::Submit`
//! - `/click N` → `Event::Activate(N)`
//! - `/quit` → exit
//! - anything else → `Event::Input(line)` (the line becomes the query)
//!
//! Every other key a real host might see simply never becomes an event, which
//! is how "any other key: no state change" is realized.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use fuzzbox::app::{handle_event, Event, Notification};
use fuzzbox::source::{self, JsonFileSource};
use fuzzbox::ui::{render_view, SearchBoxView};
use fuzzbox::{initialize, observability, Config};

fn main() -> fuzzbox::Result<()> {
    let mut args = std::env::args().skip(1);
    let mut map = BTreeMap::new();
    if let Some(path) = args.next() {
        map.insert("data_resource".to_string(), path);
    }
    if let Ok(level) = std::env::var("FUZZBOX_TRACE") {
        map.insert("trace_level".to_string(), level);
    }
    let config = Config::from_map(&map);

    observability::init_tracing(&config);

    let mut component = initialize(&config);
    let _keys = component.subscribe_keys();

    // One-shot candidate load; failure is logged and leaves the set empty.
    if let Some(resource) = &config.data_resource {
        let event = source::load_into_event(&JsonFileSource::new(resource.clone()));
        handle_event(&mut component, &event)?;
    } else {
        tracing::warn!("no data resource given, starting with an empty candidate set");
    }

    let markers = config.markers();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    print_view(&component, &markers, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let event = match line.trim() {
            "/quit" => break,
            "/down" => Event::CursorDown,
            "/up" => Event::CursorUp,
            "/enter" => Event::Submit,
            command if command.starts_with("/click ") => {
                match command["/click ".len()..].trim().parse::<usize>() {
                    Ok(index) => Event::Activate(index),
                    Err(_) => {
                        writeln!(stdout, "usage: /click <index>")?;
                        continue;
                    }
                }
            }
            text => Event::Input(text.to_string()),
        };

        let (stale, notifications) = handle_event(&mut component, &event)?;

        for notification in notifications {
            match notification {
                Notification::ResultsChanged => {
                    tracing::debug!("results refreshed");
                }
                Notification::SelectedItemChanged(text) => {
                    writeln!(stdout, "selected: {text}")?;
                }
            }
        }

        if stale {
            print_view(&component, &markers, &mut stdout)?;
        }
    }

    Ok(())
}

/// Prints the current view model, one line per row.
fn print_view(
    component: &fuzzbox::SearchBox,
    markers: &fuzzbox::Markers,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let view = SearchBoxView::from_state(component);
    for line in render_view(&view, markers) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
