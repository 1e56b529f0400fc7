//! Rendering-collaborator contact surface.
//!
//! This module holds everything the rendering side consumes: the view model
//! computed from component state and a reference marker renderer. The core
//! never emits markup on its own; hosts take the typed spans and choose their
//! own emphasis mechanism.
//!
//! # Architecture
//!
//! ```text
//! SearchBox → SearchBoxView::from_state → SearchBoxView → render_view → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: Marker-pair highlight rendering

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_item, render_spans, render_view, Markers};
pub use viewmodel::{DisplayItem, SearchBoxView};
