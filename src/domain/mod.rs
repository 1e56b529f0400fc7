//! Domain layer for the fuzzbox component.
//!
//! This module contains the core domain types for the component, independent of
//! any rendering host or data-source infrastructure. It keeps the matching and
//! navigation rules isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`matched`]: Match and highlight-span domain types
//!
//! # Examples
//!
//! ```
//! use fuzzbox::domain::{Match, MatchSpan};
//!
//! let m = Match {
//!     text: "apple".to_string(),
//!     spans: vec![MatchSpan::new("ap", true), MatchSpan::new("ple", false)],
//!     score: 42,
//! };
//! assert_eq!(m.bare(), "apple");
//! ```

pub mod error;
pub mod matched;

pub use error::{FuzzboxError, Result};
pub use matched::{Match, MatchSpan};
