//! JSON file candidate source.
//!
//! Reads the externally-defined data contract: a JSON array of strings, in
//! order. Anything else (an object, mixed-type array, malformed JSON) is a
//! parse error surfaced through
//! [`FuzzboxError::Parse`](crate::FuzzboxError::Parse).

use crate::domain::error::Result;
use crate::source::CandidateSource;
use std::path::PathBuf;

/// Candidate source backed by a JSON file.
///
/// The file must contain a single JSON array of strings. The whole file is
/// read and parsed in one pass; there is no streaming, matching the one-shot
/// load model.
///
/// # Examples
///
/// ```no_run
/// use fuzzbox::source::{CandidateSource, JsonFileSource};
///
/// let source = JsonFileSource::new("words.json");
/// let candidates = source.load()?;
/// # Ok::<(), fuzzbox::FuzzboxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// Path to the JSON data resource.
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for JsonFileSource {
    /// Reads and parses the file into an ordered candidate list.
    ///
    /// # Errors
    ///
    /// Returns `FuzzboxError::Io` if the file cannot be read and
    /// `FuzzboxError::Parse` if it is not a JSON array of strings.
    fn load(&self) -> Result<Vec<String>> {
        tracing::debug!(path = ?self.path, "loading candidate data");
        let raw = std::fs::read_to_string(&self.path)?;
        let candidates: Vec<String> = serde_json::from_str(&raw)?;
        Ok(candidates)
    }
}
