//! Error types for the fuzzbox component.
//!
//! This module defines the centralized error type [`FuzzboxError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for fuzzbox operations.
///
/// This enum consolidates the error conditions that can occur at the component's
/// boundaries: loading the candidate data resource and parsing configuration.
/// Matching and navigation themselves never fail; an empty result list and a
/// guarded no-op are normal outcomes, not errors.
///
/// # Examples
///
/// ```
/// use fuzzbox::FuzzboxError;
///
/// fn validate_config() -> Result<(), FuzzboxError> {
///     Err(FuzzboxError::Config("missing data_resource".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FuzzboxError {
    /// Candidate data source could not be read.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Candidate data resource did not contain a JSON array of strings.
    ///
    /// Wraps `serde_json` deserialization failures. The data contract is an
    /// externally-defined JSON array of strings; anything else lands here.
    #[error("Data parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for fuzzbox operations.
///
/// This is a type alias for `std::result::Result<T, FuzzboxError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, FuzzboxError>;
