//! Error types for the harness binary.

/// Top-level error for the harness binary.
///
/// Each variant wraps a specific subsystem error, so `main` can propagate
/// everything with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Scenario loading or validation failed.
    #[error("scenario error: {source}")]
    Config {
        /// The underlying scenario error.
        #[from]
        source: weary_core::config::ConfigError,
    },

    /// Rendering the JSON report failed.
    #[error("report error: {source}")]
    Report {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// The command line could not be understood.
    #[error("usage: weary-engine [scenario.yaml] [--json] ({message})")]
    Usage {
        /// What was wrong with the arguments.
        message: String,
    },
}
