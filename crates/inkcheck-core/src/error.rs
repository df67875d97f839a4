//! Unified error types for inkcheck

use thiserror::Error;

/// Unified error type for all inkcheck operations
#[derive(Error, Debug)]
pub enum CheckError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    // Element errors
    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Element not interactable: {selector}: {reason}")]
    Interaction { selector: String, reason: String },

    #[error("Timed out after {timeout_secs}s waiting for {selector} to become visible")]
    AssertionTimeout { selector: String, timeout_secs: u64 },

    #[error("Expected {expected} elements matching {selector}, found {actual}")]
    AssertFailed {
        selector: String,
        expected: u32,
        actual: u32,
    },

    // Artifact errors
    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // Step wrapper: identifies where in the sequence a run failed
    #[error("Step {index} ({description}) failed: {source}")]
    Step {
        index: usize,
        description: String,
        #[source]
        source: Box<CheckError>,
    },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

impl CheckError {
    /// Wrap an error with the index and description of the failing step
    pub fn at_step(self, index: usize, description: String) -> Self {
        CheckError::Step {
            index,
            description,
            source: Box::new(self),
        }
    }
}

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;
