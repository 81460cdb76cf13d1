//! Unified error types for chatlens.
//!
//! The parsing and analytics core is total: degenerate input degrades to an
//! empty or zeroed result instead of an error. Errors only arise at the
//! periphery, when talking to the generation service or validating a request.

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
///
/// fn my_function() -> Result<String> {
///     Ok("summary".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The chat text was empty after boilerplate removal.
    ///
    /// Returned by the generation endpoints, which have nothing to work
    /// with; analytics never produces this and returns the zeroed shape.
    #[error("chat text is empty after cleaning")]
    EmptyChat,

    /// The request asked a question but the question field was blank.
    #[error("question is empty")]
    EmptyQuestion,

    /// Transport-level failure while calling the generation service.
    #[cfg(feature = "ollama")]
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The generation service answered with a non-success status.
    #[error("model '{model}' returned HTTP status {status}")]
    Generation {
        /// The model identifier that was requested.
        model: String,
        /// The HTTP status code returned by the service.
        status: u16,
    },
}

impl ChatlensError {
    /// Creates a generation-status error.
    pub fn generation(model: impl Into<String>, status: u16) -> Self {
        ChatlensError::Generation {
            model: model.into(),
            status,
        }
    }

    /// Returns `true` if this error means the request carried no usable input.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            ChatlensError::EmptyChat | ChatlensError::EmptyQuestion
        )
    }

    /// Returns `true` if this is a generation-service failure.
    pub fn is_generation(&self) -> bool {
        #[cfg(feature = "ollama")]
        if matches!(self, ChatlensError::Http(_)) {
            return true;
        }
        matches!(self, ChatlensError::Generation { .. })
    }
}
