//! Configuration for the generation service.
//!
//! Requests name a model by alias (`"fast"` / `"accurate"`, matching the
//! frontend's mode switch) or by a raw model id. [`LlmConfig`] resolves
//! aliases to the configured Ollama model ids; unknown strings pass through
//! verbatim. Validating that a model actually exists is the generation
//! service's job, not ours.

use serde::{Deserialize, Serialize};

use crate::llm::GenerationOptions;

/// Default Ollama endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Settings for the generation service and model aliases.
///
/// # Example
///
/// ```rust
/// use chatlens::config::LlmConfig;
///
/// let config = LlmConfig::new()
///     .with_fast_model("mistral")
///     .with_accurate_model("llama3.1");
///
/// assert_eq!(config.resolve_model("fast"), "mistral");
/// assert_eq!(config.resolve_model("qwen2.5:7b"), "qwen2.5:7b");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the Ollama API.
    pub base_url: String,

    /// Model id used for the `"fast"` alias.
    pub fast_model: String,

    /// Model id used for the `"accurate"` alias (also the default when a
    /// request names no model).
    pub accurate_model: String,

    /// Generation options passed with every request.
    pub options: GenerationOptions,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fast_model: "mistral".to_string(),
            accurate_model: "llama3.1".to_string(),
            options: GenerationOptions::default(),
        }
    }
}

impl LlmConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Ollama base URL. A trailing slash is stripped.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the model id behind the `"fast"` alias.
    #[must_use]
    pub fn with_fast_model(mut self, model: impl Into<String>) -> Self {
        self.fast_model = model.into();
        self
    }

    /// Sets the model id behind the `"accurate"` alias.
    #[must_use]
    pub fn with_accurate_model(mut self, model: impl Into<String>) -> Self {
        self.accurate_model = model.into();
        self
    }

    /// Sets the generation options.
    #[must_use]
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolves a requested model alias to a concrete model id.
    ///
    /// `"fast"` and `"accurate"` map to the configured ids; the empty string
    /// means "accurate"; anything else is passed through unchanged.
    pub fn resolve_model<'a>(&'a self, requested: &'a str) -> &'a str {
        match requested {
            "fast" => &self.fast_model,
            "accurate" | "" => &self.accurate_model,
            other => other,
        }
    }
}
