//! # Chatlens
//!
//! A Rust library and HTTP service for turning raw WhatsApp chat exports
//! into summaries, answers and frequency analytics.
//!
//! ## Overview
//!
//! The core is a synchronous pipeline: raw text is cleaned of export
//! boilerplate, parsed line by line into [`Message`] records (two timestamp
//! conventions, multi-line continuation stitching, graceful handling of
//! unparseable headers), optionally windowed to the most recent N messages,
//! and aggregated into per-user, per-day, per-hour and ranked word/emoji
//! statistics. Summarization and question answering go through a local
//! Ollama instance; the HTTP layer is a thin axum router over both.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let raw = "Messages and calls are end-to-end encrypted.\n\
//!            [18:45, 02/01/2026] Alice: pizza tonight?\n\
//!            [18:46, 02/01/2026] Bob: pizza works 🔥";
//!
//! let messages = parse(&clean(raw));
//! assert_eq!(messages.len(), 2);
//!
//! let excluded = participant_name_tokens(messages.iter().map(|m| m.sender.as_str()));
//! let report = analyze(&messages, &excluded);
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.top_words[0].word, "pizza");
//! ```
//!
//! ## Module Structure
//!
//! - [`clean`](mod@clean) — boilerplate removal
//! - [`parser`] — two-format line state machine producing [`Message`]s
//! - [`window`] — trailing-window selection and re-rendering
//! - [`analytics`] — tokenizer, emoji extraction, aggregation
//! - [`config`] — generation-service configuration and model aliases
//! - [`llm`] — prompt templates and the Ollama client (`ollama` feature)
//! - [`cache`] — content-hash response cache (`server` feature)
//! - [`server`] — axum router and request handlers (`server` feature)
//! - [`error`] — [`ChatlensError`] and [`Result`](error::Result)

pub mod analytics;
pub mod clean;
pub mod config;
pub mod error;
pub mod llm;
pub mod message;
pub mod parser;
pub mod window;

#[cfg(feature = "server")]
pub mod cache;
#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod server;

// Re-export the main types at the crate root for convenience
pub use analytics::{AnalyticsResult, EmojiCount, TopWordsMode, WordCount, analyze};
pub use clean::clean;
pub use error::{ChatlensError, Result};
pub use message::Message;
pub use parser::parse;
pub use window::{last_n, render};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatlensError, Result};

    pub use crate::clean::clean;
    pub use crate::parser::parse;
    pub use crate::window::{last_n, render};

    pub use crate::analytics::{
        AnalyticsResult, EmojiCount, TopWordsMode, WordCount, analyze, extract_emojis,
        participant_name_tokens, tokenize,
    };

    pub use crate::config::LlmConfig;
    pub use crate::llm::GenerationOptions;

    #[cfg(feature = "ollama")]
    pub use crate::llm::OllamaClient;

    #[cfg(feature = "server")]
    pub use crate::cache::ResponseCache;
    #[cfg(feature = "server")]
    pub use crate::server::{AppState, router};
}
