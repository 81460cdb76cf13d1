//! Prompt construction and the Ollama generation client.
//!
//! The prompts and the chunked summarization pipeline are pure functions
//! over chat text; the [`OllamaClient`] (behind the `ollama` feature) is a
//! pass-through to `/api/generate`: given a model id, a prompt and
//! [`GenerationOptions`] it returns best-effort text or fails. It does not
//! validate model names and does not retry.

use serde::{Deserialize, Serialize};

/// Chats at or below this many lines are summarized in a single call.
pub const FAST_PATH_MAX_LINES: usize = 120;

/// Chunk size (in lines) for the slow summarization path.
pub const CHUNK_MAX_LINES: usize = 100;

/// Options forwarded to the generation service.
///
/// Defaults mirror the speed-optimized settings the service is tuned for:
/// low temperature, hard output-token cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Hard limit on generated tokens.
    pub num_predict: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            num_predict: 150,
            temperature: 0.1,
            top_p: 0.9,
        }
    }
}

impl GenerationOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output-token cap.
    #[must_use]
    pub fn with_num_predict(mut self, limit: u32) -> Self {
        self.num_predict = limit;
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the nucleus sampling cutoff.
    #[must_use]
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }
}

/// Splits a long chat into line chunks for the slow summarization path.
pub fn chunk_text(text: &str, max_lines: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .chunks(max_lines.max(1))
        .map(|chunk| chunk.join("\n"))
        .collect()
}

/// Extraction prompt for a chat that fits the fast path.
pub fn summary_prompt(chat: &str) -> String {
    format!(
        "You are given a group chat conversation.\n\
         \n\
         Extract ONLY the following.\n\
         Be concise. Use bullet points only.\n\
         \n\
         🧠 Main Topics (max 3)\n\
         ✅ Decisions (max 3)\n\
         🛠 Action Items (max 5)\n\
         \n\
         Ignore greetings, emojis, jokes, and filler messages.\n\
         \n\
         Chat:\n\
         {chat}\n"
    )
}

/// Per-chunk prompt for the slow path.
pub fn chunk_summary_prompt(chunk: &str) -> String {
    format!(
        "Summarize the following group chat in 3 very short bullet points.\n\
         Ignore greetings, emojis, and casual replies.\n\
         \n\
         Chat:\n\
         {chunk}\n\
         \n\
         Bullets:\n"
    )
}

/// Merge prompt combining the per-chunk summaries.
pub fn merge_summaries_prompt(summaries: &[String]) -> String {
    format!(
        "From the summaries below, extract ONLY:\n\
         \n\
         🧠 Main Topics (max 3)\n\
         ✅ Decisions (max 3)\n\
         🛠 Action Items (max 5)\n\
         \n\
         Be concise. Bullet points only.\n\
         \n\
         Summaries:\n\
         {}\n",
        summaries.join("\n")
    )
}

/// Question-answering prompt over a chat and its prior summary.
pub fn answer_prompt(chat: &str, summary: &str, question: &str) -> String {
    format!(
        "You are given a group chat conversation and a summary of it.\n\
         Answer the question using only information from the chat.\n\
         If the chat does not contain the answer, say so briefly.\n\
         \n\
         Summary:\n\
         {summary}\n\
         \n\
         Chat:\n\
         {chat}\n\
         \n\
         Question: {question}\n\
         Answer:\n"
    )
}

#[cfg(feature = "ollama")]
pub use client::OllamaClient;

#[cfg(feature = "ollama")]
mod client {
    use std::time::Duration;

    use serde::Deserialize;

    use super::{CHUNK_MAX_LINES, FAST_PATH_MAX_LINES, GenerationOptions};
    use super::{answer_prompt, chunk_summary_prompt, chunk_text, merge_summaries_prompt, summary_prompt};
    use crate::error::{ChatlensError, Result};

    #[derive(Debug, Deserialize)]
    struct GenerateResponse {
        response: String,
    }

    /// Pass-through client for Ollama's `/api/generate` endpoint.
    #[derive(Debug, Clone)]
    pub struct OllamaClient {
        http: reqwest::Client,
        base_url: String,
    }

    impl OllamaClient {
        /// Creates a client for the given base URL.
        pub fn new(base_url: impl Into<String>) -> Self {
            let http = reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(300))
                .build()
                .unwrap_or_default();

            Self {
                http,
                base_url: base_url.into().trim_end_matches('/').to_string(),
            }
        }

        /// Generates text for a prompt.
        ///
        /// Non-success statuses map to [`ChatlensError::Generation`];
        /// transport failures to [`ChatlensError::Http`]. The model id is
        /// forwarded as-is.
        pub async fn generate(
            &self,
            model: &str,
            prompt: &str,
            options: &GenerationOptions,
        ) -> Result<String> {
            let payload = serde_json::json!({
                "model": model,
                "prompt": prompt,
                "stream": false,
                "options": options,
            });

            let url = format!("{}/api/generate", self.base_url);
            tracing::debug!(model, prompt_len = prompt.len(), "calling generation service");

            let response = self.http.post(&url).json(&payload).send().await?;
            if !response.status().is_success() {
                return Err(ChatlensError::generation(
                    model,
                    response.status().as_u16(),
                ));
            }

            let body: GenerateResponse = response.json().await?;
            Ok(body.response.trim().to_string())
        }

        /// Summarizes chat text, chunking when it is too long for one call.
        ///
        /// Fast path: at most [`FAST_PATH_MAX_LINES`] lines, one generate
        /// call. Slow path: per-chunk bullet summaries, then a merge call.
        pub async fn summarize(
            &self,
            model: &str,
            chat: &str,
            options: &GenerationOptions,
        ) -> Result<String> {
            let line_count = chat.lines().count();
            if line_count <= FAST_PATH_MAX_LINES {
                return self.generate(model, &summary_prompt(chat), options).await;
            }

            tracing::info!(line_count, "chat exceeds fast path, chunking");
            let mut chunk_summaries = Vec::new();
            for chunk in chunk_text(chat, CHUNK_MAX_LINES) {
                let summary = self
                    .generate(model, &chunk_summary_prompt(&chunk), options)
                    .await?;
                chunk_summaries.push(summary);
            }

            self.generate(model, &merge_summaries_prompt(&chunk_summaries), options)
                .await
        }

        /// Answers a free-text question about a chat and its summary.
        pub async fn answer(
            &self,
            model: &str,
            chat: &str,
            summary: &str,
            question: &str,
            options: &GenerationOptions,
        ) -> Result<String> {
            self.generate(model, &answer_prompt(chat, summary, question), options)
                .await
        }

        /// Returns the configured base URL.
        pub fn base_url(&self) -> &str {
            &self.base_url
        }
    }
}
