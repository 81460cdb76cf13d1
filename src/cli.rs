//! Command-line interface definition using clap.

use clap::Parser;

/// Summarize, question and analyze WhatsApp chat exports with local LLMs.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens
    chatlens --bind 0.0.0.0:8000
    chatlens --ollama-url http://ollama:11434 --fast-model phi3
    RUST_LOG=chatlens=debug chatlens")]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8000", value_name = "ADDR")]
    pub bind: String,

    /// Base URL of the Ollama API
    #[arg(long, default_value = "http://localhost:11434", value_name = "URL")]
    pub ollama_url: String,

    /// Model used when a request asks for "fast"
    #[arg(long, default_value = "mistral", value_name = "MODEL")]
    pub fast_model: String,

    /// Model used when a request asks for "accurate" (also the default)
    #[arg(long, default_value = "llama3.1", value_name = "MODEL")]
    pub accurate_model: String,

    /// Hard limit on generated tokens
    #[arg(long, default_value_t = 150)]
    pub num_predict: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.1)]
    pub temperature: f32,
}
