//! The message record produced by the chat parser.
//!
//! Every line of a WhatsApp export belongs to exactly one [`Message`]: it
//! either opens one (it matched a recognized header) or it extends the body
//! of the message that is currently open. Orphan text at the start of an
//! export becomes a message from the synthetic `"Unknown"` sender.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello, world!");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello, world!");
//! assert!(msg.timestamp().is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender name used for text that precedes the first recognizable header.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// One logical chat entry.
///
/// The original date/time tokens are preserved verbatim in `date_text` and
/// `time_text` so the message can be re-rendered in its source form even when
/// `timestamp` parsing failed. A message without a header (orphan preamble)
/// carries empty text fields and the [`UNKNOWN_SENDER`] name.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name, or `"Unknown"` |
/// | `body` | `String` | Message text, possibly multi-line |
/// | `date_text` | `String` | Header date token, `""` when absent |
/// | `time_text` | `String` | Header time token, `""` when absent |
/// | `timestamp` | `Option<DateTime<Utc>>` | `None` when the header tokens did not parse |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Text content. Continuation lines are joined with `\n` and the whole
    /// body is trimmed once the parser finalizes the message.
    pub body: String,

    /// Original date token from the header line, kept verbatim.
    #[serde(default)]
    pub date_text: String,

    /// Original time token from the header line, kept verbatim.
    #[serde(default)]
    pub time_text: String,

    /// Parsed timestamp; absent when the header tokens were not a valid
    /// calendar date and time.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a message with only sender and body; no header fields.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            date_text: String::new(),
            time_text: String::new(),
            timestamp: None,
        }
    }

    /// Creates a message carrying its original header tokens.
    pub fn with_header(
        sender: impl Into<String>,
        body: impl Into<String>,
        date_text: impl Into<String>,
        time_text: impl Into<String>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            date_text: date_text.into(),
            time_text: time_text.into(),
            timestamp,
        }
    }

    /// Creates the implicit message that collects orphan preamble text.
    pub fn unknown(body: impl Into<String>) -> Self {
        Self::new(UNKNOWN_SENDER, body)
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp, if the header tokens parsed.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns `true` if both original header tokens are present.
    ///
    /// Only such messages can be re-rendered in full header form; see
    /// [`crate::window::render`].
    pub fn has_header_text(&self) -> bool {
        !self.time_text.is_empty() && !self.date_text.is_empty()
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
