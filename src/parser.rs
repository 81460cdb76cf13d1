//! Line-by-line chat parser.
//!
//! WhatsApp exports come in two incompatible line conventions, both handled
//! here and checked per line in a fixed priority order:
//!
//! 1. Bracket: `[18:45, 02/01/2026] Alice: message text`
//! 2. Dash: `02/01/26, 18:45 - Alice: message text`
//!
//! Lines that match neither format are continuations of the message that is
//! currently open; continuation text before any header becomes a message
//! from the synthetic `"Unknown"` sender. Parsing is infallible: a header
//! whose date/time tokens are not a real calendar date keeps its verbatim
//! text fields with an absent timestamp, and input with no recognizable
//! headers at all degrades to a single `"Unknown"` message.

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;

// [18:45, 02/01/2026] Alice: hi (hour 1-2 digits, minute 2, 4-digit year)
static BRACKET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{1,2}:\d{2}),\s*(\d{1,2}/\d{1,2}/\d{4})\]\s*([^:]+):\s?(.*)$")
        .expect("bracket header regex")
});

// 02/01/26, 18:45 - Alice: hi (year 2 or 4 digits)
static DASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2})\s*-\s*([^:]+):\s?(.*)$")
        .expect("dash header regex")
});

/// Recognized header-line variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderLine<'a> {
    /// `[H:MM, DD/MM/YYYY] Sender: text`
    Bracket {
        time: &'a str,
        date: &'a str,
        sender: &'a str,
        text: &'a str,
    },
    /// `DD/MM/YY(YY), H:MM - Sender: text`
    Dash {
        date: &'a str,
        time: &'a str,
        sender: &'a str,
        text: &'a str,
    },
}

impl<'a> HeaderLine<'a> {
    /// Matches a trimmed line against the header formats, bracket first.
    ///
    /// The delimiter shapes are mutually exclusive, but the order is the
    /// defined tie-break regardless.
    fn matches(line: &'a str) -> Option<Self> {
        if let Some(caps) = BRACKET_RE.captures(line) {
            return Some(HeaderLine::Bracket {
                time: caps.get(1).map_or("", |m| m.as_str()),
                date: caps.get(2).map_or("", |m| m.as_str()),
                sender: caps.get(3).map_or("", |m| m.as_str().trim()),
                text: caps.get(4).map_or("", |m| m.as_str()),
            });
        }
        if let Some(caps) = DASH_RE.captures(line) {
            return Some(HeaderLine::Dash {
                date: caps.get(1).map_or("", |m| m.as_str()),
                time: caps.get(2).map_or("", |m| m.as_str()),
                sender: caps.get(3).map_or("", |m| m.as_str().trim()),
                text: caps.get(4).map_or("", |m| m.as_str()),
            });
        }
        None
    }

    /// Opens a new message from the captured header fields.
    fn open_message(self) -> Message {
        let (date, time, sender, text) = match self {
            HeaderLine::Bracket {
                time,
                date,
                sender,
                text,
            }
            | HeaderLine::Dash {
                date,
                time,
                sender,
                text,
            } => (date, time, sender, text),
        };

        Message::with_header(sender, text, date, time, parse_timestamp(date, time))
    }
}

/// Parses the header date/time tokens into a timestamp.
///
/// A 2-digit year field selects `%y`, anything else `%Y`. Returns `None` on
/// any failure (invalid calendar date, non-numeric fields) instead of
/// erroring; the caller keeps the verbatim tokens either way.
fn parse_timestamp(date_text: &str, time_text: &str) -> Option<DateTime<Utc>> {
    let year_len = date_text.rsplit('/').next().map_or(0, str::len);
    let format = if year_len == 2 {
        "%d/%m/%y %H:%M"
    } else {
        "%d/%m/%Y %H:%M"
    };

    let datetime_str = format!("{date_text} {time_text}");
    NaiveDateTime::parse_from_str(&datetime_str, format)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parses cleaned chat text into a sequence of messages.
///
/// Every input line belongs to exactly one message. Blank lines are skipped
/// entirely; they neither open nor extend a message. A finalized message
/// whose trimmed body is empty is dropped silently. Output preserves input
/// order.
///
/// # Example
///
/// ```
/// use chatlens::parse;
///
/// let messages = parse("[18:45, 02/01/2026] Alice: hi hi hi");
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].sender, "Alice");
/// assert_eq!(messages[0].body, "hi hi hi");
/// ```
pub fn parse(text: &str) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut open: Option<Message> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = HeaderLine::matches(line) {
            finalize(&mut messages, open.take());
            open = Some(header.open_message());
        } else if let Some(msg) = open.as_mut() {
            // Continuation of the open message (multiline)
            msg.body.push('\n');
            msg.body.push_str(raw);
        } else {
            // Orphan text before the first header
            open = Some(Message::unknown(raw));
        }
    }

    finalize(&mut messages, open.take());
    messages
}

/// Trims and emits the open message, dropping it when the body is empty.
fn finalize(out: &mut Vec<Message>, open: Option<Message>) {
    let Some(mut msg) = open else { return };

    let trimmed = msg.body.trim();
    if trimmed.is_empty() {
        return;
    }
    if trimmed.len() != msg.body.len() {
        msg.body = trimmed.to_string();
    }
    out.push(msg);
}
