//! Trailing-window selection and textual re-rendering.
//!
//! Summarization and analytics both operate on "the last N messages". The
//! window is a plain trailing slice; rendering reproduces the bracket header
//! form so the output can be fed straight back through [`crate::parse`] or
//! into a prompt template.

use crate::message::Message;

/// Returns the most recent `n` messages, order preserved.
///
/// `n <= 0` means "all messages"; `n` beyond the available count is clamped,
/// never an error.
///
/// # Example
///
/// ```
/// use chatlens::{last_n, Message};
///
/// let messages = vec![
///     Message::new("Alice", "one"),
///     Message::new("Bob", "two"),
///     Message::new("Alice", "three"),
/// ];
/// assert_eq!(last_n(&messages, 2).len(), 2);
/// assert_eq!(last_n(&messages, 2)[0].body, "two");
/// assert_eq!(last_n(&messages, 0).len(), 3);
/// assert_eq!(last_n(&messages, 99).len(), 3);
/// ```
pub fn last_n(messages: &[Message], n: i64) -> &[Message] {
    if n <= 0 {
        return messages;
    }
    let n = n as usize;
    if n >= messages.len() {
        messages
    } else {
        &messages[messages.len() - n..]
    }
}

/// Re-renders messages into canonical chat text.
///
/// Messages carrying both header tokens come out as
/// `[time, date] sender: body`; the rest fall back to `sender: body`.
/// Header-bearing output reparses to the same senders and bodies; the
/// fallback form carries no header, so date and time are lost on a
/// round-trip.
pub fn render(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| {
            if msg.has_header_text() {
                format!(
                    "[{}, {}] {}: {}",
                    msg.time_text, msg.date_text, msg.sender, msg.body
                )
            } else {
                format!("{}: {}", msg.sender, msg.body)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn sample() -> Vec<Message> {
        parse(
            "[18:45, 02/01/2026] Alice: first\n\
             [18:46, 02/01/2026] Bob: second\n\
             [18:47, 02/01/2026] Alice: third\n\
             [18:48, 02/01/2026] Bob: fourth",
        )
    }

    #[test]
    fn test_last_n_zero_returns_all() {
        let messages = sample();
        assert_eq!(last_n(&messages, 0).len(), 4);
        assert_eq!(last_n(&messages, -3).len(), 4);
    }

    #[test]
    fn test_last_n_trailing_slice() {
        let messages = sample();
        let window = last_n(&messages, 2);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].body, "third");
        assert_eq!(window[1].body, "fourth");
    }

    #[test]
    fn test_last_n_clamps() {
        let messages = sample();
        assert_eq!(last_n(&messages, 100).len(), 4);
    }

    #[test]
    fn test_last_n_empty() {
        assert!(last_n(&[], 5).is_empty());
    }

    #[test]
    fn test_render_header_form() {
        let messages = parse("[18:45, 02/01/2026] Alice: hi");
        assert_eq!(render(&messages), "[18:45, 02/01/2026] Alice: hi");
    }

    #[test]
    fn test_render_fallback_form() {
        let messages = vec![Message::new("Alice", "no header here")];
        assert_eq!(render(&messages), "Alice: no header here");
    }

    #[test]
    fn test_render_reparse_round_trip() {
        let messages = sample();
        let reparsed = parse(&render(&messages));
        assert_eq!(reparsed.len(), messages.len());
        for (orig, back) in messages.iter().zip(&reparsed) {
            assert_eq!(orig.sender, back.sender);
            assert_eq!(orig.body, back.body);
            assert_eq!(orig.timestamp, back.timestamp);
        }
    }

    #[test]
    fn test_render_multiline_body_round_trip() {
        let messages = parse("[18:45, 02/01/2026] Alice: first line\nand a second");
        let reparsed = parse(&render(&messages));
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed[0].body, "first line\nand a second");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }
}
