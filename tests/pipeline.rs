//! End-to-end tests for the clean → parse → window → analyze pipeline.

use chatlens::prelude::*;

fn exclusions_for(messages: &[Message]) -> std::collections::HashSet<String> {
    participant_name_tokens(messages.iter().map(|m| m.sender.as_str()))
}

// =========================================================================
// Parsing scenarios
// =========================================================================

#[test]
fn test_single_message_scenario() {
    let messages = parse(&clean("[18:45, 02/01/2026] Alice: hi hi hi"));
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[0].body, "hi hi hi");

    let report = analyze(&messages, &exclusions_for(&messages));
    assert_eq!(report.top_words_mode, TopWordsMode::Repeated);
    assert_eq!(report.top_words.len(), 1);
    assert_eq!(report.top_words[0].word, "hi");
    assert_eq!(report.top_words[0].count, 3);
}

#[test]
fn test_encryption_banner_never_reaches_parser() {
    let raw = "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.\n\
               [18:45, 02/01/2026] Alice: actual content here";
    let messages = parse(&clean(raw));
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, "Alice");
}

#[test]
fn test_both_formats_in_one_export() {
    let raw = "[18:45, 02/01/2026] Alice: bracket style\n\
               03/01/26, 9:15 - Bob: dash style\n\
               with a continuation line";
    let messages = parse(&clean(raw));
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[1].sender, "Bob");
    assert_eq!(messages[1].body, "dash style\nwith a continuation line");
    assert!(messages[1].timestamp.is_some());
}

#[test]
fn test_total_matches_parse_count_after_windowing() {
    let raw = "[18:45, 02/01/2026] Alice: one\n\
               [18:46, 02/01/2026] Bob: two\n\
               [18:47, 02/01/2026] Alice: three";
    let messages = parse(&clean(raw));
    let window = last_n(&messages, 2);
    let report = analyze(window, &exclusions_for(window));
    assert_eq!(report.total_messages, window.len());
    assert_eq!(report.total_messages, 2);
}

// =========================================================================
// Windowing and re-rendering
// =========================================================================

#[test]
fn test_window_then_render_then_reparse() {
    let raw = "[18:45, 02/01/2026] Alice: pizza tonight\n\
               [18:46, 02/01/2026] Bob: sounds great\n\
               [18:47, 02/01/2026] Alice: see you at eight";
    let messages = parse(&clean(raw));
    let window = last_n(&messages, 2);

    let reparsed = parse(&render(window));
    assert_eq!(reparsed.len(), 2);
    for (orig, back) in window.iter().zip(&reparsed) {
        assert_eq!(orig.sender, back.sender);
        assert_eq!(orig.body, back.body);
    }
}

#[test]
fn test_window_size_beyond_count_is_clamped() {
    let messages = parse("[18:45, 02/01/2026] Alice: only one");
    assert_eq!(last_n(&messages, 50).len(), 1);
}

// =========================================================================
// Analytics scenarios
// =========================================================================

#[test]
fn test_fallback_when_no_word_repeats() {
    let raw = "[18:45, 02/01/2026] Alice: pizza\n\
               [18:46, 02/01/2026] Bob: guitar";
    let messages = parse(&clean(raw));
    let report = analyze(&messages, &exclusions_for(&messages));

    assert_eq!(report.top_words_mode, TopWordsMode::Fallback);
    let words: Vec<&str> = report.top_words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, ["pizza", "guitar"]);
    assert!(report.top_words.iter().all(|w| w.count == 1));
}

#[test]
fn test_empty_input_zeroed_shape() {
    let messages = parse(&clean(""));
    let report = analyze(&messages, &exclusions_for(&messages));

    assert_eq!(report.total_messages, 0);
    assert!(report.messages_per_user.is_empty());
    assert!(report.most_active_day.is_none());
    assert!(report.most_active_hour.is_none());
    assert_eq!(report.top_words_mode, TopWordsMode::Repeated);
    assert!(report.top_words.is_empty());
    assert!(report.top_emojis.is_empty());
}

#[test]
fn test_emoji_run_counts_as_one_entry() {
    let messages = parse("[18:45, 02/01/2026] Alice: 🔥❤️");
    let report = analyze(&messages, &exclusions_for(&messages));

    assert_eq!(report.top_emojis.len(), 1);
    assert_eq!(report.top_emojis[0].emoji, "🔥❤️");
    assert_eq!(report.top_emojis[0].count, 1);
}

#[test]
fn test_sender_names_never_rank() {
    let raw = "[18:45, 02/01/2026] Alice: alice here\n\
               [18:46, 02/01/2026] Bob: alice alice alice";
    let messages = parse(&clean(raw));
    let report = analyze(&messages, &exclusions_for(&messages));
    assert!(report.top_words.iter().all(|w| w.word != "alice"));
    assert!(report.top_words.iter().all(|w| w.word != "bob"));
}

#[test]
fn test_unparseable_header_still_counted() {
    let raw = "[18:45, 31/02/2026] Alice: impossible date\n\
               [18:46, 02/01/2026] Bob: real date";
    let messages = parse(&clean(raw));
    let report = analyze(&messages, &exclusions_for(&messages));

    // Both messages count toward totals and per-sender stats
    assert_eq!(report.total_messages, 2);
    assert_eq!(report.messages_per_user["Alice"], 1);
    // Only the timestamped one feeds day/hour aggregates
    assert_eq!(report.most_active_day.as_deref(), Some("2026-01-02"));
    assert_eq!(report.most_active_hour.as_deref(), Some("18"));
}

#[test]
fn test_headerless_paste_degrades_to_unknown() {
    let raw = "just pasted notes\nno headers anywhere";
    let messages = parse(&clean(raw));
    let report = analyze(&messages, &exclusions_for(&messages));

    assert_eq!(report.total_messages, 1);
    assert_eq!(report.messages_per_user["Unknown"], 1);
    assert!(report.most_active_day.is_none());
}

#[test]
fn test_ranked_lists_capped_at_ten() {
    let mut lines = Vec::new();
    for (i, minute) in (0..14).enumerate() {
        // 14 distinct repeated words across 14 messages
        let word = format!("topic{}", (b'a' + i as u8) as char);
        lines.push(format!(
            "[18:{:02}, 02/01/2026] Alice: {word} {word}",
            minute
        ));
    }
    let messages = parse(&lines.join("\n"));
    let report = analyze(&messages, &exclusions_for(&messages));

    assert_eq!(report.top_words_mode, TopWordsMode::Repeated);
    assert_eq!(report.top_words.len(), 10);
    assert!(report.top_words.iter().all(|w| w.count >= 2));
}
