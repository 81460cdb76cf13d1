//! Frequency analytics over parsed messages.
//!
//! [`analyze`] consumes a message slice plus a participant-name exclusion
//! set and produces the full [`AnalyticsResult`]: totals, per-sender counts,
//! most-active day and hour, and ranked word/emoji lists. Word ranking is
//! two-tier: tokens occurring at least twice rank first (`repeated` mode);
//! only when nothing repeats does the ranking degrade to raw frequency
//! (`fallback` mode). Single-occurrence "top words" from short chats are
//! noise, so the fallback engages only when there is genuinely no
//! repetition signal.
//!
//! All tie-breaks are by first-seen order during aggregation, never
//! alphabetical.

pub mod emoji;
pub mod tokens;

pub use emoji::extract_emojis;
pub use tokens::{participant_name_tokens, tokenize};

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Ranked lists never exceed this many entries.
const TOP_LIMIT: usize = 10;

/// A word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// An emoji run and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: u64,
}

/// Which ranking tier produced the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopWordsMode {
    /// Only tokens occurring at least twice were ranked.
    #[default]
    Repeated,
    /// No token repeated; all tokens were ranked by raw frequency.
    Fallback,
}

/// Aggregate analytics for one request.
///
/// Constructed fresh per call and returned to the caller; never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Number of messages in the analyzed window.
    pub total_messages: usize,

    /// Message count per sender display name.
    pub messages_per_user: HashMap<String, u64>,

    /// `YYYY-MM-DD` key with the most timestamped messages; absent when no
    /// message carries a timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub most_active_day: Option<String>,

    /// Zero-padded `"00"`–`"23"` hour key with the most timestamped
    /// messages; absent when no message carries a timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub most_active_hour: Option<String>,

    /// Ranking tier that produced `top_words`.
    pub top_words_mode: TopWordsMode,

    /// Up to 10 ranked words, count descending, first-seen tie-break.
    pub top_words: Vec<WordCount>,

    /// Up to 10 ranked emoji runs, count descending, first-seen tie-break.
    pub top_emojis: Vec<EmojiCount>,
}

/// Occurrence counter that remembers first-seen order.
///
/// `HashMap` iteration order is arbitrary, so the entries live in a `Vec` in
/// encounter order and the map only holds indexes into it. Ranking with a
/// stable sort then keeps the documented first-seen tie-break.
#[derive(Debug, Default)]
struct FirstSeenCounter {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FirstSeenCounter {
    fn bump(&mut self, key: &str) {
        if let Some(&idx) = self.slots.get(key) {
            self.entries[idx].1 += 1;
        } else {
            self.slots.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), 1));
        }
    }

    /// Entries sorted by count descending; the sort is stable, so equal
    /// counts stay in first-seen order.
    fn ranked(self) -> Vec<(String, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Key with the highest count; the earliest-seen key wins ties.
    fn leader(&self) -> Option<String> {
        let mut best: Option<&(String, u64)> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.1 <= current.1 => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(key, _)| key.clone())
    }
}

/// Computes analytics over a message window.
///
/// `excluded_tokens` holds the lower-cased participant-name tokens from
/// [`participant_name_tokens`]; matching word tokens are skipped at this
/// stage so the tokenizer itself stays chat-agnostic. Messages without a
/// timestamp still count toward totals and per-sender stats but not toward
/// day/hour aggregates. An empty slice yields the zeroed result shape.
///
/// # Example
///
/// ```
/// use chatlens::{analyze, parse};
/// use chatlens::analytics::{participant_name_tokens, TopWordsMode};
///
/// let messages = parse("[18:45, 02/01/2026] Alice: hi hi hi");
/// let excluded = participant_name_tokens(messages.iter().map(|m| m.sender.as_str()));
/// let report = analyze(&messages, &excluded);
///
/// assert_eq!(report.total_messages, 1);
/// assert_eq!(report.top_words_mode, TopWordsMode::Repeated);
/// assert_eq!(report.top_words[0].word, "hi");
/// assert_eq!(report.top_words[0].count, 3);
/// ```
pub fn analyze(messages: &[Message], excluded_tokens: &HashSet<String>) -> AnalyticsResult {
    if messages.is_empty() {
        return AnalyticsResult::default();
    }

    let mut messages_per_user: HashMap<String, u64> = HashMap::new();
    let mut days = FirstSeenCounter::default();
    let mut hours = FirstSeenCounter::default();
    let mut words = FirstSeenCounter::default();
    let mut emojis = FirstSeenCounter::default();

    for msg in messages {
        *messages_per_user.entry(msg.sender.clone()).or_insert(0) += 1;

        if let Some(ts) = msg.timestamp {
            days.bump(&ts.format("%Y-%m-%d").to_string());
            hours.bump(&ts.format("%H").to_string());
        }

        for token in tokenize(&msg.body) {
            if !excluded_tokens.contains(&token) {
                words.bump(&token);
            }
        }
        for run in extract_emojis(&msg.body) {
            emojis.bump(&run);
        }
    }

    let most_active_day = days.leader();
    let most_active_hour = hours.leader();

    let ranked_words = words.ranked();
    let repeated: Vec<WordCount> = ranked_words
        .iter()
        .filter(|(_, count)| *count >= 2)
        .take(TOP_LIMIT)
        .map(|(word, count)| WordCount {
            word: word.clone(),
            count: *count,
        })
        .collect();

    let (top_words_mode, top_words) = if !repeated.is_empty() {
        (TopWordsMode::Repeated, repeated)
    } else if ranked_words.is_empty() {
        (TopWordsMode::Repeated, Vec::new())
    } else {
        let all = ranked_words
            .into_iter()
            .take(TOP_LIMIT)
            .map(|(word, count)| WordCount { word, count })
            .collect();
        (TopWordsMode::Fallback, all)
    };

    let top_emojis = emojis
        .ranked()
        .into_iter()
        .take(TOP_LIMIT)
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect();

    AnalyticsResult {
        total_messages: messages.len(),
        messages_per_user,
        most_active_day,
        most_active_hour,
        top_words_mode,
        top_words,
        top_emojis,
    }
}
