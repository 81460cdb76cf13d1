//! Word tokenization and the layered filter pipeline.
//!
//! The tokenizer itself carries no per-chat context: it lower-cases, strips
//! URLs, clock times, dates and bare integers, extracts letter/apostrophe
//! runs, and drops stopwords, junk words (month names, am/pm) and
//! single-character tokens. Exclusion of participant display names happens
//! at aggregation time via [`participant_name_tokens`], keeping the
//! tokenizer reusable.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use stopwords::{Language, Spark, Stopwords};

/// Month names and meridiem markers that survive the numeric strips but are
/// never interesting chat vocabulary.
const JUNK_WORDS: [&str; 14] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "am",
    "pm",
];

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("url regex"));
static CLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{1,2}:\d{2}\b").expect("clock regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").expect("date regex"));
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").expect("number regex"));
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}']+").expect("word regex"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}{2,}").expect("name regex"));

/// Process-wide stopword set, initialized once and never mutated.
fn stopword_set() -> &'static HashSet<&'static str> {
    static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
        Spark::stopwords(Language::English)
            .unwrap_or_default()
            .iter()
            .copied()
            .collect()
    });
    &STOPWORDS
}

fn junk_set() -> &'static HashSet<&'static str> {
    static JUNK: Lazy<HashSet<&'static str>> = Lazy::new(|| JUNK_WORDS.into_iter().collect());
    &JUNK
}

/// Extracts filtered word tokens from message text.
///
/// # Example
///
/// ```
/// use chatlens::analytics::tokenize;
///
/// let tokens = tokenize("Dinner at 18:45 on 02/01/2026, check https://example.com for pizza!");
/// assert_eq!(tokens, vec!["dinner", "check", "pizza"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped_urls = URL_RE.replace_all(&lowered, " ");
    let stripped_clock = CLOCK_RE.replace_all(&stripped_urls, " ");
    let stripped_dates = DATE_RE.replace_all(&stripped_clock, " ");
    let stripped = NUMBER_RE.replace_all(&stripped_dates, " ");

    let stop = stopword_set();
    let junk = junk_set();

    WORD_RE
        .find_iter(&stripped)
        .map(|m| m.as_str())
        .filter(|token| {
            token.chars().count() > 1 && !stop.contains(*token) && !junk.contains(*token)
        })
        .map(str::to_string)
        .collect()
}

/// Derives the per-request exclusion set from participant display names.
///
/// Each name is lower-cased and split into letter runs of at least two
/// characters, so "Alice B" contributes `alice`, and a ranked word list can
/// never be dominated by the people doing the talking.
pub fn participant_name_tokens<'a, I>(senders: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = HashSet::new();
    for sender in senders {
        let lowered = sender.to_lowercase();
        for m in NAME_RE.find_iter(&lowered) {
            tokens.insert(m.as_str().to_string());
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(tokenize("PIZZA Pizza pizza"), vec!["pizza", "pizza", "pizza"]);
    }

    #[test]
    fn test_strips_urls() {
        let tokens = tokenize("look https://example.com/path and http://other.io too");
        assert!(!tokens.iter().any(|t| t.contains("example")));
        assert!(!tokens.iter().any(|t| t.contains("other")));
        assert!(tokens.contains(&"look".to_string()));
    }

    #[test]
    fn test_strips_clock_and_dates() {
        let tokens = tokenize("meet 18:45 on 02/01/2026 or 2/1/26");
        assert!(tokens.contains(&"meet".to_string()));
        assert!(!tokens.iter().any(|t| t.contains("18")));
        assert!(!tokens.iter().any(|t| t.contains("2026")));
    }

    #[test]
    fn test_strips_bare_integers() {
        let tokens = tokenize("call me 12345 maybe");
        assert_eq!(tokens, vec!["call", "maybe"]);
    }

    #[test]
    fn test_drops_stopwords_and_short_tokens() {
        let tokens = tokenize("I went to the market a lot");
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"to".to_string()));
        assert!(!tokens.contains(&"a".to_string()));
        assert!(tokens.contains(&"market".to_string()));
    }

    #[test]
    fn test_drops_junk_words() {
        let tokens = tokenize("fireworks in January at 9 pm");
        assert!(!tokens.contains(&"january".to_string()));
        assert!(!tokens.contains(&"pm".to_string()));
        assert!(tokens.contains(&"fireworks".to_string()));
    }

    #[test]
    fn test_length_two_survives() {
        // "hi" is exactly two characters and must pass the length filter
        assert_eq!(tokenize("hi hi hi"), vec!["hi", "hi", "hi"]);
    }

    #[test]
    fn test_apostrophe_runs() {
        let tokens = tokenize("that's Alice's guitar");
        assert!(tokens.contains(&"alice's".to_string()));
        assert!(tokens.contains(&"guitar".to_string()));
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("42 7:30 01/02/2026").is_empty());
    }

    #[test]
    fn test_participant_name_tokens() {
        let tokens = participant_name_tokens(["Alice B", "Бота Ж"]);
        assert!(tokens.contains("alice"));
        assert!(tokens.contains("бота"));
        // single-letter runs are dropped
        assert!(!tokens.contains("b"));
        assert!(!tokens.contains("ж"));
    }

    #[test]
    fn test_participant_tokens_empty() {
        assert!(participant_name_tokens([]).is_empty());
    }
}
