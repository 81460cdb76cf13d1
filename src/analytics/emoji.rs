//! Emoji extraction over a fixed set of Unicode blocks.
//!
//! The scan is greedy: adjacent emoji code points form one combined entry,
//! so a reaction like "🔥❤️" counts as a single symbol run rather than three
//! scalars. The block list below is authoritative. Variation selectors,
//! skin tones and ZWJ joiners fall inside it and therefore stay attached to
//! their base emoji, but no per-sequence special-casing is attempted.

/// Returns `true` for code points inside the recognized emoji blocks.
fn is_emoji_char(c: char) -> bool {
    let code = c as u32;
    matches!(
        code,
        0x1F300..=0x1F9FF // Misc Symbols and Pictographs, Emoticons, Transport, Supplemental
            | 0x1FA00..=0x1FAFF // Symbols and Pictographs Extended-A
            | 0x2600..=0x26FF // Miscellaneous Symbols
            | 0x2700..=0x27BF // Dingbats
            | 0x1F1E6..=0x1F1FF // Regional Indicator Symbols (flags)
            | 0xFE00..=0xFE0F // Variation Selectors
            | 0x200D // Zero Width Joiner
            | 0x20E3 // Combining Enclosing Keycap
    )
}

/// Extracts every maximal emoji run from raw (non-lower-cased) text.
///
/// Order of appearance is preserved, duplicates included.
///
/// # Example
///
/// ```
/// use chatlens::analytics::extract_emojis;
///
/// assert_eq!(extract_emojis("great 🔥 really 🔥"), vec!["🔥", "🔥"]);
/// assert_eq!(extract_emojis("🔥❤️"), vec!["🔥❤️"]);
/// ```
pub fn extract_emojis(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if is_emoji_char(c) {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
