//! Text and date helpers shared by the store and the presentation layer.

use chrono::{DateTime, Utc};

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;
pub const DEFAULT_PREVIEW_LENGTH: usize = 150;

const ELLIPSIS: &str = "...";

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, rounded up.
///
/// A `words_per_minute` of zero falls back to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn calculate_read_time(text: &str, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let words = word_count(text) as u32;
    words.div_ceil(wpm)
}

/// Long form date, e.g. "January 15, 2024".
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

/// Short form date used on list cards, e.g. "Jan 15, 2024".
pub fn format_date_short(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Cuts `text` to at most `max_len` characters and appends "..." when it had to cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{}{}", head.trim_end(), ELLIPSIS)
}

/// URL-friendly slug: lowercase words joined by single dashes.
pub fn generate_slug(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    let mut pending_dash = false;
    for c in cleaned.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_dash = true;
            continue;
        }
        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;
        slug.push(c);
    }
    slug
}
