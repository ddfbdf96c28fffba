//! Text measurement and word wrapping for the speech bubble.
//!
//! Widths are terminal columns, not bytes. Cyrillic letters (two bytes in
//! UTF-8) take one column, CJK and most emoji take two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Default maximum width of a wrapped line, in columns.
pub const DEFAULT_MAX_WIDTH: usize = 50;

/// Returns the display width of `s` in terminal columns.
pub fn visual_width(s: &str) -> usize {
    s.width()
}

/// Counts characters encoded as two UTF-8 bytes with a lead byte in
/// `0xD0..=0xDF` (U+0400..=U+07FF: Cyrillic and its neighbors).
///
/// Diagnostic only; nothing sizes the frame with it.
pub fn count_double_byte_chars(s: &str) -> usize {
    s.chars()
        .filter(|c| ('\u{0400}'..='\u{07FF}').contains(c))
        .count()
}

/// Wraps `message` into lines no wider than `max_width` columns.
///
/// Words are split on whitespace and joined with single spaces. A word
/// wider than `max_width` gets its own run of lines, hard-split at character
/// boundaries. A `max_width` of 0 behaves like 1.
pub fn wrap_lines(message: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in message.split_whitespace() {
        let word_width = visual_width(word);
        let separator = usize::from(!current.is_empty());

        if current_width + separator + word_width <= max_width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += separator + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > max_width {
            lines.extend(hard_split(word, max_width));
        } else {
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Splits a single word into chunks of at most `max_width` columns.
///
/// A character wider than `max_width` on its own still gets a chunk.
fn hard_split(word: &str, max_width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if chunk_width + ch_width > max_width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width += ch_width;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks
}
