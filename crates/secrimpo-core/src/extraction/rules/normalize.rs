//! Whitespace normalization and character-based text windows.
//!
//! Every search in this crate works on byte offsets into normalized text.
//! Windows are measured in characters, so offsets are always moved with
//! `char_indices` and never land inside a multi-byte code point.

use std::borrow::Cow;

/// Collapse runs of whitespace and control characters into a single space
/// and trim both ends.
///
/// Already-normalized input is returned borrowed.
pub fn normalize_whitespace(text: &str) -> Cow<'_, str> {
    if is_normalized(text) {
        return Cow::Borrowed(text);
    }

    let collapsed = text
        .split(is_separator)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Cow::Owned(collapsed)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

fn is_normalized(text: &str) -> bool {
    // Start as if preceded by a space so a leading space is rejected.
    let mut after_space = true;

    for c in text.chars() {
        if c == ' ' {
            if after_space {
                return false;
            }
            after_space = true;
        } else if is_separator(c) {
            return false;
        } else {
            after_space = false;
        }
    }

    !text.ends_with(' ')
}

/// Byte offset `n` characters before `index`, clipped to the start of `text`.
pub fn offset_back(text: &str, index: usize, n: usize) -> usize {
    text[..index]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(index)
}

/// Byte offset `n` characters after `index`, clipped to the end of `text`.
pub fn offset_forward(text: &str, index: usize, n: usize) -> usize {
    text[index..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| index + i)
        .unwrap_or(text.len())
}

/// The `n` characters following byte offset `index`.
pub fn window_after(text: &str, index: usize, n: usize) -> &str {
    &text[index..offset_forward(text, index, n)]
}

/// At most the first `n` characters of `text`.
pub fn truncate_chars(text: &str, n: usize) -> &str {
    window_after(text, 0, n)
}
