//! Helpers for capturing free-text values that follow a label.

use super::normalize::{normalize_whitespace, truncate_chars, window_after};
use super::patterns::{MONEY_ANNOTATION, PERSON_NAME_PREFIX};
use super::proximity::Keyword;
use super::vocabulary::{is_label_token, LABEL_BOUNDARY};

/// Names longer than this are cut to their first words.
const NAME_MAX_CHARS: usize = 60;
const NAME_MAX_WORDS: usize = 5;

/// Forward windows of `n` characters after each keyword found in `text`,
/// in probe order.
pub fn windows_after_keywords<'a>(
    text: &'a str,
    keywords: &'a [Keyword],
    n: usize,
) -> impl Iterator<Item = &'a str> + 'a {
    keywords
        .iter()
        .filter_map(move |keyword| keyword.find(text))
        .map(move |(_, end)| window_after(text, end, n))
}

/// Drop the colon, dashes and spaces that separate a label from its value.
pub fn strip_leading_punctuation(text: &str) -> &str {
    text.trim_start_matches(|c: char| matches!(c, ':' | '.' | '-' | '–' | '—') || c.is_whitespace())
}

/// Cut `text` before the next field label or section header.
pub fn cut_at_label(text: &str) -> &str {
    match LABEL_BOUNDARY.find(text) {
        Some(m) => text[..m.start()].trim_end(),
        None => text.trim_end(),
    }
}

/// Strip the separators left at the end of a value.
pub fn trim_trailing_separators(text: &str) -> &str {
    text.trim_end_matches(|c: char| matches!(c, ',' | ';' | ':' | '-' | '–') || c.is_whitespace())
}

/// Remove monetary annotations such as "(R$ 50,00)" or "Valor estimado: R$ 30,00".
pub fn strip_money(text: &str) -> String {
    normalize_whitespace(&MONEY_ANNOTATION.replace_all(text, " ")).into_owned()
}

/// Truncate to at most `max_chars`, backing off to the last word boundary.
pub fn truncate_words(text: &str, max_chars: usize) -> &str {
    if text.chars().count() <= max_chars {
        return text;
    }

    let head = truncate_chars(text, max_chars);
    match head.rfind(' ') {
        Some(space) if space > 0 => head[..space].trim_end(),
        _ => head,
    }
}

/// Number of ASCII digits in `text`.
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Label value: text after the label, up to the next label, with the
/// separating punctuation removed. Empty values are `None`.
pub fn label_value(window: &str) -> Option<&str> {
    let value = trim_trailing_separators(cut_at_label(strip_leading_punctuation(window)));
    if value.is_empty() { None } else { Some(value) }
}

/// Capitalized personal name at the start of `text`.
///
/// A capture holding any label word ("Genesis", "Matrícula", "Artigo", ...)
/// is rejected; at least two name words are required and trailing
/// connectors are dropped.
pub fn leading_person_name(text: &str) -> Option<String> {
    let caps = PERSON_NAME_PREFIX.captures(text)?;
    let mut words: Vec<&str> = caps[1].split_whitespace().collect();
    if words.iter().any(|word| is_label_token(word)) {
        return None;
    }

    while words.last().is_some_and(|word| is_connector(word)) {
        words.pop();
    }
    if words.iter().filter(|word| !is_connector(word)).count() < 2 {
        return None;
    }

    if words.join(" ").chars().count() > NAME_MAX_CHARS {
        words.truncate(NAME_MAX_WORDS);
    }
    Some(words.join(" "))
}

fn is_connector(word: &str) -> bool {
    matches!(word, "da" | "de" | "do" | "das" | "dos" | "e")
}
