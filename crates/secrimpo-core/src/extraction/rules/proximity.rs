//! Keyword-anchored proximity search.
//!
//! A value is located by finding a label keyword and scanning a bounded
//! window around it: 50 characters before the keyword through `max_distance`
//! characters after it. The pattern is always scanned over the whole window
//! and every match is collected; the first match that starts after the
//! keyword wins, otherwise the first match in the window.

use regex::Regex;
use tracing::trace;

use super::normalize::{normalize_whitespace, offset_back, offset_forward};

/// Characters scanned before a keyword.
pub const KEYWORD_LOOKBEHIND: usize = 50;

/// A label keyword matched case-insensitively.
///
/// Keyword edges that are alphanumeric get word boundaries, so `RG` does not
/// match inside `cargo`.
#[derive(Debug, Clone)]
pub struct Keyword {
    label: &'static str,
    pattern: Regex,
}

impl Keyword {
    pub fn new(label: &'static str) -> Self {
        let leading = if label.chars().next().is_some_and(char::is_alphanumeric) {
            r"\b"
        } else {
            ""
        };
        let trailing = if label.chars().last().is_some_and(char::is_alphanumeric) {
            r"\b"
        } else {
            ""
        };

        let pattern = format!("(?i){}{}{}", leading, regex::escape(label), trailing);
        Self {
            label,
            pattern: Regex::new(&pattern).unwrap(),
        }
    }

    /// The keyword as written in the probe list.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Byte range of the first occurrence in `text`.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.pattern.find(text).map(|m| (m.start(), m.end()))
    }
}

/// Build an ordered probe list.
pub fn keywords(labels: &[&'static str]) -> Vec<Keyword> {
    labels.iter().map(|label| Keyword::new(label)).collect()
}

/// A candidate value found inside a context window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProximityMatch {
    /// Trimmed matched value.
    pub value: String,
    /// Byte offset of the value inside the window.
    pub index: usize,
}

/// Find a value matching `pattern` near the first keyword that yields one.
///
/// When `pattern` has a capture group, the first group is the value.
pub fn find_value_near_keyword(
    text: &str,
    keywords: &[Keyword],
    pattern: &Regex,
    max_distance: usize,
) -> Option<String> {
    find_value_near_keyword_where(text, keywords, pattern, max_distance, |_| true)
}

/// Same as [`find_value_near_keyword`], keeping only candidates accepted by
/// `accept`.
pub fn find_value_near_keyword_where<F>(
    text: &str,
    keywords: &[Keyword],
    pattern: &Regex,
    max_distance: usize,
    accept: F,
) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    let text = normalize_whitespace(text);

    for keyword in keywords {
        let Some((start, end)) = keyword.find(&text) else {
            continue;
        };

        let window_start = offset_back(&text, start, KEYWORD_LOOKBEHIND);
        let window_end = offset_forward(&text, end, max_distance);
        let window = &text[window_start..window_end];
        let keyword_offset = start - window_start;

        let candidates: Vec<ProximityMatch> = scan_window(window, pattern)
            .into_iter()
            .filter(|m| accept(&m.value))
            .collect();

        if let Some(found) = pick_candidate(candidates, keyword_offset) {
            trace!(keyword = keyword.label(), value = %found.value, "proximity match");
            return Some(found.value);
        }
    }

    None
}

/// Collect every match of `pattern` in `window`.
pub fn scan_window(window: &str, pattern: &Regex) -> Vec<ProximityMatch> {
    pattern
        .captures_iter(window)
        .filter_map(|caps| {
            let m = caps.get(1).or_else(|| caps.get(0))?;
            let value = m.as_str().trim();
            if value.is_empty() {
                return None;
            }
            Some(ProximityMatch {
                value: value.to_string(),
                index: m.start(),
            })
        })
        .collect()
}

/// Prefer the first candidate after the keyword, else the first overall.
fn pick_candidate(candidates: Vec<ProximityMatch>, keyword_offset: usize) -> Option<ProximityMatch> {
    let after = candidates.iter().position(|m| m.index > keyword_offset);
    let chosen = after.unwrap_or(0);
    candidates.into_iter().nth(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn digits() -> Regex {
        Regex::new(r"\b\d{4,}\b").unwrap()
    }

    #[test]
    fn test_prefers_value_after_keyword() {
        let kws = keywords(&["Genesis"]);
        let text = "Registro 5555 anterior. Genesis 4821 consta";
        assert_eq!(
            find_value_near_keyword(text, &kws, &digits(), 30),
            Some("4821".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_value_before_keyword() {
        let kws = keywords(&["Genesis"]);
        let text = "Registro 5555 no sistema Genesis sem numero";
        assert_eq!(
            find_value_near_keyword(text, &kws, &digits(), 30),
            Some("5555".to_string())
        );
    }

    #[test]
    fn test_scans_all_matches_in_window() {
        // Single-shot matching would stop at 1111, which precedes the keyword.
        let kws = keywords(&["Genesis"]);
        let text = "1111 2222 Genesis 3333 4444";
        assert_eq!(
            find_value_near_keyword(text, &kws, &digits(), 30),
            Some("3333".to_string())
        );

        let window = "1111 2222 Genesis 3333 4444";
        let all = scan_window(window, &digits());
        assert_eq!(all.len(), 4);
        assert_eq!(all[2], ProximityMatch { value: "3333".to_string(), index: 18 });
    }

    #[test]
    fn test_keyword_priority_and_continuation() {
        let kws = keywords(&["Matrícula", "Mat."]);
        // First keyword present but its window has no value: the next one is tried.
        let text = "Matrícula: não informada ............................................................. Mat. 731234";
        assert_eq!(
            find_value_near_keyword(text, &kws, &digits(), 20),
            Some("731234".to_string())
        );
    }

    #[test]
    fn test_window_is_bounded() {
        let kws = keywords(&["Genesis"]);
        let text = format!("Genesis {} 4821", "x".repeat(60));
        assert_eq!(find_value_near_keyword(&text, &kws, &digits(), 30), None);
    }

    #[test]
    fn test_case_insensitive_with_word_boundaries() {
        let kws = keywords(&["RG"]);
        let pattern = Regex::new(r"\d{7}").unwrap();
        assert_eq!(find_value_near_keyword("cargo 1234567", &kws, &pattern, 20), None);
        assert_eq!(
            find_value_near_keyword("rg 1234567", &kws, &pattern, 20),
            Some("1234567".to_string())
        );
    }

    #[test]
    fn test_capture_group_and_filter() {
        let kws = keywords(&["Genesis"]);
        let pattern = Regex::new(r"\b(\d{4,})\b").unwrap();
        let text = "Genesis 2024 e 4821";
        assert_eq!(
            find_value_near_keyword_where(text, &kws, &pattern, 30, |v| v != "2024"),
            Some("4821".to_string())
        );
    }

    #[test]
    fn test_no_keyword() {
        let kws = keywords(&["Genesis"]);
        assert_eq!(find_value_near_keyword("", &kws, &digits(), 30), None);
        assert_eq!(find_value_near_keyword("4821", &kws, &digits(), 30), None);
    }

    #[test]
    fn test_keyword_edges() {
        assert_eq!(Keyword::new("Art.").find("ver Art. 28"), Some((4, 8)));
        assert_eq!(Keyword::new("Art").find("Artigo 28"), None);
        assert_eq!(Keyword::new("Natureza(s)").find("NATUREZA(S): x"), Some((0, 11)));
    }
}
