//! Police unit extraction.

use super::capture::{label_value, trim_trailing_separators, windows_after_keywords};
use super::normalize::normalize_whitespace;
use super::vocabulary::{is_label_token, UNIT_KEYWORDS};
use super::FieldExtractor;
use crate::models::record::Field;

const UNIT_WINDOW: usize = 60;
const UNIT_MAX_TOKENS: usize = 4;

/// Police unit extractor.
pub struct UnitExtractor;

impl FieldExtractor for UnitExtractor {
    fn field(&self) -> Field {
        Field::Unidade
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_unidade(text)
    }
}

/// Extract the police unit ("6º BPM").
pub fn extract_unidade(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    windows_after_keywords(&text, &UNIT_KEYWORDS, UNIT_WINDOW).find_map(unit_from_window)
}

fn unit_from_window(window: &str) -> Option<String> {
    let value = label_value(window)?;
    let tokens: Vec<&str> = value.split_whitespace().take(UNIT_MAX_TOKENS).collect();

    if tokens.first().is_none_or(|token| is_label_token(token)) {
        return None;
    }

    let unit = tokens.join(" ");
    Some(trim_trailing_separators(&unit).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unit_cut_at_section() {
        assert_eq!(
            extract_unidade("Unidade: 6º BPM Envolvidos: Nome: João"),
            Some("6º BPM".to_string())
        );
    }

    #[test]
    fn test_unit_token_cap() {
        assert_eq!(
            extract_unidade("OPM - 1º Batalhão de Polícia Militar do Distrito Federal"),
            Some("1º Batalhão de Polícia".to_string())
        );
    }

    #[test]
    fn test_unit_rejects_label() {
        assert_eq!(extract_unidade("Unidade: Data: 01/01/2024"), None);
        assert_eq!(extract_unidade("Unidade: não informada"), None);
    }
}
