//! Infringed law extraction.

use super::capture::{label_value, trim_trailing_separators, truncate_words, windows_after_keywords};
use super::normalize::normalize_whitespace;
use super::patterns::LAW_CITATION;
use super::vocabulary::LAW_KEYWORDS;
use super::FieldExtractor;
use crate::laws::law_name_for_abbreviation;
use crate::models::record::Field;

const LAW_WINDOW: usize = 200;
const NATURE_MAX_CHARS: usize = 150;

/// Infringed law extractor.
pub struct LawExtractor;

impl FieldExtractor for LawExtractor {
    fn field(&self) -> Field {
        Field::LeiInfringida
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_lei_infringida(text)
    }
}

/// Extract the infringed law from the nature of the occurrence.
///
/// An explicit citation ("Lei nº 11.343/06") wins over a code abbreviation
/// ("CP", "CTB"); otherwise the nature text itself is returned.
pub fn extract_lei_infringida(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    windows_after_keywords(&text, &LAW_KEYWORDS, LAW_WINDOW).find_map(law_from_window)
}

fn law_from_window(window: &str) -> Option<String> {
    let value = label_value(window)?;

    if let Some(caps) = LAW_CITATION.captures(value) {
        return Some(caps[1].trim().to_string());
    }

    if let Some(abbreviation) = value
        .split(|c: char| !c.is_alphanumeric())
        .find(|token| is_code_abbreviation(token))
    {
        return Some(abbreviation.to_string());
    }

    let nature = trim_trailing_separators(truncate_words(value, NATURE_MAX_CHARS));
    (!nature.is_empty()).then(|| nature.to_string())
}

/// An uppercase token naming a catalogued code ("CP", "LCP", "CTB").
fn is_code_abbreviation(token: &str) -> bool {
    token.len() >= 2
        && token.chars().all(|c| c.is_ascii_uppercase())
        && law_name_for_abbreviation(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_explicit_citation_wins() {
        let text = "Natureza(s): Posse de drogas para consumo pessoal - Art. 28 da Lei nº 11.343/06 Chegada local: 15/03/2024";
        assert_eq!(extract_lei_infringida(text), Some("Lei nº 11.343/06".to_string()));
    }

    #[test]
    fn test_decree_law_citation() {
        assert_eq!(
            extract_lei_infringida("Enquadramento: Art. 21 do Decreto-Lei 3.688/41"),
            Some("Decreto-Lei 3.688/41".to_string())
        );
    }

    #[test]
    fn test_code_abbreviation() {
        assert_eq!(
            extract_lei_infringida("Natureza: Furto - Art. 155 do CP Unidade: 6º BPM"),
            Some("CP".to_string())
        );
        assert_eq!(
            extract_lei_infringida("Lei Infringida: art. 306 CTB"),
            Some("CTB".to_string())
        );
    }

    #[test]
    fn test_nature_text_fallback() {
        assert_eq!(
            extract_lei_infringida("Natureza: Perturbação do sossego Local: via pública"),
            Some("Perturbação do sossego".to_string())
        );
    }

    #[test]
    fn test_no_label() {
        assert_eq!(extract_lei_infringida("Art. 28 da Lei 11.343/06"), None);
        assert_eq!(extract_lei_infringida("Natureza: Data: 01/01/2024"), None);
    }
}
