//! Responding officer extraction: badge number, name and rank.
//!
//! Reports list the officer under a section header ("Policial/Guarnição
//! responsável pelo atendimento"). When a header is present every search is
//! scoped to the text that follows it, so the owner's data is never taken
//! for the officer's. Text-wide fallbacks run only without a header.

use super::capture::{label_value, leading_person_name, windows_after_keywords};
use super::normalize::{normalize_whitespace, window_after};
use super::patterns::{BADGE_NUMBER, PERSON_NAME};
use super::proximity::{find_value_near_keyword, find_value_near_keyword_where};
use super::ranks::{
    find_abbreviated_rank, find_spelled_rank, is_rank_token, map_rank_abbreviation, normalize_rank,
};
use super::vocabulary::{
    BADGE_KEYWORDS, OFFICER_FALLBACK_KEYWORDS, OFFICER_NAME_KEYWORDS, OFFICER_SECTION_HEADERS,
    RANK_KEYWORDS,
};
use super::FieldExtractor;
use crate::models::record::Field;

/// Characters after the section header that belong to the section.
const SECTION_SCOPE: usize = 500;
const BADGE_DISTANCE: usize = 30;
const NAME_WINDOW: usize = 120;
const FALLBACK_NAME_DISTANCE: usize = 80;
const RANK_WINDOW: usize = 30;
const RANK_MAX_TOKENS: usize = 3;

/// Officer badge number extractor.
pub struct BadgeExtractor;

impl FieldExtractor for BadgeExtractor {
    fn field(&self) -> Field {
        Field::Matricula
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_matricula(text)
    }
}

/// Officer name extractor.
pub struct OfficerNameExtractor;

impl FieldExtractor for OfficerNameExtractor {
    fn field(&self) -> Field {
        Field::NomePolicial
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_nome_policial(text)
    }
}

/// Officer rank extractor.
pub struct RankExtractor;

impl FieldExtractor for RankExtractor {
    fn field(&self) -> Field {
        Field::Graduacao
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_graduacao(text)
    }
}

/// The officer section: up to 500 characters after the first header found,
/// in probe order.
pub fn officer_section(text: &str) -> Option<&str> {
    OFFICER_SECTION_HEADERS
        .iter()
        .find_map(|header| header.find(text))
        .map(|(_, end)| window_after(text, end, SECTION_SCOPE))
}

/// Extract the officer's badge number.
pub fn extract_matricula(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);
    let scope = officer_section(&text).unwrap_or(&text);

    find_value_near_keyword(scope, &BADGE_KEYWORDS, &BADGE_NUMBER, BADGE_DISTANCE)
}

/// Extract the officer's name.
pub fn extract_nome_policial(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    match officer_section(&text) {
        Some(scope) => officer_name_in_section(scope),
        None => find_value_near_keyword_where(
            &text,
            &OFFICER_FALLBACK_KEYWORDS,
            &PERSON_NAME,
            FALLBACK_NAME_DISTANCE,
            |candidate| officer_name(candidate).is_some(),
        )
        .and_then(|candidate| officer_name(&candidate)),
    }
}

fn officer_name_in_section(scope: &str) -> Option<String> {
    let start = OFFICER_NAME_KEYWORDS
        .iter()
        .find_map(|keyword| keyword.find(scope))
        .map_or(0, |(_, end)| end);

    officer_name(label_value(window_after(scope, start, NAME_WINDOW))?)
}

/// Name in an officer line such as "3º SGT QPPMC Carlos Pereira 73.123-4":
/// leading rank and number tokens are skipped and the name ends at the next
/// number, rank abbreviation or dash.
fn officer_name(value: &str) -> Option<String> {
    let is_noise = |token: &&str| is_rank_token(token) || has_digit(token) || is_dash(token);

    let tokens: Vec<&str> = value
        .split_whitespace()
        .skip_while(is_noise)
        .take_while(|token| !is_noise(token))
        .collect();

    leading_person_name(&tokens.join(" "))
}

fn has_digit(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

fn is_dash(token: &str) -> bool {
    token.chars().all(|c| matches!(c, '-' | '–' | '—' | '/' | '|'))
}

/// Extract the officer's rank as its canonical name ("3º Sargento").
pub fn extract_graduacao(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);
    let section = officer_section(&text);
    let scope = section.unwrap_or(&text);

    windows_after_keywords(scope, &RANK_KEYWORDS, RANK_WINDOW)
        .find_map(rank_from_window)
        .or_else(|| section.and_then(find_abbreviated_rank))
        .or_else(|| find_spelled_rank(&text))
        .map(str::to_string)
}

fn rank_from_window(window: &str) -> Option<&'static str> {
    let value = label_value(window)?;
    let tokens: Vec<&str> = value.split_whitespace().take(RANK_MAX_TOKENS).collect();

    (1..=tokens.len())
        .rev()
        .find_map(|n| map_rank_abbreviation(&tokens[..n].join(" ")))
        .or_else(|| find_abbreviated_rank(&normalize_rank(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTION: &str = "Vinculado a: João da Silva Santos CPF: 123.456.789-01 Matrícula do veículo 5555 \
        Policial/Guarnição responsável pelo atendimento: Nome: Carlos Alberto Pereira \
        Matrícula: 73.123-4 Posto/Grad.: 3º SGT";

    #[test]
    fn test_section_scope() {
        let scope = officer_section(SECTION).unwrap();
        assert!(scope.starts_with(": Nome: Carlos"));
        assert_eq!(officer_section("Nome: Carlos Alberto Pereira"), None);
    }

    #[test]
    fn test_badge_in_section() {
        assert_eq!(extract_matricula(SECTION), Some("73.123-4".to_string()));
    }

    #[test]
    fn test_badge_without_section() {
        assert_eq!(extract_matricula("Mat. 7312345 SD Lima"), Some("7312345".to_string()));
        assert_eq!(extract_matricula("Matrícula: ignorada"), None);
    }

    #[test]
    fn test_badge_not_taken_outside_section() {
        let text = "Matrícula 5555 Responsável pelo atendimento: equipe de apoio";
        assert_eq!(extract_matricula(text), None);
    }

    #[test]
    fn test_officer_name_in_section() {
        assert_eq!(
            extract_nome_policial(SECTION),
            Some("Carlos Alberto Pereira".to_string())
        );
    }

    #[test]
    fn test_officer_name_after_rank_prefix() {
        let text = "Guarnição responsável pelo atendimento 3º SGT QPPMC Carlos Pereira 73.123-4";
        assert_eq!(extract_nome_policial(text), Some("Carlos Pereira".to_string()));
    }

    #[test]
    fn test_officer_name_fallback() {
        assert_eq!(
            extract_nome_policial("Condutor: SD Marcos Vinícius Lima, mat. 731234"),
            Some("Marcos Vinícius Lima".to_string())
        );
        assert_eq!(extract_nome_policial("Condutor: não identificado"), None);
    }

    #[test]
    fn test_graduacao_from_label() {
        assert_eq!(extract_graduacao(SECTION), Some("3º Sargento".to_string()));
        assert_eq!(extract_graduacao("Posto/Grad.: 3 SGT"), Some("3º Sargento".to_string()));
        assert_eq!(extract_graduacao("Graduação: CB PMDF"), Some("Cabo".to_string()));
    }

    #[test]
    fn test_graduacao_embedded_shape_in_section() {
        let text = "Responsável pelo atendimento: 1º TEN Rocha, matrícula 12345";
        assert_eq!(extract_graduacao(text), Some("Primeiro-Tenente".to_string()));
    }

    #[test]
    fn test_graduacao_spelled_fallback() {
        assert_eq!(
            extract_graduacao("atendido pelo Tenente-Coronel Souza"),
            Some("Tenente-Coronel".to_string())
        );
        assert_eq!(extract_graduacao("Posto/Grad.: XYZ"), None);
        assert_eq!(
            extract_graduacao("Posto/Grad.: XYZ. Apoio do Major Souza"),
            Some("Major".to_string())
        );
    }

    #[test]
    fn test_officer_name_rejects_label_words() {
        let header = "Policial/Guarnição responsável pelo atendimento: Nome: ";
        for name in [
            "Carlos Pereira Genesis 4821",
            "Carlos Pereira Matrícula 73.123-4",
            "Carlos Pereira Artigo 28",
            "Carlos Pereira Data 15/03/2024",
        ] {
            assert_eq!(extract_nome_policial(&format!("{header}{name}")), None, "{name}");
        }
        assert_eq!(extract_nome_policial("Condutor: SD Marcos Lima Genesis 4821"), None);
    }
}
