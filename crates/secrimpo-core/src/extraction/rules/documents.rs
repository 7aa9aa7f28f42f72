//! CPF and RG (owner identity documents) extraction.

use super::capture::digit_count;
use super::normalize::normalize_whitespace;
use super::patterns::{CPF_ANY, CPF_BARE, CPF_MASKED, RG_DOTTED, RG_NUMBER};
use super::proximity::find_value_near_keyword_where;
use super::vocabulary::{CPF_KEYWORDS, RG_KEYWORDS};
use super::FieldExtractor;
use crate::models::record::Field;

const DOCUMENT_DISTANCE: usize = 30;

/// CPF field extractor.
pub struct CpfExtractor;

impl FieldExtractor for CpfExtractor {
    fn field(&self) -> Field {
        Field::Cpf
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_cpf(text)
    }
}

/// RG field extractor.
pub struct RgExtractor;

impl FieldExtractor for RgExtractor {
    fn field(&self) -> Field {
        Field::Rg
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_rg(text)
    }
}

/// Extract the owner's CPF, as written in the text.
///
/// Near a CPF label the masked form wins over a bare 11-digit run; without a
/// labelled value the first CPF-shaped number anywhere in the text is taken.
pub fn extract_cpf(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    [&*CPF_MASKED, &*CPF_BARE]
        .into_iter()
        .find_map(|pattern| {
            find_value_near_keyword_where(&text, &CPF_KEYWORDS, pattern, DOCUMENT_DISTANCE, is_cpf)
        })
        .or_else(|| {
            CPF_ANY
                .captures_iter(&text)
                .map(|caps| caps[1].to_string())
                .find(|value| is_cpf(value))
        })
}

/// Extract the owner's RG.
pub fn extract_rg(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    find_value_near_keyword_where(&text, &RG_KEYWORDS, &RG_NUMBER, DOCUMENT_DISTANCE, is_rg)
        .or_else(|| dotted_rg_outside_cpf(&text))
}

fn is_cpf(value: &str) -> bool {
    digit_count(value) == 11
}

fn is_rg(value: &str) -> bool {
    (7..=9).contains(&digit_count(value))
}

fn dotted_rg_outside_cpf(text: &str) -> Option<String> {
    let cpf_spans: Vec<(usize, usize)> = CPF_ANY
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    RG_DOTTED
        .find_iter(text)
        .find(|m| {
            !cpf_spans
                .iter()
                .any(|&(start, end)| m.start() >= start && m.end() <= end)
        })
        .map(|m| m.as_str().to_string())
}
