//! Case numbers and numeric item attributes: Genesis occurrence number,
//! PJE procedure number, legal article and quantity.

use super::capture::{label_value, windows_after_keywords};
use super::normalize::normalize_whitespace;
use super::patterns::{
    ARTICLE_NUMBER, GENESIS_NUMBER, PJE_ALPHANUMERIC, PJE_BARE, PJE_STRICT, QUANTITY,
};
use super::proximity::{find_value_near_keyword, find_value_near_keyword_where};
use super::vocabulary::{
    ARTICLE_KEYWORDS, GENESIS_KEYWORDS, PJE_KEYWORDS, PJE_NON_VALUES, QUANTITY_KEYWORDS,
};
use super::FieldExtractor;
use crate::models::record::Field;

const GENESIS_DISTANCE: usize = 30;
const PJE_WINDOW: usize = 100;
const ARTICLE_DISTANCE: usize = 20;
const QUANTITY_DISTANCE: usize = 40;

/// Genesis occurrence number extractor.
pub struct GenesisExtractor;

impl FieldExtractor for GenesisExtractor {
    fn field(&self) -> Field {
        Field::NumeroGenesis
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_numero_genesis(text)
    }
}

/// PJE procedure number extractor.
pub struct PjeExtractor;

impl FieldExtractor for PjeExtractor {
    fn field(&self) -> Field {
        Field::NumeroPje
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_numero_pje(text)
    }
}

/// Legal article extractor.
pub struct ArticleExtractor;

impl FieldExtractor for ArticleExtractor {
    fn field(&self) -> Field {
        Field::Artigo
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_artigo(text)
    }
}

/// Item quantity extractor.
pub struct QuantityExtractor;

impl FieldExtractor for QuantityExtractor {
    fn field(&self) -> Field {
        Field::Quantidade
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_quantidade(text)
    }
}

/// Extract the Genesis occurrence number.
pub fn extract_numero_genesis(text: &str) -> Option<String> {
    find_value_near_keyword_where(
        text,
        &GENESIS_KEYWORDS,
        &GENESIS_NUMBER,
        GENESIS_DISTANCE,
        is_genesis_number,
    )
}

/// A Genesis number has 4 to 9 digits and is not a bare year.
fn is_genesis_number(value: &str) -> bool {
    match value.len() {
        0..=3 | 10.. => false,
        4 => !value
            .parse::<u32>()
            .is_ok_and(|year| (1900..=2100).contains(&year)),
        _ => true,
    }
}

/// Extract the PJE procedure number.
///
/// The unified judicial format (`0701234-56.2024.8.07.0001`) wins, then a
/// bare run of at least six digits, then the first alphanumeric token of the
/// labelled value.
pub fn extract_numero_pje(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    windows_after_keywords(&text, &PJE_KEYWORDS, PJE_WINDOW).find_map(pje_from_window)
}

fn pje_from_window(window: &str) -> Option<String> {
    let value = label_value(window)?;

    if let Some(caps) = PJE_STRICT.captures(value) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = PJE_BARE.captures(value) {
        return Some(caps[1].to_string());
    }

    let token = value
        .split_whitespace()
        .next()?
        .trim_end_matches([',', ';', '.']);
    let is_identifier = PJE_ALPHANUMERIC.is_match(token)
        && token.chars().any(|c| c.is_ascii_digit())
        && !PJE_NON_VALUES.contains(&token.to_lowercase().as_str());

    is_identifier.then(|| token.to_string())
}

/// Extract the legal article number ("Art. 28" -> "28").
pub fn extract_artigo(text: &str) -> Option<String> {
    find_value_near_keyword(text, &ARTICLE_KEYWORDS, &ARTICLE_NUMBER, ARTICLE_DISTANCE)
}

/// Extract the item quantity, keeping its unit ("12 porções").
pub fn extract_quantidade(text: &str) -> Option<String> {
    find_value_near_keyword(text, &QUANTITY_KEYWORDS, &QUANTITY, QUANTITY_DISTANCE)
}
