//! Seized item extraction: species, item type and description.

use lazy_static::lazy_static;
use regex::Regex;

use super::capture::{
    label_value, strip_money, trim_trailing_separators, truncate_words, windows_after_keywords,
};
use super::normalize::normalize_whitespace;
use super::vocabulary::{
    is_label_token, DESCRIPTION_KEYWORDS, ITEM_KEYWORDS, SPECIES_KEYWORDS, SPECIES_VOCABULARY,
};
use super::FieldExtractor;
use crate::models::record::Field;

const SPECIES_WINDOW: usize = 150;
const ITEM_WINDOW: usize = 100;
const ITEM_MAX_CHARS: usize = 100;
const DESCRIPTION_WINDOW: usize = 600;
const DESCRIPTION_MAX_CHARS: usize = 300;

lazy_static! {
    static ref ITEM_PREFIX: Regex = Regex::new(
        r"(?i)^(?:objetos?|materia(?:l|is))\s*[-–:]\s*"
    ).unwrap();
}

/// Species field extractor.
pub struct SpeciesExtractor;

impl FieldExtractor for SpeciesExtractor {
    fn field(&self) -> Field {
        Field::Especie
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_especie(text)
    }
}

/// Item type extractor.
pub struct ItemExtractor;

impl FieldExtractor for ItemExtractor {
    fn field(&self) -> Field {
        Field::Item
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_item(text)
    }
}

/// Item description extractor.
pub struct DescriptionExtractor;

impl FieldExtractor for DescriptionExtractor {
    fn field(&self) -> Field {
        Field::Descricao
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_descricao(text)
    }
}

/// Classify `text` into the species vocabulary, highest priority first.
pub fn classify_species(text: &str) -> Option<&'static str> {
    SPECIES_VOCABULARY
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(species, _)| *species)
}

/// Extract the item species: `SIMULACRO`, `ARMA BRANCA`, `SUBSTÂNCIA` or `OBJETO`.
pub fn extract_especie(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    windows_after_keywords(&text, &SPECIES_KEYWORDS, SPECIES_WINDOW)
        .find_map(classify_species)
        .or_else(|| classify_species(&text))
        .map(str::to_string)
}

/// Extract the item type written after `Tipo`, `Item` or `Material`.
pub fn extract_item(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    windows_after_keywords(&text, &ITEM_KEYWORDS, ITEM_WINDOW).find_map(item_from_window)
}

fn item_from_window(window: &str) -> Option<String> {
    let value = label_value(window)?;
    let value = ITEM_PREFIX.replace(value, "");
    let value = strip_money(&value);
    let value = trim_trailing_separators(truncate_words(&value, ITEM_MAX_CHARS));

    if value.is_empty() || value.split_whitespace().all(is_label_token) {
        return None;
    }
    Some(value.to_string())
}

/// Extract the item description.
pub fn extract_descricao(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    windows_after_keywords(&text, &DESCRIPTION_KEYWORDS, DESCRIPTION_WINDOW).find_map(|window| {
        let value = strip_money(label_value(window)?);
        let value = trim_trailing_separators(truncate_words(&value, DESCRIPTION_MAX_CHARS));
        (!value.is_empty()).then(|| value.to_string())
    })
}
