//! Owner name extraction.

use super::capture::{label_value, leading_person_name, windows_after_keywords};
use super::normalize::normalize_whitespace;
use super::vocabulary::OWNER_KEYWORDS;
use super::FieldExtractor;
use crate::models::record::Field;

const OWNER_WINDOW: usize = 200;

/// Owner name extractor.
pub struct OwnerNameExtractor;

impl FieldExtractor for OwnerNameExtractor {
    fn field(&self) -> Field {
        Field::Nome
    }

    fn extract(&self, text: &str) -> Option<String> {
        extract_nome(text)
    }
}

/// Extract the name of the person the seized item is linked to.
pub fn extract_nome(text: &str) -> Option<String> {
    let text = normalize_whitespace(text);

    windows_after_keywords(&text, &OWNER_KEYWORDS, OWNER_WINDOW)
        .find_map(|window| leading_person_name(label_value(window)?))
}
