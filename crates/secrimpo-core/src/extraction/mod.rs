//! Occurrence report field extraction module.

mod mapper;
mod parser;
pub mod rules;

pub use mapper::{format_cpf, map_fields_to_form};
pub use parser::{CaseRecordParser, ExtractionResult, RecordParser};

use tracing::debug;

use crate::models::record::ExtractedFields;
use rules::{normalize_whitespace, EXTRACTORS};

/// Run every field extractor over `text`.
///
/// Never fails: a field that cannot be resolved is `None`. The text is
/// normalized once and shared by all extractors.
pub fn extract_fields_from_text(text: &str) -> ExtractedFields {
    let text = normalize_whitespace(text);
    let mut fields = ExtractedFields::default();

    for extractor in EXTRACTORS.iter() {
        let value = extractor.extract(&text);
        if value.is_none() {
            debug!(field = %extractor.field(), "field not found");
        }
        fields.set(extractor.field(), value);
    }

    fields
}
