//! Core library for police occurrence report field extraction.
//!
//! This crate provides:
//! - Text normalization and keyword proximity search
//! - Rule-based extractors for the fields of a seizure record (owner
//!   documents, case numbers, seized item, infringed law, responding officer)
//! - Mapping of the extracted fields onto the record form
//! - A catalog of the principal Brazilian laws

pub mod error;
pub mod extraction;
pub mod laws;
pub mod models;

pub use error::{Result, SecrimpoError};
pub use extraction::rules::{map_rank_abbreviation, normalize_whitespace, FieldExtractor};
pub use extraction::{
    extract_fields_from_text, map_fields_to_form, CaseRecordParser, ExtractionResult, RecordParser,
};
pub use laws::{law_name_for_abbreviation, search_laws, LawEntry};
pub use models::config::SecrimpoConfig;
pub use models::record::{DocumentType, ExtractedFields, Field, FormData};
