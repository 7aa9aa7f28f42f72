//! WASM bindings for police occurrence report field extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js,
//! so a form can be pre-filled from a report pasted by the user.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use secrimpo_core::extraction::format_cpf as format_cpf_digits;
use secrimpo_core::{CaseRecordParser, ExtractedFields, RecordParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Serialize with JSON semantics so unresolved fields arrive as `null`
/// rather than `undefined`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract the raw field map from report text.
///
/// Every field key is present; unresolved fields are `null`.
#[wasm_bindgen(js_name = extractFieldsFromText)]
pub fn extract_fields_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&secrimpo_core::extract_fields_from_text(text))
}

/// Map a raw field map onto the record form keys.
#[wasm_bindgen(js_name = mapFieldsToForm)]
pub fn map_fields_to_form(fields: JsValue) -> Result<JsValue, JsValue> {
    let fields: ExtractedFields = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_js(&secrimpo_core::map_fields_to_form(&fields))
}

/// Extract the form keys straight from report text.
#[wasm_bindgen(js_name = extractForm)]
pub fn extract_form(text: &str) -> Result<JsValue, JsValue> {
    let fields = secrimpo_core::extract_fields_from_text(text);
    to_js(&secrimpo_core::map_fields_to_form(&fields))
}

/// Full name of a law from its abbreviation ("CP" -> "Código Penal").
#[wasm_bindgen(js_name = lawNameForAbbreviation)]
pub fn law_name_for_abbreviation(abbreviation: &str) -> Option<String> {
    secrimpo_core::law_name_for_abbreviation(abbreviation).map(str::to_string)
}

/// Search the law catalog.
#[wasm_bindgen(js_name = searchLaws)]
pub fn search_laws(term: &str) -> Result<JsValue, JsValue> {
    to_js(&secrimpo_core::search_laws(term))
}

/// Canonical rank for an abbreviation ("3 SGT" -> "3º Sargento").
#[wasm_bindgen(js_name = mapRankAbbreviation)]
pub fn map_rank_abbreviation(abbreviation: &str) -> Option<String> {
    secrimpo_core::map_rank_abbreviation(abbreviation).map(str::to_string)
}

/// Format an 11-digit CPF as `XXX.XXX.XXX-XX`.
#[wasm_bindgen(js_name = formatCpf)]
pub fn format_cpf(cpf: &str) -> String {
    format_cpf_digits(cpf)
}

/// Field extractor class for browser use.
#[wasm_bindgen]
pub struct FieldExtractorJs {
    parser: CaseRecordParser,
}

#[wasm_bindgen]
impl FieldExtractorJs {
    /// Create a new field extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: CaseRecordParser::new(),
        }
    }

    /// Replace a bare law abbreviation with the law's name.
    #[wasm_bindgen(js_name = setExpandLawNames)]
    pub fn set_expand_law_names(&mut self, expand: bool) {
        self.parser = self.parser.clone().with_law_name_expansion(expand);
    }

    /// Extract the raw field map.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.extract_fields(text))
    }

    /// Extract fields, form and the list of unresolved fields.
    #[wasm_bindgen(js_name = extractWithMetadata)]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }
}

impl Default for FieldExtractorJs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_law_name() {
        assert_eq!(law_name_for_abbreviation("cp").as_deref(), Some("Código Penal"));
        assert_eq!(law_name_for_abbreviation("XYZ"), None);
    }

    #[wasm_bindgen_test]
    fn test_rank() {
        assert_eq!(map_rank_abbreviation("CB").as_deref(), Some("Cabo"));
    }

    #[wasm_bindgen_test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
    }

    #[wasm_bindgen_test]
    fn test_extract_form_from_text() {
        let form = extract_form("CPF: 123.456.789-01").unwrap();
        let document = js_sys::Reflect::get(&form, &JsValue::from_str("tipoDocumento")).unwrap();
        assert_eq!(document.as_string().as_deref(), Some("CPF"));
    }
}
