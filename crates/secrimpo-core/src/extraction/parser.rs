//! Case record parser: field extraction, form mapping and reporting.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::laws::law_name_for_abbreviation;
use crate::models::config::ExtractionConfig;
use crate::models::record::{ExtractedFields, Field, FormData};

use super::{extract_fields_from_text, map_fields_to_form};

/// Result of parsing one occurrence report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Raw field map, every key present.
    pub fields: ExtractedFields,
    /// Fields mapped onto the record form.
    pub form: FormData,
    /// Fields that could not be resolved.
    pub missing_fields: Vec<Field>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for occurrence report parsing.
pub trait RecordParser {
    /// Parse a report from its decoded text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based parser for police occurrence reports.
#[derive(Debug, Clone)]
pub struct CaseRecordParser {
    /// Replace a bare law abbreviation ("CP") with the law's name.
    expand_law_names: bool,
    /// Whether to list unresolved fields in the result.
    report_missing_fields: bool,
}

impl CaseRecordParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            expand_law_names: false,
            report_missing_fields: true,
        }
    }

    /// Create a parser from the extraction section of the configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_law_name_expansion(config.expand_law_names)
            .with_missing_field_report(config.report_missing_fields)
    }

    /// Set law name expansion.
    pub fn with_law_name_expansion(mut self, expand: bool) -> Self {
        self.expand_law_names = expand;
        self
    }

    /// Set missing field reporting.
    pub fn with_missing_field_report(mut self, report: bool) -> Self {
        self.report_missing_fields = report;
        self
    }

    /// Extract the raw field map, applying the configured post-processing.
    pub fn extract_fields(&self, text: &str) -> ExtractedFields {
        let mut fields = extract_fields_from_text(text);

        if self.expand_law_names {
            if let Some(name) = fields.lei_infringida.as_deref().and_then(law_name_for_abbreviation) {
                debug!(name, "expanded law abbreviation");
                fields.lei_infringida = Some(name.to_string());
            }
        }

        fields
    }
}

impl Default for CaseRecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for CaseRecordParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing occurrence report from {} characters of text", text.len());

        let fields = self.extract_fields(text);
        let form = map_fields_to_form(&fields);
        let missing_fields = if self.report_missing_fields {
            fields.missing()
        } else {
            Vec::new()
        };

        debug!(
            "Resolved {} of {} fields",
            Field::ALL.len() - fields.missing().len(),
            Field::ALL.len()
        );

        ExtractionResult {
            fields,
            form,
            missing_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::DocumentType;
    use pretty_assertions::assert_eq;

    const REPORT: &str = "POLÍCIA MILITAR DO DISTRITO FEDERAL
Ocorrência Genesis nº 123456/2024
Natureza(s): Posse de drogas para consumo pessoal - Art. 28 da Lei nº 11.343/06
Chegada local: 15/03/2024 às 14:30
Unidade: 6º BPM

Envolvidos:
Nome: João da Silva Santos
Condição: Autor
CPF: 123.456.789-01
RG: 2.345.678 SSP/DF

Objetos apreendidos:
Tipo: Substância entorpecente
Quantidade: 12 porções
Descrição: 12 porções de substância análoga à maconha, embaladas em plástico filme.
Valor estimado: R$ 120,00
Vinculado a: João da Silva Santos

Nº Procedimento: 0701234-56.2024.8.07.0001

Policial/Guarnição responsável pelo atendimento:
Nome: Carlos Alberto Pereira
Matrícula: 73.123-4
Posto/Grad.: 3º SGT
";

    #[test]
    fn test_parse_full_report() {
        let result = CaseRecordParser::new().parse(REPORT);
        let fields = &result.fields;

        assert_eq!(fields.cpf.as_deref(), Some("123.456.789-01"));
        assert_eq!(fields.rg.as_deref(), Some("2.345.678"));
        assert_eq!(fields.nome.as_deref(), Some("João da Silva Santos"));
        assert_eq!(fields.data_apreensao.as_deref(), Some("15/03/2024"));
        assert_eq!(fields.numero_genesis.as_deref(), Some("123456"));
        assert_eq!(fields.numero_pje.as_deref(), Some("0701234-56.2024.8.07.0001"));
        assert_eq!(fields.matricula.as_deref(), Some("73.123-4"));
        assert_eq!(fields.especie.as_deref(), Some("SUBSTÂNCIA"));
        assert_eq!(fields.artigo.as_deref(), Some("28"));
        assert_eq!(fields.quantidade.as_deref(), Some("12 porções"));
        assert_eq!(fields.item.as_deref(), Some("Substância entorpecente"));
        assert_eq!(
            fields.descricao.as_deref(),
            Some("12 porções de substância análoga à maconha, embaladas em plástico filme.")
        );
        assert_eq!(fields.lei_infringida.as_deref(), Some("Lei nº 11.343/06"));
        assert_eq!(fields.unidade.as_deref(), Some("6º BPM"));
        assert_eq!(fields.nome_policial.as_deref(), Some("Carlos Alberto Pereira"));
        assert_eq!(fields.graduacao.as_deref(), Some("3º Sargento"));

        assert!(result.missing_fields.is_empty());
        assert_eq!(result.form.tipo_documento, Some(DocumentType::Cpf));
        assert_eq!(result.form.nome_proprietario.as_deref(), Some("JOÃO DA SILVA SANTOS"));
        assert_eq!(result.form.graduacao.as_deref(), Some("3º Sargento"));
    }

    #[test]
    fn test_parse_empty_text() {
        let result = CaseRecordParser::default().parse("");
        assert!(result.fields.is_empty());
        assert!(result.form.is_empty());
        assert_eq!(result.missing_fields.len(), 16);
    }

    #[test]
    fn test_missing_field_report_disabled() {
        let result = CaseRecordParser::new()
            .with_missing_field_report(false)
            .parse("texto sem campos");
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn test_law_name_expansion() {
        let text = "Natureza: Furto simples - Art. 155 do CP";
        let plain = CaseRecordParser::new().extract_fields(text);
        assert_eq!(plain.lei_infringida.as_deref(), Some("CP"));

        let expanded = CaseRecordParser::from_config(&ExtractionConfig {
            expand_law_names: true,
            ..Default::default()
        })
        .extract_fields(text);
        assert_eq!(expanded.lei_infringida.as_deref(), Some("Código Penal"));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = CaseRecordParser::new().parse("CPF: 123.456.789-01");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["fields"]["cpf"], "123.456.789-01");
        assert_eq!(json["fields"]["rg"], serde_json::Value::Null);
        assert_eq!(json["form"]["numeroDocumento"], "123.456.789-01");
        assert!(json["missingFields"].as_array().unwrap().contains(&"rg".into()));
        assert!(json.get("processingTimeMs").is_some());
    }
}
