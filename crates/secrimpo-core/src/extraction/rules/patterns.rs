//! Common regex patterns for occurrence report extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// One word of a capitalized personal name, or a single initial ("A.").
const NAME_WORD: &str = r"\p{Lu}(?:[\p{L}'’\-]+|\.)";

lazy_static! {
    // CPF patterns (taxpayer id, 11 digits)
    pub static ref CPF_MASKED: Regex = Regex::new(
        r"\b(\d{3}\.\d{3}\.\d{3}-\d{2})\b"
    ).unwrap();

    pub static ref CPF_BARE: Regex = Regex::new(
        r"\b(\d{11})\b"
    ).unwrap();

    pub static ref CPF_ANY: Regex = Regex::new(
        r"\b(\d{3}\.?\d{3}\.?\d{3}-?\d{2})\b"
    ).unwrap();

    // RG patterns (identity document, 7-9 digits with variable grouping)
    pub static ref RG_NUMBER: Regex = Regex::new(
        r"\b(\d{1,2}\.?\d{3}\.?\d{3}(?:-?[\dXx])?)\b"
    ).unwrap();

    pub static ref RG_DOTTED: Regex = Regex::new(
        r"\b(\d{1,2}\.\d{3}\.\d{3}(?:-[\dXx])?)\b"
    ).unwrap();

    // Dates: D/M/Y with '/', '-' or '.' separators
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2,4})\b"
    ).unwrap();

    // Case numbers
    pub static ref GENESIS_NUMBER: Regex = Regex::new(
        r"\b(\d{4,})\b"
    ).unwrap();

    pub static ref PJE_STRICT: Regex = Regex::new(
        r"\b(\d{7,}-\d{2}\.\d{4}\.\d\.\d{2}\.\d{4})\b"
    ).unwrap();

    pub static ref PJE_BARE: Regex = Regex::new(
        r"\b(\d{6,})\b"
    ).unwrap();

    pub static ref PJE_ALPHANUMERIC: Regex = Regex::new(
        r"^[\p{L}\d./\-]{3,30}$"
    ).unwrap();

    // Officer badge: 73.123-4, 731234, 7312345-X
    pub static ref BADGE_NUMBER: Regex = Regex::new(
        r"\b(\d{1,3}\.\d{3}-?[\dXx]|\d{4,9}(?:-[\dXx])?)\b"
    ).unwrap();

    // Legal references
    pub static ref ARTICLE_NUMBER: Regex = Regex::new(
        r"\b(\d{1,4}(?:-[A-Z])?)\b"
    ).unwrap();

    pub static ref LAW_CITATION: Regex = Regex::new(
        r"(?i)\b((?:decreto-lei|lei(?:\s+complementar)?)\s*(?:n\.?\s*[º°o]?\.?\s*)?\d{1,2}\.?\d{3}(?:\s*/\s*\d{2,4})?)"
    ).unwrap();

    // Quantity with an optional unit
    pub static ref QUANTITY: Regex = Regex::new(
        r"(?i)\b(\d+(?:[.,]\d+)?(?:\s*(?:kg|mg|g|gramas?|quilos?|un|unid|unidades?|por[çc](?:ão|ões|ao|oes)|pe[çc]as?|papelotes?|trouxinhas?|pinos?|buchas?|tabletes?|comprimidos?))?)\b"
    ).unwrap();

    // Monetary annotation: "R$ 120,00", "Valor estimado: R$ 1.200,00"
    pub static ref MONEY_ANNOTATION: Regex = Regex::new(
        r"(?i)\s*\(?\s*(?:valor(?:\s+(?:estimado|aproximado|avaliado|de\s+mercado))?\s*:?\s*)?R\$\s*\d{1,3}(?:\.?\d{3})*(?:,\d{2})?\s*\)?"
    ).unwrap();

    // Capitalized multi-word personal names, lower-case connectors allowed
    pub static ref PERSON_NAME: Regex = Regex::new(
        &format!(r"({w}(?:\s+(?:(?:d[aeo]s?|e)\s+)?{w})+)", w = NAME_WORD)
    ).unwrap();

    pub static ref PERSON_NAME_PREFIX: Regex = Regex::new(
        &format!(r"^({w}(?:\s+(?:(?:d[aeo]s?|e)\s+)?{w})+)", w = NAME_WORD)
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_patterns() {
        assert!(CPF_MASKED.is_match("CPF 123.456.789-01"));
        assert!(!CPF_MASKED.is_match("12345678901"));
        assert!(CPF_BARE.is_match("12345678901"));
        assert!(!CPF_BARE.is_match("123456789012"));
        assert!(CPF_ANY.is_match("123456789-01"));
    }

    #[test]
    fn test_rg_does_not_match_inside_cpf() {
        assert!(RG_NUMBER.find("123.456.789-01").is_none());
        assert!(RG_NUMBER.find("12345678901").is_none());
        assert_eq!(RG_NUMBER.find("RG 2.345.678 SSP").unwrap().as_str(), "2.345.678");
        assert_eq!(RG_DOTTED.find("doc 12.345.678-X").unwrap().as_str(), "12.345.678-X");
    }

    #[test]
    fn test_pje_strict() {
        let caps = PJE_STRICT.captures("Proc. 0701234-56.2024.8.07.0001.").unwrap();
        assert_eq!(&caps[1], "0701234-56.2024.8.07.0001");
    }

    #[test]
    fn test_law_citation() {
        let caps = LAW_CITATION.captures("Art. 28 da Lei nº 11.343/06 e").unwrap();
        assert_eq!(&caps[1], "Lei nº 11.343/06");
        let caps = LAW_CITATION.captures("DECRETO-LEI 3.688/41").unwrap();
        assert_eq!(&caps[1], "DECRETO-LEI 3.688/41");
    }

    #[test]
    fn test_person_name() {
        let caps = PERSON_NAME_PREFIX.captures("João da Silva Santos portava").unwrap();
        assert_eq!(&caps[1], "João da Silva Santos");
        let caps = PERSON_NAME_PREFIX.captures("MARIA DAS DORES, brasileira").unwrap();
        assert_eq!(&caps[1], "MARIA DAS DORES");
        assert!(PERSON_NAME_PREFIX.captures("Maria portava").is_none());
    }

    #[test]
    fn test_quantity_units() {
        let caps = QUANTITY.captures("12 porções de").unwrap();
        assert_eq!(&caps[1], "12 porções");
        let caps = QUANTITY.captures("3,5 gramas").unwrap();
        assert_eq!(&caps[1], "3,5 gramas");
        let caps = QUANTITY.captures("1 un.").unwrap();
        assert_eq!(&caps[1], "1 un");
    }

    #[test]
    fn test_money_annotation() {
        assert_eq!(
            MONEY_ANNOTATION.replace_all("celular Samsung (R$ 1.200,00) preto", ""),
            "celular Samsung preto"
        );
        assert_eq!(
            MONEY_ANNOTATION.replace_all("faca de cozinha Valor estimado: R$ 30,00", ""),
            "faca de cozinha"
        );
    }
}
