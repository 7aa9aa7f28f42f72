//! Police rank abbreviations and their canonical names.

use lazy_static::lazy_static;
use regex::Regex;

const SOLDADO_1: &str = "Soldado de 1ª Classe";
const SOLDADO_2: &str = "Soldado de 2ª Classe";
const CABO: &str = "Cabo";
const SARGENTOS: &[&str] = &["1º Sargento", "2º Sargento", "3º Sargento"];
const SUBTENENTE: &str = "Subtenente";
const ASPIRANTE: &str = "Aspirante-a-Oficial";
const TENENTES: &[&str] = &["Primeiro-Tenente", "Segundo-Tenente"];
const CAPITAO: &str = "Capitão";
const MAJOR: &str = "Major";
const TENENTE_CORONEL: &str = "Tenente-Coronel";
const CORONEL: &str = "Coronel";

/// Normalized abbreviation to canonical rank.
const RANK_TABLE: &[(&str, &str)] = &[
    ("SD", SOLDADO_1),
    ("SD 1", SOLDADO_1),
    ("SD1", SOLDADO_1),
    ("SD 1 CL", SOLDADO_1),
    ("SD 1CL", SOLDADO_1),
    ("SD 2", SOLDADO_2),
    ("SD2", SOLDADO_2),
    ("SD 2 CL", SOLDADO_2),
    ("SD 2CL", SOLDADO_2),
    ("CB", CABO),
    ("3 SGT", "3º Sargento"),
    ("3SGT", "3º Sargento"),
    ("2 SGT", "2º Sargento"),
    ("2SGT", "2º Sargento"),
    ("1 SGT", "1º Sargento"),
    ("1SGT", "1º Sargento"),
    ("ST", SUBTENENTE),
    ("SUBTEN", SUBTENENTE),
    ("SUB TEN", SUBTENENTE),
    ("ASP", ASPIRANTE),
    ("ASP OF", ASPIRANTE),
    ("2 TEN", "Segundo-Tenente"),
    ("2TEN", "Segundo-Tenente"),
    ("1 TEN", "Primeiro-Tenente"),
    ("1TEN", "Primeiro-Tenente"),
    ("CAP", CAPITAO),
    ("MAJ", MAJOR),
    ("TEN CEL", TENENTE_CORONEL),
    ("TENCEL", TENENTE_CORONEL),
    ("TC", TENENTE_CORONEL),
    ("CEL", CORONEL),
];

/// Corps suffixes that follow a rank abbreviation ("3º SGT QPPMC").
const CORPS_SUFFIXES: &[&str] = &["PM", "PMDF", "QPPMC", "QOPM", "QPPM"];

/// Tokens that are rank or corps abbreviations, never part of a name.
const RANK_TOKENS: &[&str] = &[
    "SD", "CB", "SGT", "ST", "SUBTEN", "TEN", "CAP", "MAJ", "CEL", "TC", "ASP", "PM", "PMDF",
    "QPPMC", "QOPM", "QPPM", "CL", "OF", "TENCEL", "MAT",
];

/// Separators allowed inside an abbreviated rank.
const SEP: &str = r"[\sº°ª.\-/]*";

/// A rank shape: when the pattern captures a digit, it selects the rank
/// (1-based), otherwise the first rank applies.
struct RankShape {
    pattern: Regex,
    ranks: &'static [&'static str],
}

impl RankShape {
    fn new(pattern: &str, ranks: &'static [&'static str]) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            ranks,
        }
    }

    fn resolve(&self, text: &str) -> Option<&'static str> {
        let caps = self.pattern.captures(text)?;
        let index = match caps.get(1) {
            Some(digit) => digit.as_str().parse::<usize>().ok()?.checked_sub(1)?,
            None => 0,
        };
        self.ranks.get(index).copied()
    }
}

lazy_static! {
    /// Abbreviations embedded in longer text, most specific first.
    static ref ABBREVIATED_SHAPES: Vec<RankShape> = vec![
        RankShape::new(&format!(r"\b(?:TEN{SEP}CEL|TC)\b"), &[TENENTE_CORONEL]),
        RankShape::new(&format!(r"\b(?:SUB{SEP}TEN|ST)\b"), &[SUBTENENTE]),
        RankShape::new(&format!(r"\b([123]){SEP}SGT\b"), SARGENTOS),
        RankShape::new(&format!(r"\b([12]){SEP}TEN\b"), TENENTES),
        RankShape::new(&format!(r"\bSD{SEP}([12])(?:\D|$)"), &[SOLDADO_1, SOLDADO_2]),
        RankShape::new(r"\bSD\b", &[SOLDADO_1]),
        RankShape::new(r"\bCB\b", &[CABO]),
        RankShape::new(r"\bASP\b", &[ASPIRANTE]),
        RankShape::new(r"\bCAP\b", &[CAPITAO]),
        RankShape::new(r"\bMAJ\b", &[MAJOR]),
        RankShape::new(r"\bCEL\b", &[CORONEL]),
    ];

    /// Fully spelled ranks, title-case or uppercase, most specific first.
    static ref SPELLED_SHAPES: Vec<RankShape> = vec![
        RankShape::new(r"\b(?:Tenente|TENENTE)[\s-]+(?:Coronel|CORONEL)\b", &[TENENTE_CORONEL]),
        RankShape::new(r"\b(?:Primeiro|PRIMEIRO)[\s-]+(?:Tenente|TENENTE)\b", &["Primeiro-Tenente"]),
        RankShape::new(r"\b(?:Segundo|SEGUNDO)[\s-]+(?:Tenente|TENENTE)\b", &["Segundo-Tenente"]),
        RankShape::new(r"\b(?:Aspirante|ASPIRANTE)\b", &[ASPIRANTE]),
        RankShape::new(r"\b(?:Subtenente|SUBTENENTE)\b", &[SUBTENENTE]),
        RankShape::new(r"\b([123])\s*[º°o]?\s*(?:Sargento|SARGENTO)\b", SARGENTOS),
        RankShape::new(r"\b(?:Primeiro|PRIMEIRO)[\s-]+(?:Sargento|SARGENTO)\b", &["1º Sargento"]),
        RankShape::new(r"\b(?:Segundo|SEGUNDO)[\s-]+(?:Sargento|SARGENTO)\b", &["2º Sargento"]),
        RankShape::new(r"\b(?:Terceiro|TERCEIRO)[\s-]+(?:Sargento|SARGENTO)\b", &["3º Sargento"]),
        RankShape::new(
            r"\b(?:Soldado|SOLDADO)(?:\s+(?:de|DE))?\s+([12])\s*[ªa]?\s*(?:Classe|CLASSE)\b",
            &[SOLDADO_1, SOLDADO_2],
        ),
        RankShape::new(r"\b(?:Soldado|SOLDADO)\b", &[SOLDADO_1]),
        RankShape::new(r"\b(?:Capitão|CAPITÃO|Capitao|CAPITAO)\b", &[CAPITAO]),
        RankShape::new(r"\b(?:Major|MAJOR)\b", &[MAJOR]),
        RankShape::new(r"\b(?:Coronel|CORONEL)\b", &[CORONEL]),
        RankShape::new(r"\b(?:Cabo|CABO)\b", &[CABO]),
    ];
}

/// Uppercase, turn ordinal marks and punctuation into spaces, collapse
/// spaces and drop trailing corps suffixes.
pub fn normalize_rank(text: &str) -> String {
    let spaced: String = text
        .to_uppercase()
        .chars()
        .map(|c| if matches!(c, 'º' | 'ª' | '°' | '.' | '-' | '/') { ' ' } else { c })
        .collect();

    let mut tokens: Vec<&str> = spaced.split_whitespace().collect();
    while tokens.len() > 1 && tokens.last().is_some_and(|t| CORPS_SUFFIXES.contains(t)) {
        tokens.pop();
    }
    tokens.join(" ")
}

/// Canonical rank for an abbreviation such as "3º SGT" or "CB PM".
pub fn map_rank_abbreviation(abbreviation: &str) -> Option<&'static str> {
    let normalized = normalize_rank(abbreviation);
    RANK_TABLE
        .iter()
        .find(|(abbr, _)| *abbr == normalized)
        .map(|(_, rank)| *rank)
}

/// First abbreviated rank shape found in `text`.
pub fn find_abbreviated_rank(text: &str) -> Option<&'static str> {
    ABBREVIATED_SHAPES.iter().find_map(|shape| shape.resolve(text))
}

/// First fully spelled rank found in `text`.
pub fn find_spelled_rank(text: &str) -> Option<&'static str> {
    SPELLED_SHAPES.iter().find_map(|shape| shape.resolve(text))
}

/// True when `token` is a rank or corps abbreviation.
pub fn is_rank_token(token: &str) -> bool {
    let normalized = normalize_rank(token);
    !normalized.is_empty()
        && (RANK_TOKENS.contains(&normalized.as_str())
            || map_rank_abbreviation(&normalized).is_some())
}
