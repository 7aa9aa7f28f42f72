//! Rule-based field extractors for police occurrence reports.

pub mod normalize;
pub mod proximity;
pub mod patterns;
pub mod vocabulary;
pub mod capture;
pub mod ranks;
pub mod documents;
pub mod dates;
pub mod numbers;
pub mod item;
pub mod legal;
pub mod owner;
pub mod officer;
pub mod unit;

pub use normalize::normalize_whitespace;
pub use proximity::{find_value_near_keyword, find_value_near_keyword_where, Keyword};
pub use ranks::map_rank_abbreviation;
pub use documents::{extract_cpf, extract_rg, CpfExtractor, RgExtractor};
pub use dates::{extract_data_apreensao, normalize_date, SeizureDateExtractor};
pub use numbers::{
    extract_artigo, extract_numero_genesis, extract_numero_pje, extract_quantidade,
    ArticleExtractor, GenesisExtractor, PjeExtractor, QuantityExtractor,
};
pub use item::{
    classify_species, extract_descricao, extract_especie, extract_item, DescriptionExtractor,
    ItemExtractor, SpeciesExtractor,
};
pub use legal::{extract_lei_infringida, LawExtractor};
pub use owner::{extract_nome, OwnerNameExtractor};
pub use officer::{
    extract_graduacao, extract_matricula, extract_nome_policial, officer_section, BadgeExtractor,
    OfficerNameExtractor, RankExtractor,
};
pub use unit::{extract_unidade, UnitExtractor};

use crate::models::record::Field;

/// Trait for field extractors.
///
/// Extractors are pure functions of their input text: absence of a value is
/// `None`, never an error.
pub trait FieldExtractor: Send + Sync {
    /// The field this extractor resolves.
    fn field(&self) -> Field;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<String>;
}

/// One extractor per field, in output order.
pub static EXTRACTORS: [&dyn FieldExtractor; 16] = [
    &CpfExtractor,
    &RgExtractor,
    &OwnerNameExtractor,
    &SeizureDateExtractor,
    &GenesisExtractor,
    &PjeExtractor,
    &BadgeExtractor,
    &SpeciesExtractor,
    &ArticleExtractor,
    &QuantityExtractor,
    &ItemExtractor,
    &DescriptionExtractor,
    &LawExtractor,
    &UnitExtractor,
    &OfficerNameExtractor,
    &RankExtractor,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_field_once() {
        let fields: Vec<Field> = EXTRACTORS.iter().map(|e| e.field()).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_extractors_tolerate_junk() {
        let inputs = [
            "",
            "   ",
            "\u{0}\u{1}\u{2}",
            "ção ção ção: ::: ---",
            "CPF: RG: Nome: Tipo: Descrição:",
            "Policial/Guarnição responsável pelo atendimento",
            "日本語のテキスト 🚓 Matrícula: ４５６",
        ];

        for input in inputs {
            for extractor in EXTRACTORS.iter() {
                let _ = extractor.extract(input);
            }
        }

        for extractor in EXTRACTORS.iter() {
            assert_eq!(extractor.extract(""), None, "{}", extractor.field());
        }
    }
}
