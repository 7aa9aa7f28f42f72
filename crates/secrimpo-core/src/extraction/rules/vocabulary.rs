//! Label keywords and closed vocabularies of police occurrence reports.

use lazy_static::lazy_static;
use regex::Regex;

use super::proximity::{keywords, Keyword};

lazy_static! {
    pub static ref CPF_KEYWORDS: Vec<Keyword> = keywords(&["CPF", "C.P.F."]);

    pub static ref RG_KEYWORDS: Vec<Keyword> =
        keywords(&["RG", "R.G.", "Identidade", "Cédula de identidade"]);

    pub static ref OWNER_KEYWORDS: Vec<Keyword> =
        keywords(&["Vinculado a", "Proprietário", "Autor do fato"]);

    pub static ref ARRIVAL_KEYWORDS: Vec<Keyword> = keywords(&["Chegada local"]);

    pub static ref DATE_KEYWORDS: Vec<Keyword> = keywords(&[
        "Data da apreensão",
        "Data do fato",
        "Data da ocorrência",
        "Data/Hora",
        "Data",
    ]);

    pub static ref GENESIS_KEYWORDS: Vec<Keyword> = keywords(&[
        "Genesis",
        "Gênesis",
        "Nº da Ocorrência",
        "Número da Ocorrência",
        "Ocorrência Nº",
        "Ocorrência N°",
    ]);

    pub static ref PJE_KEYWORDS: Vec<Keyword> = keywords(&[
        "Nº Procedimento",
        "N° Procedimento",
        "Número do Procedimento",
        "Procedimento",
        "Nº PJE",
        "PJE",
        "Processo",
    ]);

    pub static ref BADGE_KEYWORDS: Vec<Keyword> = keywords(&["Matrícula", "Matricula", "Mat."]);

    pub static ref OFFICER_NAME_KEYWORDS: Vec<Keyword> = keywords(&["Nome"]);

    pub static ref OFFICER_FALLBACK_KEYWORDS: Vec<Keyword> = keywords(&[
        "Policial responsável",
        "Condutor",
        "Nome do policial",
        "Policial",
    ]);

    pub static ref RANK_KEYWORDS: Vec<Keyword> = keywords(&[
        "Posto/Grad.",
        "Posto/Graduação",
        "Posto/Grad",
        "Graduação",
        "Posto",
    ]);

    pub static ref SPECIES_KEYWORDS: Vec<Keyword> = keywords(&["Espécie", "Tipo"]);

    pub static ref ARTICLE_KEYWORDS: Vec<Keyword> = keywords(&["Artigo", "Art.", "Art"]);

    pub static ref QUANTITY_KEYWORDS: Vec<Keyword> = keywords(&["Quantidade", "Qtde", "Qtd"]);

    pub static ref ITEM_KEYWORDS: Vec<Keyword> = keywords(&["Tipo", "Item", "Material"]);

    pub static ref DESCRIPTION_KEYWORDS: Vec<Keyword> = keywords(&[
        "Descrição do objeto",
        "Descrição do material",
        "Descrição",
    ]);

    pub static ref LAW_KEYWORDS: Vec<Keyword> = keywords(&[
        "Natureza(s)",
        "Natureza",
        "Lei Infringida",
        "Enquadramento",
    ]);

    pub static ref UNIT_KEYWORDS: Vec<Keyword> = keywords(&["Unidade", "OPM", "Batalhão"]);

    /// Headers opening the section about the responding officer.
    pub static ref OFFICER_SECTION_HEADERS: Vec<Keyword> = keywords(&[
        "Policial/Guarnição responsável pelo atendimento",
        "Policial / Guarnição responsável pelo atendimento",
        "Policial/Guarnicao responsavel pelo atendimento",
        "Guarnição responsável pelo atendimento",
        "Policial responsável pelo atendimento",
        "Responsável pelo atendimento",
    ]);

    /// A field label ending the value that precedes it: "Label:" or a section header.
    pub static ref LABEL_BOUNDARY: Regex = {
        let mut labels: Vec<&str> = FIELD_LABELS.to_vec();
        labels.sort_by_key(|label| std::cmp::Reverse(label.chars().count()));
        let alternation = labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"(?i)(?:^|\s)(?:(?:{})\s*:|(?:{}))",
            alternation,
            SECTION_LABELS.join("|")
        ))
        .unwrap()
    };

    /// Species vocabulary, highest priority first.
    pub static ref SPECIES_VOCABULARY: Vec<(&'static str, Regex)> = SPECIES_TERMS
        .iter()
        .map(|(species, terms)| {
            let pattern = format!(r"(?i)\b(?:{})\b", terms.join("|"));
            (*species, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Labels of report fields, matched when followed by a colon.
pub const FIELD_LABELS: &[&str] = &[
    "CPF",
    "RG",
    "Nome",
    "Nome da mãe",
    "Nome do pai",
    "Condição",
    "Situação",
    "Sexo",
    "Idade",
    "Data de nascimento",
    "Nascimento",
    "Naturalidade",
    "Nacionalidade",
    "Filiação",
    "Endereço",
    "Telefone",
    "Profissão",
    "Estado civil",
    "Escolaridade",
    "Vinculado a",
    "Proprietário",
    "Autor do fato",
    "Chegada local",
    "Data",
    "Data/Hora",
    "Hora",
    "Local",
    "Natureza",
    "Natureza(s)",
    "Lei Infringida",
    "Enquadramento",
    "Unidade",
    "OPM",
    "Batalhão",
    "Tipo",
    "Item",
    "Material",
    "Espécie",
    "Quantidade",
    "Qtde",
    "Qtd",
    "Descrição",
    "Descrição do objeto",
    "Descrição do material",
    "Valor",
    "Valor estimado",
    "Marca",
    "Modelo",
    "Cor",
    "Estado",
    "Lacre",
    "Matrícula",
    "Matricula",
    "Posto/Grad.",
    "Posto/Grad",
    "Posto/Graduação",
    "Graduação",
    "Posto",
    "Nº Procedimento",
    "N° Procedimento",
    "Número do Procedimento",
    "Procedimento",
    "Processo",
    "Viatura",
    "Histórico",
    "Relato",
    "Observações",
    "Envolvidos",
    "Objetos apreendidos",
    "Genesis",
];

/// Section headers ending a value even without a colon.
const SECTION_LABELS: &[&str] = &[
    r"Policial\s*/\s*Guarni[çc][ãa]o\s+respons[áa]vel",
    r"Guarni[çc][ãa]o\s+respons[áa]vel",
    r"Policial\s+respons[áa]vel",
    r"Respons[áa]vel\s+pelo\s+atendimento",
    r"Objetos\s+apreendidos",
    r"Envolvidos\b",
    r"Hist[óo]rico\b",
];

/// Words that are labels or form vocabulary, never part of a name or value.
pub const LABEL_TOKENS: &[&str] = &[
    "cpf",
    "rg",
    "nome",
    "condição",
    "condicao",
    "situação",
    "autor",
    "vítima",
    "vitima",
    "testemunha",
    "envolvido",
    "envolvidos",
    "proprietário",
    "proprietario",
    "matrícula",
    "matricula",
    "posto",
    "graduação",
    "graduacao",
    "unidade",
    "tipo",
    "item",
    "descrição",
    "descricao",
    "quantidade",
    "natureza",
    "data",
    "genesis",
    "gênesis",
    "artigo",
    "art",
    "endereço",
    "telefone",
    "policial",
    "guarnição",
    "guarnicao",
    "responsável",
    "responsavel",
    "atendimento",
    "ocorrência",
    "ocorrencia",
    "procedimento",
    "não",
    "nao",
    "informado",
    "informada",
    "ignorado",
    "ignorada",
    "sexo",
    "masculino",
    "feminino",
    "brasileiro",
    "brasileira",
];

/// Values that sit under a procedure label but are not procedure numbers.
pub const PJE_NON_VALUES: &[&str] = &["ilesa", "ileso", "não", "nao", "inexistente", "n/a"];

const SPECIES_TERMS: &[(&str, &[&str])] = &[
    (
        "SIMULACRO",
        &["simulacros?", "r[ée]plicas?", r"arma\s+de\s+brinquedo", "airsoft"],
    ),
    (
        "ARMA BRANCA",
        &[
            r"armas?\s+brancas?",
            "facas?",
            "canivetes?",
            "fac[ãa]o",
            "punhal",
            "estiletes?",
            "machados?",
            "foices?",
            r"soco\s+ingl[êe]s",
            "adagas?",
            "navalhas?",
        ],
    ),
    (
        "SUBSTÂNCIA",
        &[
            "subst[âa]ncias?",
            "entorpecentes?",
            "drogas?",
            "maconha",
            "coca[íi]na",
            "crack",
            "skunk",
            "haxixe",
            "lsd",
            "ecstasy",
            r"psicotr[óo]pic[oa]s?",
        ],
    ),
    (
        "OBJETO",
        &[
            "objetos?",
            "celular(?:es)?",
            "aparelhos?",
            "bicicletas?",
            "rel[óo]gios?",
            "mochilas?",
            "bolsas?",
            "carteiras?",
            "ferramentas?",
        ],
    ),
];

/// True when `token` is a label word rather than a value.
pub fn is_label_token(token: &str) -> bool {
    let word = token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '/')
        .to_lowercase();
    LABEL_TOKENS.contains(&word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_boundary() {
        assert!(LABEL_BOUNDARY.is_match("Carlos Pereira Matrícula: 73.123-4"));
        assert!(LABEL_BOUNDARY.is_match("6º BPM Envolvidos Nome"));
        assert!(!LABEL_BOUNDARY.is_match("Carlos Pereira"));
        // Label words inside a value are not boundaries without a colon.
        assert!(!LABEL_BOUNDARY.is_match("substância tipo maconha"));
    }

    #[test]
    fn test_label_tokens() {
        assert!(is_label_token("CPF:"));
        assert!(is_label_token("Condição"));
        assert!(is_label_token("Genesis"));
        assert!(is_label_token("Art."));
        assert!(!is_label_token("Silva"));
    }

    #[test]
    fn test_species_vocabulary_order() {
        let order: Vec<&str> = SPECIES_VOCABULARY.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, vec!["SIMULACRO", "ARMA BRANCA", "SUBSTÂNCIA", "OBJETO"]);
        assert!(SPECIES_VOCABULARY[1].1.is_match("uma FACA de cozinha"));
        assert!(!SPECIES_VOCABULARY[1].1.is_match("fachada"));
    }
}
