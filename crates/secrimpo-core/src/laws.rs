//! Catalog of the principal Brazilian laws.
//!
//! Used to recognize code abbreviations in the nature of an occurrence and
//! to expand them into full law names.

use std::collections::BTreeSet;

use serde::Serialize;

/// Maximum number of results returned by [`search_laws`].
const SEARCH_LIMIT: usize = 15;
/// Number of entries listed when the search term is empty.
const DEFAULT_LISTING: usize = 10;

/// A catalogued law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LawEntry {
    /// Abbreviation or short citation ("CP", "Lei 11.343/06").
    pub abbreviation: &'static str,
    /// Full name.
    pub name: &'static str,
    /// Enacting act.
    pub description: &'static str,
    pub year: u16,
    pub category: &'static str,
}

const fn law(
    abbreviation: &'static str,
    name: &'static str,
    description: &'static str,
    year: u16,
    category: &'static str,
) -> LawEntry {
    LawEntry {
        abbreviation,
        name,
        description,
        year,
        category,
    }
}

/// Every catalogued law, in listing order.
pub static LAWS: &[LawEntry] = &[
    law("CF", "Constituição Federal", "Constituição da República Federativa do Brasil de 1988", 1988, "constitucional"),
    law("CP", "Código Penal", "Decreto-Lei nº 2.848, de 7 de dezembro de 1940", 1940, "penal"),
    law("CPP", "Código de Processo Penal", "Decreto-Lei nº 3.689, de 3 de outubro de 1941", 1941, "processual"),
    law("LCP", "Lei das Contravenções Penais", "Decreto-Lei nº 3.688, de 3 de outubro de 1941", 1941, "penal"),
    law(
        "Lei 11.343/06",
        "Lei de Drogas",
        "Lei nº 11.343, de 23 de agosto de 2006 - Sistema Nacional de Políticas Públicas sobre Drogas",
        2006,
        "drogas",
    ),
    law("ECA", "Estatuto da Criança e do Adolescente", "Lei nº 8.069, de 13 de julho de 1990", 1990, "estatuto"),
    law("Estatuto do Idoso", "Estatuto do Idoso", "Lei nº 10.741, de 1º de outubro de 2003", 2003, "estatuto"),
    law("Estatuto do Desarmamento", "Estatuto do Desarmamento", "Lei nº 10.826, de 22 de dezembro de 2003", 2003, "armas"),
    law("CTB", "Código de Trânsito Brasileiro", "Lei nº 9.503, de 23 de setembro de 1997", 1997, "transito"),
    law(
        "Lei Maria da Penha",
        "Lei Maria da Penha",
        "Lei nº 11.340, de 7 de agosto de 2006 - Violência Doméstica e Familiar contra a Mulher",
        2006,
        "violencia_domestica",
    ),
    law("Lei 9.605/98", "Lei de Crimes Ambientais", "Lei nº 9.605, de 12 de fevereiro de 1998", 1998, "ambiental"),
    law("Código Eleitoral", "Código Eleitoral", "Lei nº 4.737, de 15 de julho de 1965", 1965, "eleitoral"),
    law("CTN", "Código Tributário Nacional", "Lei nº 5.172, de 25 de outubro de 1966", 1966, "tributario"),
    law("CLT", "Consolidação das Leis do Trabalho", "Decreto-Lei nº 5.452, de 1º de maio de 1943", 1943, "trabalhista"),
    law("CC", "Código Civil", "Lei nº 10.406, de 10 de janeiro de 2002", 2002, "civil"),
    law("CPC", "Código de Processo Civil", "Lei nº 13.105, de 16 de março de 2015", 2015, "processual"),
    law("Lei 8.072/90", "Lei dos Crimes Hediondos", "Lei nº 8.072, de 25 de julho de 1990", 1990, "penal"),
    law("Lei 9.099/95", "Lei dos Juizados Especiais", "Lei nº 9.099, de 26 de setembro de 1995", 1995, "processual"),
    law("Lei 12.850/13", "Lei das Organizações Criminosas", "Lei nº 12.850, de 2 de agosto de 2013", 2013, "penal"),
    law("Lei 9.613/98", "Lei de Lavagem de Dinheiro", "Lei nº 9.613, de 3 de março de 1998", 1998, "financeiro"),
    law(
        "Lei 8.137/90",
        "Lei dos Crimes contra a Ordem Tributária",
        "Lei nº 8.137, de 27 de dezembro de 1990",
        1990,
        "tributario",
    ),
    law("Lei 7.716/89", "Lei do Racismo", "Lei nº 7.716, de 5 de janeiro de 1989", 1989, "discriminacao"),
    law("Lei 8.078/90", "Código de Defesa do Consumidor", "Lei nº 8.078, de 11 de setembro de 1990", 1990, "consumidor"),
    law("Lei 12.965/14", "Marco Civil da Internet", "Lei nº 12.965, de 23 de abril de 2014", 2014, "digital"),
    law(
        "Lei 13.709/18",
        "Lei Geral de Proteção de Dados (LGPD)",
        "Lei nº 13.709, de 14 de agosto de 2018",
        2018,
        "digital",
    ),
];

/// Full name for an abbreviation, matched case-insensitively.
pub fn law_name_for_abbreviation(abbreviation: &str) -> Option<&'static str> {
    let wanted = abbreviation.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    LAWS.iter()
        .find(|law| law.abbreviation.to_lowercase() == wanted)
        .map(|law| law.name)
}

/// Laws whose abbreviation, name, description or category contains `term`.
///
/// An empty term lists the first entries of the catalog.
pub fn search_laws(term: &str) -> Vec<&'static LawEntry> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return LAWS.iter().take(DEFAULT_LISTING).collect();
    }

    LAWS.iter()
        .filter(|law| {
            [law.abbreviation, law.name, law.description, law.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .take(SEARCH_LIMIT)
        .collect()
}

/// Laws in a category.
pub fn laws_by_category(category: &str) -> Vec<&'static LawEntry> {
    LAWS.iter().filter(|law| law.category == category).collect()
}

/// Every category, sorted and without duplicates.
pub fn categories() -> Vec<&'static str> {
    LAWS.iter()
        .map(|law| law.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_law_name_for_abbreviation() {
        assert_eq!(law_name_for_abbreviation("CP"), Some("Código Penal"));
        assert_eq!(law_name_for_abbreviation("lcp"), Some("Lei das Contravenções Penais"));
        assert_eq!(law_name_for_abbreviation(" CTB "), Some("Código de Trânsito Brasileiro"));
        assert_eq!(law_name_for_abbreviation("Lei 11.343/06"), Some("Lei de Drogas"));
        assert_eq!(law_name_for_abbreviation("XYZ"), None);
        assert_eq!(law_name_for_abbreviation(""), None);
    }

    #[test]
    fn test_search_laws() {
        assert_eq!(search_laws("").len(), 10);

        let drugs = search_laws("drogas");
        assert_eq!(drugs.len(), 1);
        assert_eq!(drugs[0].abbreviation, "Lei 11.343/06");

        let codes: Vec<&str> = search_laws("processo").iter().map(|l| l.abbreviation).collect();
        assert_eq!(codes, vec!["CPP", "CPC"]);

        assert!(search_laws("lei").len() <= 15);
        assert!(search_laws("inexistente").is_empty());
    }

    #[test]
    fn test_categories() {
        let all = categories();
        assert_eq!(all.first(), Some(&"ambiental"));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(laws_by_category("digital").len(), 2);
        assert_eq!(laws_by_category("penal").len(), 4);
    }
}
