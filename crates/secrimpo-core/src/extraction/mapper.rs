//! Mapping of the raw field map onto the record form.

use crate::models::record::{DocumentType, ExtractedFields, FormData};

/// Map extracted fields onto form keys.
///
/// The owner's CPF takes precedence over the RG as the identity document.
/// Free text is uppercased; the date, species and rank keep their canonical
/// casing. The raw map has no separate officer unit, so the unit fills both
/// `unidade` and `unidadePolicial`.
pub fn map_fields_to_form(fields: &ExtractedFields) -> FormData {
    let mut form = FormData::default();

    if let Some(cpf) = resolved(&fields.cpf) {
        form.tipo_documento = Some(DocumentType::Cpf);
        form.numero_documento = Some(format_cpf(cpf));
    } else if let Some(rg) = resolved(&fields.rg) {
        form.tipo_documento = Some(DocumentType::Rg);
        form.numero_documento = Some(rg.to_uppercase());
    }

    form.numero_genesis = uppercased(&fields.numero_genesis);
    form.unidade = uppercased(&fields.unidade);
    form.unidade_policial = form.unidade.clone();
    form.data_apreensao = verbatim(&fields.data_apreensao);
    form.lei_infrigida = uppercased(&fields.lei_infringida);
    form.artigo = uppercased(&fields.artigo);
    form.numero_pje = uppercased(&fields.numero_pje);
    form.especie = verbatim(&fields.especie);
    form.item = uppercased(&fields.item);
    form.quantidade = uppercased(&fields.quantidade);
    form.descricao_item = uppercased(&fields.descricao);
    form.nome_proprietario = uppercased(&fields.nome);
    form.nome_policial = uppercased(&fields.nome_policial);
    form.matricula = uppercased(&fields.matricula);
    form.graduacao = verbatim(&fields.graduacao);

    form
}

/// Format a CPF as `XXX.XXX.XXX-XX` when it has exactly 11 digits, otherwise
/// return it uppercased.
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return cpf.to_uppercase();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// A non-blank value.
fn resolved(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn uppercased(value: &Option<String>) -> Option<String> {
    resolved(value).map(str::to_uppercase)
}

fn verbatim(value: &Option<String>) -> Option<String> {
    resolved(value).map(str::to_string)
}
