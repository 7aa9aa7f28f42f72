//! Seizure record data models.
//!
//! [`ExtractedFields`] is the raw result of running every extractor over a
//! document: all sixteen keys are always present and an unresolved field
//! serializes as `null`. [`FormData`] is the canonical shape expected by the
//! record form: only resolved keys are serialized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of the raw extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Owner CPF (taxpayer id).
    Cpf,
    /// Owner RG (identity document).
    Rg,
    /// Owner full name.
    Nome,
    /// Seizure date (DD/MM/YYYY).
    DataApreensao,
    /// Genesis occurrence number.
    NumeroGenesis,
    /// PJE / procedure number.
    NumeroPje,
    /// Officer badge number.
    Matricula,
    /// Item species (closed vocabulary).
    Especie,
    /// Legal article.
    Artigo,
    /// Item quantity.
    Quantidade,
    /// Item type.
    Item,
    /// Item description.
    Descricao,
    /// Infringed law.
    LeiInfringida,
    /// Police unit.
    Unidade,
    /// Officer full name.
    NomePolicial,
    /// Officer rank.
    Graduacao,
}

impl Field {
    /// Every field, in output order.
    pub const ALL: [Field; 16] = [
        Field::Cpf,
        Field::Rg,
        Field::Nome,
        Field::DataApreensao,
        Field::NumeroGenesis,
        Field::NumeroPje,
        Field::Matricula,
        Field::Especie,
        Field::Artigo,
        Field::Quantidade,
        Field::Item,
        Field::Descricao,
        Field::LeiInfringida,
        Field::Unidade,
        Field::NomePolicial,
        Field::Graduacao,
    ];

    /// Key used in the serialized field map.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Cpf => "cpf",
            Field::Rg => "rg",
            Field::Nome => "nome",
            Field::DataApreensao => "dataApreensao",
            Field::NumeroGenesis => "numeroGenesis",
            Field::NumeroPje => "numeroPje",
            Field::Matricula => "matricula",
            Field::Especie => "especie",
            Field::Artigo => "artigo",
            Field::Quantidade => "quantidade",
            Field::Item => "item",
            Field::Descricao => "descricao",
            Field::LeiInfringida => "leiInfringida",
            Field::Unidade => "unidade",
            Field::NomePolicial => "nomePolicial",
            Field::Graduacao => "graduacao",
        }
    }

    /// Look up a field by its serialized key.
    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw field map produced by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedFields {
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub nome: Option<String>,
    pub data_apreensao: Option<String>,
    pub numero_genesis: Option<String>,
    pub numero_pje: Option<String>,
    pub matricula: Option<String>,
    pub especie: Option<String>,
    pub artigo: Option<String>,
    pub quantidade: Option<String>,
    pub item: Option<String>,
    pub descricao: Option<String>,
    pub lei_infringida: Option<String>,
    pub unidade: Option<String>,
    pub nome_policial: Option<String>,
    pub graduacao: Option<String>,
}

impl ExtractedFields {
    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Cpf => &self.cpf,
            Field::Rg => &self.rg,
            Field::Nome => &self.nome,
            Field::DataApreensao => &self.data_apreensao,
            Field::NumeroGenesis => &self.numero_genesis,
            Field::NumeroPje => &self.numero_pje,
            Field::Matricula => &self.matricula,
            Field::Especie => &self.especie,
            Field::Artigo => &self.artigo,
            Field::Quantidade => &self.quantidade,
            Field::Item => &self.item,
            Field::Descricao => &self.descricao,
            Field::LeiInfringida => &self.lei_infringida,
            Field::Unidade => &self.unidade,
            Field::NomePolicial => &self.nome_policial,
            Field::Graduacao => &self.graduacao,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Cpf => &mut self.cpf,
            Field::Rg => &mut self.rg,
            Field::Nome => &mut self.nome,
            Field::DataApreensao => &mut self.data_apreensao,
            Field::NumeroGenesis => &mut self.numero_genesis,
            Field::NumeroPje => &mut self.numero_pje,
            Field::Matricula => &mut self.matricula,
            Field::Especie => &mut self.especie,
            Field::Artigo => &mut self.artigo,
            Field::Quantidade => &mut self.quantidade,
            Field::Item => &mut self.item,
            Field::Descricao => &mut self.descricao,
            Field::LeiInfringida => &mut self.lei_infringida,
            Field::Unidade => &mut self.unidade,
            Field::NomePolicial => &mut self.nome_policial,
            Field::Graduacao => &mut self.graduacao,
        }
    }

    /// Value of a field, if resolved.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// Iterate over every field and its value, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Fields that were not resolved.
    pub fn missing(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field)
            .collect()
    }

    /// True when no field was resolved.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_none())
    }
}

/// Type of identity document attached to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "RG")]
    Rg,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Rg => "RG",
        }
    }
}

/// Canonical form data; absent keys are unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_documento: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_documento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_genesis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_apreensao: Option<String>,
    /// Spelled as the form field identifier spells it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lei_infrigida: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artigo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_pje: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub especie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_proprietario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_policial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidade_policial: Option<String>,
}

impl FormData {
    /// Resolved form keys and values, in form order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let slots: [(&'static str, Option<&str>); 17] = [
            ("tipoDocumento", self.tipo_documento.as_ref().map(|t| t.as_str())),
            ("numeroDocumento", self.numero_documento.as_deref()),
            ("numeroGenesis", self.numero_genesis.as_deref()),
            ("unidade", self.unidade.as_deref()),
            ("dataApreensao", self.data_apreensao.as_deref()),
            ("leiInfrigida", self.lei_infrigida.as_deref()),
            ("artigo", self.artigo.as_deref()),
            ("numeroPje", self.numero_pje.as_deref()),
            ("especie", self.especie.as_deref()),
            ("item", self.item.as_deref()),
            ("quantidade", self.quantidade.as_deref()),
            ("descricaoItem", self.descricao_item.as_deref()),
            ("nomeProprietario", self.nome_proprietario.as_deref()),
            ("nomePolicial", self.nome_policial.as_deref()),
            ("matricula", self.matricula.as_deref()),
            ("graduacao", self.graduacao.as_deref()),
            ("unidadePolicial", self.unidade_policial.as_deref()),
        ];

        slots
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }

    /// True when no form key was resolved.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("dataNascimento"), None);
    }

    #[test]
    fn test_empty_fields_serialize_every_key_as_null() {
        let json = serde_json::to_value(ExtractedFields::default()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 16);
        for field in Field::ALL {
            assert_eq!(obj.get(field.key()), Some(&serde_json::Value::Null), "{}", field);
        }
    }

    #[test]
    fn test_get_set_and_missing() {
        let mut fields = ExtractedFields::default();
        assert!(fields.is_empty());

        fields.set(Field::LeiInfringida, Some("Lei 11.343/06".to_string()));
        assert_eq!(fields.lei_infringida.as_deref(), Some("Lei 11.343/06"));
        assert_eq!(fields.get(Field::LeiInfringida), Some("Lei 11.343/06"));
        assert!(!fields.is_empty());
        assert_eq!(fields.missing().len(), 15);
        assert!(!fields.missing().contains(&Field::LeiInfringida));
    }

    #[test]
    fn test_form_data_omits_unresolved_keys() {
        let form = FormData {
            tipo_documento: Some(DocumentType::Rg),
            numero_documento: Some("123456".to_string()),
            lei_infrigida: Some("CP".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tipoDocumento": "RG",
                "numeroDocumento": "123456",
                "leiInfrigida": "CP"
            })
        );
        assert_eq!(form.entries().len(), 3);
        assert_eq!(serde_json::to_string(&FormData::default()).unwrap(), "{}");
    }
}
