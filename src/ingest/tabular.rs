//! Adaptador tabular (CSV).

use std::collections::BTreeMap;
use std::path::Path;

use crate::SombraResult;

/// Carrega um CSV sem cabeçalho.
///
/// Somente linhas com exatamente duas colunas viram entradas (coluna 1
/// minúscula → coluna 2); qualquer outra largura é descartada em silêncio.
pub(super) fn load(path: &Path) -> SombraResult<BTreeMap<String, String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            continue;
        }

        let question = record[0].trim().to_lowercase();
        if question.is_empty() {
            continue;
        }
        entries.insert(question, record[1].to_string());
    }

    Ok(entries)
}
