//! Adaptador de documentos PDF.

use std::collections::BTreeMap;
use std::path::Path;

use crate::{SombraError, SombraResult};

/// Chave sentinela sob a qual o texto extraído do documento é armazenado.
///
/// Reingerir outro documento sobrescreve esta única entrada em vez de
/// acrescentar novas.
pub const PDF_SENTINEL_KEY: &str = "pdf_content";

/// Extrai todo o texto de um PDF como entrada única sob a chave sentinela.
///
/// A concatenação das páginas é responsabilidade do extrator. Uma falha de
/// extração invalida o documento inteiro: nenhuma entrada é produzida e o
/// erro sobe para o chamador.
pub(super) fn load(path: &Path) -> SombraResult<BTreeMap<String, String>> {
    let text =
        pdf_extract::extract_text(path).map_err(|e| SombraError::Extraction(e.to_string()))?;

    let mut entries = BTreeMap::new();
    entries.insert(PDF_SENTINEL_KEY.to_string(), text);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_invalid_document_fails_whole_upload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quebrado.pdf");
        std::fs::write(&path, b"isto nao e um pdf").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(SombraError::Extraction(_))));
    }
}
