//! Adaptadores de ingestão de arquivos externos.
//!
//! Três conversores independentes produzem mapas pergunta→resposta que são
//! mesclados na base com semântica de sobrescrita (valores posteriores
//! vencem em colisão de chave):
//!
//! - **Texto delimitado** (`.txt`): mesma regra de parsing da base.
//! - **Tabular** (`.csv`): apenas linhas com exatamente duas colunas.
//! - **Documento** (`.pdf`): texto extraído inteiro sob uma única chave
//!   sentinela.
//!
//! Qualquer outra extensão é formato não suportado; o chamador reporta e a
//! base fica intacta.

mod delimited;
mod document;
mod tabular;

pub use document::PDF_SENTINEL_KEY;

use std::collections::BTreeMap;
use std::path::Path;

use crate::SombraResult;

/// Formato de origem reconhecido pela ingestão.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Texto delimitado por `|`.
    Delimited,
    /// Planilha CSV de duas colunas.
    Tabular,
    /// Documento PDF.
    Document,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Delimited => write!(f, "texto delimitado"),
            SourceKind::Tabular => write!(f, "csv"),
            SourceKind::Document => write!(f, "pdf"),
        }
    }
}

/// Detecta o formato pela extensão do arquivo (caso-insensitivo).
pub fn detect(path: &Path) -> Option<SourceKind> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "txt" => Some(SourceKind::Delimited),
        "csv" => Some(SourceKind::Tabular),
        "pdf" => Some(SourceKind::Document),
        _ => None,
    }
}

/// Converte um arquivo no mapa de entradas correspondente ao seu formato.
pub fn ingest(path: &Path, kind: SourceKind) -> SombraResult<BTreeMap<String, String>> {
    match kind {
        SourceKind::Delimited => delimited::load(path),
        SourceKind::Tabular => tabular::load(path),
        SourceKind::Document => document::load(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_known_extensions() {
        assert_eq!(detect(&PathBuf::from("dados.txt")), Some(SourceKind::Delimited));
        assert_eq!(detect(&PathBuf::from("dados.csv")), Some(SourceKind::Tabular));
        assert_eq!(detect(&PathBuf::from("manual.pdf")), Some(SourceKind::Document));
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(detect(&PathBuf::from("MANUAL.PDF")), Some(SourceKind::Document));
    }

    #[test]
    fn test_detect_unknown_extension() {
        assert_eq!(detect(&PathBuf::from("dados.docx")), None);
        assert_eq!(detect(&PathBuf::from("sem_extensao")), None);
    }
}
