//! Filtro de moderação por termos banidos.
//!
//! O conjunto é carregado uma vez na inicialização e fica imutável pelo
//! resto do processo. A verificação roda antes de qualquer matching:
//! entrada sinalizada nunca chega ao matcher.

use std::collections::HashSet;
use std::path::Path;

use crate::{SombraError, SombraResult};

/// Conjunto imutável de termos banidos.
#[derive(Debug, Clone)]
pub struct ModerationFilter {
    terms: HashSet<String>,
}

impl ModerationFilter {
    /// Carrega os termos de um arquivo texto, um termo minúsculo por linha.
    ///
    /// A ausência do arquivo é fatal: o sistema não inicia sem seus dois
    /// arquivos de dados.
    pub fn load<P: AsRef<Path>>(path: P) -> SombraResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SombraError::BannedTermsNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let terms: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        tracing::debug!("{} termo(s) banidos carregados", terms.len());
        Ok(Self { terms })
    }

    /// Constrói o filtro a partir de termos já conhecidos.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(|term| {
                let term: String = term.into();
                term.trim().to_lowercase()
            })
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    /// Verifica se o texto contém algum termo banido (caso-insensitivo).
    ///
    /// Conjunto vazio nunca sinaliza nada.
    pub fn is_flagged(&self, text: &str) -> bool {
        let folded = text.to_lowercase();
        self.terms.iter().any(|term| folded.contains(term.as_str()))
    }

    /// Número de termos carregados.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Indica conjunto vazio.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flags_term_anywhere_in_text() {
        let filter = ModerationFilter::from_terms(["badword"]);
        assert!(filter.is_flagged("this is a badword test"));
        assert!(!filter.is_flagged("this is a clean test"));
    }

    #[test]
    fn test_flag_is_case_insensitive() {
        let filter = ModerationFilter::from_terms(["badword"]);
        assert!(filter.is_flagged("this is a BadWord test"));
    }

    #[test]
    fn test_empty_set_never_flags() {
        let filter = ModerationFilter::from_terms(Vec::<String>::new());
        assert!(!filter.is_flagged("anything at all"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("termos.txt");
        std::fs::write(&path, "badword\n  Outro \n\n").unwrap();

        let filter = ModerationFilter::load(&path).unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.is_flagged("diga outro termo"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let result = ModerationFilter::load(dir.path().join("inexistente.txt"));
        assert!(matches!(result, Err(SombraError::BannedTermsNotFound(_))));
    }
}
