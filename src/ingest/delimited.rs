//! Adaptador de texto delimitado.

use std::collections::BTreeMap;
use std::path::Path;

use crate::store::parse_entries;
use crate::SombraResult;

/// Carrega um arquivo `pergunta|resposta`.
///
/// Regra de parsing idêntica à da base: linhas malformadas são puladas com
/// warning, e o carregamento nunca aborta por uma linha ruim.
pub(super) fn load(path: &Path) -> SombraResult<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_uses_store_parsing_rule() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extra.txt");
        std::fs::write(&path, "Prazo|Dez dias úteis.\nlinha sem delimitador\n").unwrap();

        let entries = load(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("prazo").map(String::as_str), Some("Dez dias úteis."));
    }
}
