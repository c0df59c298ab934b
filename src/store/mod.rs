//! Base persistente de pares pergunta/resposta.
//!
//! A base é um arquivo texto UTF-8 com uma entrada por linha no formato
//! `pergunta|resposta`. Todo o conteúdo vive em memória; o arquivo em disco
//! é a única representação durável e é reescrito por completo a cada
//! mutação (write-through, sem append incremental nem log de transações).
//!
//! Campos escapam `\`, `|` e quebras de linha como `\\`, `\|`, `\n` e `\r`,
//! o que permite respostas com múltiplas linhas — caso comum após a
//! ingestão de documentos. As chaves armazenadas são sempre minúsculas.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{SombraError, SombraResult};

/// Delimitador entre pergunta e resposta no arquivo.
pub const DELIMITER: char = '|';

/// Base de pares pergunta/resposta com persistência write-through.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Store {
    /// Abre a base a partir de um arquivo existente.
    ///
    /// Linhas malformadas são puladas com warning; o carregamento nunca
    /// aborta por uma linha ruim. A ausência do arquivo é um erro fatal: a
    /// base nunca inicia vazia por acidente.
    pub fn open<P: AsRef<Path>>(path: P) -> SombraResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(SombraError::StoreNotFound(path));
        }

        let content = std::fs::read_to_string(&path)?;
        let entries = parse_entries(&content);
        tracing::debug!("{} par(es) carregados de {}", entries.len(), path.display());

        Ok(Self { path, entries })
    }

    /// Cria uma base vazia, gravando o arquivo imediatamente.
    pub fn create<P: AsRef<Path>>(path: P) -> SombraResult<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            entries: BTreeMap::new(),
        };
        store.save()?;
        Ok(store)
    }

    /// Reescreve o arquivo inteiro com o conteúdo atual da memória.
    pub fn save(&self) -> SombraResult<()> {
        let mut out = String::new();
        for (question, answer) in &self.entries {
            out.push_str(&escape(question));
            out.push(DELIMITER);
            out.push_str(&escape(answer));
            out.push('\n');
        }
        std::fs::write(&self.path, out)?;
        Ok(())
    }

    /// Insere ou sobrescreve um par e persiste imediatamente.
    ///
    /// A pergunta é normalizada para minúsculas; a chave anterior, se já
    /// existia, perde a resposta antiga (sem histórico).
    pub fn put(&mut self, question: &str, answer: impl Into<String>) -> SombraResult<()> {
        let key = question.trim().to_lowercase();
        if key.is_empty() {
            return Err(SombraError::InvalidEntry(
                "pergunta vazia não pode ser armazenada".to_string(),
            ));
        }

        self.entries.insert(key, answer.into());
        self.save()
    }

    /// Mescla um lote de entradas e persiste uma única vez.
    ///
    /// Valores posteriores vencem em colisão de chave. Retorna o número de
    /// entradas mescladas.
    pub fn merge(&mut self, entries: BTreeMap<String, String>) -> SombraResult<usize> {
        let mut merged = 0;
        for (question, answer) in entries {
            let key = question.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            self.entries.insert(key, answer);
            merged += 1;
        }

        self.save()?;
        Ok(merged)
    }

    /// Busca a resposta exata de uma pergunta.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries.get(&question.to_lowercase()).map(String::as_str)
    }

    /// Itera os pares em ordem lexicográfica de pergunta.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// Número de pares armazenados.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indica base vazia.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Caminho do arquivo de persistência.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parseia o conteúdo de um arquivo delimitado.
///
/// Uma linha sem exatamente um delimitador não escapado é pulada com um
/// erro de parse logado; linhas em branco são ignoradas. A mesma regra vale
/// para o adaptador de ingestão de texto delimitado.
pub(crate) fn parse_entries(content: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match split_line(line) {
            Some((question, answer)) => {
                let key = question.trim().to_lowercase();
                if key.is_empty() {
                    tracing::warn!("Linha {}: pergunta vazia, pulando", number + 1);
                    continue;
                }
                entries.insert(key, answer);
            }
            None => {
                tracing::warn!("Linha {} malformada, pulando: {}", number + 1, line);
            }
        }
    }

    entries
}

/// Separa uma linha em (pergunta, resposta) desfazendo os escapes.
///
/// Exige exatamente um delimitador não escapado; qualquer outra contagem
/// invalida a linha.
fn split_line(line: &str) -> Option<(String, String)> {
    let mut question = String::new();
    let mut answer = String::new();
    let mut seen_delimiter = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        let field = if seen_delimiter { &mut answer } else { &mut question };
        match c {
            '\\' => match chars.next() {
                Some('\\') => field.push('\\'),
                Some('|') => field.push(DELIMITER),
                Some('n') => field.push('\n'),
                Some('r') => field.push('\r'),
                Some(other) => {
                    field.push('\\');
                    field.push(other);
                }
                None => field.push('\\'),
            },
            DELIMITER if seen_delimiter => return None,
            DELIMITER => seen_delimiter = true,
            _ => field.push(c),
        }
    }

    seen_delimiter.then_some((question, answer))
}

/// Escapa um campo para gravação em uma única linha.
fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            DELIMITER => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
