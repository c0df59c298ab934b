//! Resolução de perguntas em dois estágios.
//!
//! O estágio exato verifica se alguma pergunta armazenada está contida na
//! consulta. Só quando ele falha o estágio fuzzy entra em ação, escolhendo
//! a melhor candidata por similaridade jaro-winkler em escala 0-100; a
//! resposta só é aceita se o score ultrapassar estritamente o limiar.
//!
//! Nenhum estágio devolve mais de uma candidata; não há lista ranqueada
//! exposta ao chamador.

use crate::store::Store;

/// Limiar padrão de aceitação do estágio fuzzy (escala 0-100, estrito).
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 80.0;

/// Estágio que produziu uma resolução.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchKind {
    /// Pergunta armazenada contida na consulta.
    Exact,
    /// Melhor candidata por similaridade.
    Fuzzy {
        /// Score atingido (0-100).
        score: f64,
    },
}

/// Resultado de uma resolução bem-sucedida.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Pergunta armazenada que casou.
    pub question: String,
    /// Resposta associada.
    pub answer: String,
    /// Estágio que produziu o casamento.
    pub kind: MatchKind,
}

/// Similaridade entre duas strings em escala 0-100.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b) * 100.0
}

/// Resolve uma consulta contra a base: exato, depois fuzzy.
pub fn resolve(query: &str, store: &Store, threshold: f64) -> Option<Resolution> {
    let folded = query.to_lowercase();

    if let Some((question, answer)) = exact_match(&folded, store) {
        return Some(Resolution {
            question: question.to_string(),
            answer: answer.to_string(),
            kind: MatchKind::Exact,
        });
    }

    fuzzy_match(&folded, store, threshold).map(|(question, answer, score)| Resolution {
        question: question.to_string(),
        answer: answer.to_string(),
        kind: MatchKind::Fuzzy { score },
    })
}

/// Estágio exato: primeira pergunta armazenada contida na consulta.
///
/// A iteração da base é determinística (ordem lexicográfica); com múltiplas
/// candidatas vence a menor chave.
fn exact_match<'a>(folded_query: &str, store: &'a Store) -> Option<(&'a str, &'a str)> {
    store
        .iter()
        .find(|(question, _)| folded_query.contains(question))
}

/// Estágio fuzzy: melhor candidata acima do limiar, ou nada.
///
/// Com a base vazia não há candidata e o estágio responde `None` direto.
fn fuzzy_match<'a>(
    folded_query: &str,
    store: &'a Store,
    threshold: f64,
) -> Option<(&'a str, &'a str, f64)> {
    let mut best: Option<(&str, &str, f64)> = None;

    for (question, answer) in store.iter() {
        let score = similarity(folded_query, question);
        match &best {
            Some((_, _, best_score)) if score <= *best_score => {}
            _ => best = Some((question, answer, score)),
        }
    }

    best.filter(|(_, _, score)| *score > threshold)
}

/// Sugestão por contenção reversa: pergunta armazenada que contém a
/// consulta inteira.
///
/// Usada para o "você quis dizer" quando os dois estágios falham.
pub fn suggest<'a>(query: &str, store: &'a Store) -> Option<(&'a str, &'a str)> {
    let folded = query.trim().to_lowercase();
    if folded.is_empty() {
        return None;
    }

    store
        .iter()
        .find(|(question, _)| question.contains(folded.as_str()))
}
