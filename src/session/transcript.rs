//! Transcript rolante da conversa.

use chrono::{DateTime, Utc};

/// Autor de uma linha do transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// Texto digitado pelo usuário.
    User,
    /// Resposta do assistente.
    Assistant,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::User => write!(f, "você"),
            Speaker::Assistant => write!(f, "sombra"),
        }
    }
}

/// Uma linha registrada na conversa.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// Quem falou.
    pub speaker: Speaker,
    /// Texto exibido.
    pub text: String,
    /// Momento do registro.
    pub at: DateTime<Utc>,
}

/// Transcript da sessão; vive só em memória e nunca é persistido.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Cria um transcript vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra uma fala.
    pub fn record(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker,
            text: text.into(),
            at: Utc::now(),
        });
    }

    /// Linhas registradas até agora, em ordem de chegada.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Esvazia o transcript.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Número de linhas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indica transcript vazio.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_clear() {
        let mut transcript = Transcript::new();
        transcript.record(Speaker::User, "olá");
        transcript.record(Speaker::Assistant, "Olá!");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::User);

        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_speaker_display() {
        assert_eq!(Speaker::User.to_string(), "você");
        assert_eq!(Speaker::Assistant.to_string(), "sombra");
    }
}
