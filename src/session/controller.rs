//! Máquina de estados da sessão.

use std::path::{Path, PathBuf};

use crate::filter::ModerationFilter;
use crate::ingest::{self, SourceKind};
use crate::matcher::{self, MatchKind};
use crate::store::Store;
use crate::SombraResult;

use super::transcript::{Speaker, Transcript};

/// Mensagem fixa de recusa para entradas com termos banidos.
pub const REFUSAL_MESSAGE: &str = "Não posso responder perguntas com linguagem imprópria. \
     Para manter um ambiente profissional e respeitoso, evite termos ofensivos.";

/// Mensagem fixa quando nenhum estágio encontra resposta.
pub const FALLBACK_MESSAGE: &str = "Desculpe, não entendi a pergunta.";

/// Estados duráveis do controlador.
///
/// As fases de filtragem e matching de um envio são transientes dentro do
/// tratamento do próprio comando; só estes estados sobrevivem entre
/// comandos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Aguardando um envio.
    Idle,
    /// Aguardando o julgamento sim/não da última resposta.
    AwaitingFeedback,
    /// Aguardando a resposta substituta.
    AwaitingCorrection,
}

/// Comandos aceitos pelo controlador, um por ação do usuário.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Envio de texto livre.
    Submit(String),
    /// Pedido explícito de feedback sobre a última troca.
    RequestFeedback,
    /// Julgamento sim/não da última resposta.
    Judge {
        /// `true` se a resposta foi útil.
        helpful: bool,
    },
    /// Resposta substituta, ou `None` para cancelar.
    Correct(Option<String>),
    /// Ingestão de um arquivo na base.
    Upload(PathBuf),
    /// Esvazia o transcript.
    ClearTranscript,
}

/// Entrada sugerida quando a resolução falha mas a consulta está contida
/// em alguma pergunta armazenada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Pergunta armazenada que contém a consulta.
    pub question: String,
    /// Resposta associada, exibida se o usuário confirmar.
    pub answer: String,
}

/// Última troca registrada, base do fluxo de feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Texto enviado pelo usuário.
    pub input: String,
    /// Resposta exibida.
    pub response: String,
}

/// Resposta tipada de um comando.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Envio vazio; nenhuma transição de estado.
    Ignored,
    /// Entrada sinalizada pelo filtro de moderação.
    Refused {
        /// Mensagem fixa de recusa.
        message: String,
    },
    /// Resposta produzida por matching ou fallback.
    Answered {
        /// Texto da resposta.
        response: String,
        /// Estágio que resolveu, ou `None` no fallback.
        kind: Option<MatchKind>,
        /// Sugestão "você quis dizer", presente só no fallback.
        suggestion: Option<Suggestion>,
    },
    /// Feedback aberto sobre a última troca.
    FeedbackRequested {
        /// A troca em julgamento.
        exchange: Exchange,
    },
    /// Não há troca recente para julgar.
    NothingToReview,
    /// Julgamento positivo registrado.
    Acknowledged,
    /// Pedido de correção aberto.
    CorrectionRequested,
    /// Correção aplicada e persistida.
    CorrectionSaved,
    /// Correção cancelada sem mutação.
    CorrectionDiscarded,
    /// Ingestão concluída e persistida.
    Imported {
        /// Número de entradas mescladas.
        entries: usize,
        /// Formato de origem.
        kind: SourceKind,
    },
    /// Extensão não suportada; base intacta.
    UnsupportedFormat {
        /// Extensão encontrada (vazia se ausente).
        extension: String,
    },
    /// Transcript esvaziado.
    TranscriptCleared,
    /// Comando fora de vez para o estado atual.
    OutOfTurn {
        /// Estado em que o comando chegou.
        state: SessionState,
    },
}

/// Controlador de sessão: orquestra filtro, matcher e base.
///
/// Todo o estado é injetado na construção e pertence ao controlador; não há
/// singletons de processo.
#[derive(Debug)]
pub struct SessionController {
    store: Store,
    filter: ModerationFilter,
    fuzzy_threshold: f64,
    state: SessionState,
    last_exchange: Option<Exchange>,
    transcript: Transcript,
}

impl SessionController {
    /// Cria o controlador com as dependências já carregadas.
    pub fn new(store: Store, filter: ModerationFilter, fuzzy_threshold: f64) -> Self {
        Self {
            store,
            filter,
            fuzzy_threshold,
            state: SessionState::Idle,
            last_exchange: None,
            transcript: Transcript::new(),
        }
    }

    /// Estado durável atual.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Última troca registrada.
    pub fn last_exchange(&self) -> Option<&Exchange> {
        self.last_exchange.as_ref()
    }

    /// Transcript da sessão.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Acesso de leitura à base.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Trata um comando e devolve a resposta tipada.
    pub fn handle(&mut self, command: SessionCommand) -> SombraResult<Reply> {
        match command {
            SessionCommand::Submit(text) => self.submit(&text),
            SessionCommand::RequestFeedback => Ok(self.request_feedback()),
            SessionCommand::Judge { helpful } => Ok(self.judge(helpful)),
            SessionCommand::Correct(replacement) => self.correct(replacement),
            SessionCommand::Upload(path) => self.upload(&path),
            SessionCommand::ClearTranscript => Ok(self.clear_transcript()),
        }
    }

    /// Ciclo completo de um envio: filtro → matcher → resposta.
    fn submit(&mut self, text: &str) -> SombraResult<Reply> {
        if self.state != SessionState::Idle {
            return Ok(Reply::OutOfTurn { state: self.state });
        }

        let input = text.trim().to_string();
        if input.is_empty() {
            return Ok(Reply::Ignored);
        }

        // Filtragem: entrada sinalizada nunca chega ao matcher e não vira
        // "última troca"
        if self.filter.is_flagged(&input) {
            tracing::info!("Entrada recusada pelo filtro de moderação");
            self.transcript.record(Speaker::User, &input);
            self.transcript.record(Speaker::Assistant, REFUSAL_MESSAGE);
            return Ok(Reply::Refused {
                message: REFUSAL_MESSAGE.to_string(),
            });
        }

        // Matching: exato, depois fuzzy; fallback com sugestão por
        // contenção reversa quando ambos falham
        let (response, kind, suggestion) =
            match matcher::resolve(&input, &self.store, self.fuzzy_threshold) {
                Some(resolution) => {
                    tracing::debug!(
                        "Consulta resolvida por {:?} (pergunta: {})",
                        resolution.kind,
                        resolution.question
                    );
                    (resolution.answer, Some(resolution.kind), None)
                }
                None => {
                    let suggestion =
                        matcher::suggest(&input, &self.store).map(|(question, answer)| {
                            Suggestion {
                                question: question.to_string(),
                                answer: answer.to_string(),
                            }
                        });
                    (FALLBACK_MESSAGE.to_string(), None, suggestion)
                }
            };

        self.transcript.record(Speaker::User, &input);
        self.transcript.record(Speaker::Assistant, &response);
        self.last_exchange = Some(Exchange {
            input,
            response: response.clone(),
        });

        Ok(Reply::Answered {
            response,
            kind,
            suggestion,
        })
    }

    fn request_feedback(&mut self) -> Reply {
        if self.state != SessionState::Idle {
            return Reply::OutOfTurn { state: self.state };
        }

        match &self.last_exchange {
            Some(exchange) => {
                self.state = SessionState::AwaitingFeedback;
                Reply::FeedbackRequested {
                    exchange: exchange.clone(),
                }
            }
            None => Reply::NothingToReview,
        }
    }

    fn judge(&mut self, helpful: bool) -> Reply {
        if self.state != SessionState::AwaitingFeedback {
            return Reply::OutOfTurn { state: self.state };
        }

        if helpful {
            self.state = SessionState::Idle;
            Reply::Acknowledged
        } else {
            self.state = SessionState::AwaitingCorrection;
            Reply::CorrectionRequested
        }
    }

    fn correct(&mut self, replacement: Option<String>) -> SombraResult<Reply> {
        if self.state != SessionState::AwaitingCorrection {
            return Ok(Reply::OutOfTurn { state: self.state });
        }
        self.state = SessionState::Idle;

        let replacement = replacement
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        let Some(replacement) = replacement else {
            return Ok(Reply::CorrectionDiscarded);
        };

        // AwaitingCorrection só é alcançável após julgamento de uma troca
        // existente
        let Some(exchange) = &self.last_exchange else {
            return Ok(Reply::CorrectionDiscarded);
        };

        self.store.put(&exchange.input, replacement)?;
        tracing::info!("Resposta corrigida para: {}", exchange.input);
        Ok(Reply::CorrectionSaved)
    }

    fn upload(&mut self, path: &Path) -> SombraResult<Reply> {
        if self.state != SessionState::Idle {
            return Ok(Reply::OutOfTurn { state: self.state });
        }

        let Some(kind) = ingest::detect(path) else {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            return Ok(Reply::UnsupportedFormat { extension });
        };

        let entries = ingest::ingest(path, kind)?;
        let merged = self.store.merge(entries)?;
        tracing::info!("{} entrada(s) mescladas de {}", merged, path.display());

        Ok(Reply::Imported {
            entries: merged,
            kind,
        })
    }

    fn clear_transcript(&mut self) -> Reply {
        self.transcript.clear();
        Reply::TranscriptCleared
    }
}
