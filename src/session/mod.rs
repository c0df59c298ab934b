//! Controlador de sessão do Sombra.
//!
//! Cada ação do usuário vira um comando tipado consumido pela máquina de
//! estados do controlador, desacoplada de qualquer tecnologia de
//! renderização. O ciclo de um envio é síncrono: filtro → matcher →
//! resposta, com captura opcional de feedback e mutação da base.
//!
//! ## Estados
//!
//! - `Idle`: aguardando um envio.
//! - `AwaitingFeedback`: julgamento sim/não da última resposta.
//! - `AwaitingCorrection`: aguardando a resposta substituta.

mod controller;
mod transcript;

pub use controller::{
    Exchange, Reply, SessionCommand, SessionController, SessionState, Suggestion,
    FALLBACK_MESSAGE, REFUSAL_MESSAGE,
};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
