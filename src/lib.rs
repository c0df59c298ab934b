//! # Sombra
//!
//! Assistente local de perguntas e respostas com correção por feedback.
//!
//! Sombra responde texto livre consultando uma base chave-valor de pares
//! pergunta/resposta: primeiro por contenção exata de substring, depois por
//! similaridade fuzzy acima de um limiar. Respostas ruins podem ser
//! corrigidas pelo próprio usuário, e arquivos de texto delimitado, CSV e
//! PDF podem ser ingeridos na mesma base.
//!
//! ## Módulos
//!
//! - [`cli`] - Interface de linha de comando
//! - [`session`] - Controlador de sessão (máquina de estados)
//! - [`matcher`] - Resolução exata e fuzzy de perguntas
//! - [`filter`] - Filtro de moderação por termos banidos
//! - [`ingest`] - Adaptadores de ingestão (texto delimitado, CSV, PDF)
//! - [`store`] - Base persistente de pares pergunta/resposta
//! - [`types`] - Tipos compartilhados

pub mod cli;
pub mod filter;
pub mod ingest;
pub mod matcher;
pub mod session;
pub mod store;
pub mod types;

pub use types::config::Config;
pub use types::errors::{SombraError, SombraResult};
