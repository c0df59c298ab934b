//! Interface de linha de comando do Sombra.

pub mod chat;
pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sombra - Assistente de perguntas e respostas com correção por feedback.
#[derive(Parser, Debug)]
#[command(name = "sombra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "sombra.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração e arquivos de dados.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Abre a conversa interativa.
    Chat,

    /// Faz uma única pergunta e imprime a resposta.
    Ask {
        /// Texto da pergunta.
        question: String,
    },

    /// Ingere um arquivo (.txt, .csv ou .pdf) na base.
    Import {
        /// Arquivo a ingerir.
        file: PathBuf,
    },

    /// Lista os pares pergunta/resposta armazenados.
    Entries {
        /// Número máximo de pares exibidos.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Configura opções interativamente.
    Config,

    /// Diagnostica problemas de configuração e dados.
    Doctor,

    /// Mostra versão.
    Version,
}
