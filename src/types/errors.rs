//! Tipos de erro do Sombra.

use std::path::PathBuf;

use thiserror::Error;

/// Tipo de resultado padrão do Sombra.
pub type SombraResult<T> = Result<T, SombraError>;

/// Erros possíveis no Sombra.
#[derive(Error, Debug)]
pub enum SombraError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro ao ler CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Base de respostas não encontrada em: {0}")]
    StoreNotFound(PathBuf),

    #[error("Arquivo de termos banidos não encontrado em: {0}")]
    BannedTermsNotFound(PathBuf),

    #[error("Entrada inválida: {0}")]
    InvalidEntry(String),

    #[error("Falha ao extrair texto do documento: {0}")]
    Extraction(String),

    #[error("Erro de interação com o terminal: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

impl SombraError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
