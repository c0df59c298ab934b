//! Conversa interativa do Sombra.
//!
//! Este módulo é a superfície de apresentação: coleta texto bruto, traduz
//! cada ação em um comando tipado do controlador e renderiza as respostas.
//! Toda a lógica de resolução e de mutação da base vive no controlador.

use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::session::{Reply, SessionCommand, SessionController};
use crate::types::config::Config;
use crate::SombraResult;

use super::commands::build_controller;

/// Abre o loop de conversa.
pub fn run(config: &Config) -> SombraResult<()> {
    let theme = ColorfulTheme::default();
    let mut controller = build_controller(config)?;

    println!("\n💬 Sombra — converse à vontade.");
    println!("Comandos: /feedback, /upload <arquivo>, /limpar, /sair\n");

    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("você")
            .allow_empty(true)
            .interact_text()?;

        let trimmed = line.trim();

        if trimmed == "/sair" {
            println!("Até logo!");
            break;
        }

        if trimmed == "/feedback" {
            run_feedback(&theme, &mut controller)?;
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("/upload") {
            let path = rest.trim();
            if path.is_empty() {
                println!("Uso: /upload <arquivo>");
                continue;
            }
            run_upload(&mut controller, path);
            continue;
        }

        if trimmed == "/limpar" {
            controller.handle(SessionCommand::ClearTranscript)?;
            println!("Transcript limpo.");
            continue;
        }

        match controller.handle(SessionCommand::Submit(line))? {
            Reply::Ignored => {}
            Reply::Refused { message } => println!("sombra: {}", message),
            Reply::Answered {
                response,
                suggestion,
                ..
            } => {
                println!("sombra: {}", response);
                if let Some(suggestion) = suggestion {
                    offer_suggestion(&theme, &suggestion.question, &suggestion.answer)?;
                }
            }
            other => tracing::debug!("Resposta inesperada no envio: {:?}", other),
        }
    }

    Ok(())
}

/// Confirmação do "você quis dizer"; exibição apenas, sem mutação da base.
fn offer_suggestion(
    theme: &ColorfulTheme,
    question: &str,
    answer: &str,
) -> SombraResult<()> {
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Você quis dizer: \"{}\"?", question))
        .default(false)
        .interact()?;

    if confirmed {
        println!("sombra: {}", answer);
    } else {
        println!("sombra: Dê mais detalhes para eu ajudar melhor.");
    }

    Ok(())
}

/// Fluxo de feedback: julgamento sim/não e correção opcional.
fn run_feedback(theme: &ColorfulTheme, controller: &mut SessionController) -> SombraResult<()> {
    let exchange = match controller.handle(SessionCommand::RequestFeedback)? {
        Reply::FeedbackRequested { exchange } => exchange,
        Reply::NothingToReview => {
            println!("Nenhuma troca recente para avaliar.");
            return Ok(());
        }
        other => {
            tracing::debug!("Resposta inesperada no feedback: {:?}", other);
            return Ok(());
        }
    };

    println!("Última troca:");
    println!("  você:   {}", exchange.input);
    println!("  sombra: {}", exchange.response);

    let helpful = Confirm::with_theme(theme)
        .with_prompt("A resposta foi útil?")
        .default(true)
        .interact()?;

    match controller.handle(SessionCommand::Judge { helpful })? {
        Reply::Acknowledged => println!("Obrigado pelo feedback!"),
        Reply::CorrectionRequested => {
            let replacement: String = Input::with_theme(theme)
                .with_prompt("Forneça uma resposta melhor (vazio cancela)")
                .allow_empty(true)
                .interact_text()?;

            let correction = if replacement.trim().is_empty() {
                None
            } else {
                Some(replacement)
            };

            match controller.handle(SessionCommand::Correct(correction))? {
                Reply::CorrectionSaved => println!("✓ Nova resposta registrada na base."),
                Reply::CorrectionDiscarded => println!("Correção cancelada."),
                other => tracing::debug!("Resposta inesperada na correção: {:?}", other),
            }
        }
        other => tracing::debug!("Resposta inesperada no julgamento: {:?}", other),
    }

    Ok(())
}

/// Ingestão disparada de dentro da conversa.
///
/// Falhas de ingestão são avisos para o operador; a sessão continua.
fn run_upload(controller: &mut SessionController, path: &str) {
    match controller.handle(SessionCommand::Upload(PathBuf::from(path))) {
        Ok(Reply::Imported { entries, kind }) => {
            println!("✓ {} entrada(s) de {} mescladas na base.", entries, kind);
        }
        Ok(Reply::UnsupportedFormat { extension }) => {
            println!(
                "Formato não suportado: .{} (aceitos: .txt, .csv, .pdf)",
                extension
            );
        }
        Ok(other) => tracing::debug!("Resposta inesperada na ingestão: {:?}", other),
        Err(e) => println!("✗ Falha na ingestão: {}", e),
    }
}
