//! Implementação dos comandos CLI do Sombra.

use std::path::{Path, PathBuf};

use crate::filter::ModerationFilter;
use crate::ingest;
use crate::session::{Reply, SessionCommand, SessionController};
use crate::store::Store;
use crate::types::config::Config;
use crate::SombraResult;

/// Pares iniciais gravados por `init` para a base não nascer vazia.
const SEED_ENTRIES: &str = "olá|Olá! Em que posso ajudar?\n\
oi|Oi! Pode perguntar.\n\
tchau|Até logo!\n\
obrigado|De nada!\n";

/// Initializes configuration and data files in the specified directory.
pub fn init(path: Option<PathBuf>) -> SombraResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("sombra.toml");

    if config_path.exists() {
        println!("Configuração já existe em: {}", config_path.display());
        println!("Use 'sombra config' para modificar.");
        return Ok(());
    }

    // Create .sombra/ directory for the data files
    let data_dir = target_dir.join(".sombra");
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        tracing::info!(".sombra/ directory created");
    }

    // Update .gitignore to ignore .sombra/
    update_gitignore(&target_dir)?;

    // Create default configuration
    let config = Config::default_config();
    config.save(&config_path)?;

    seed_data_files(&target_dir, &config)?;

    println!("Sombra inicializado com sucesso!");
    println!("Configuração criada em: {}", config_path.display());
    println!("Diretório de dados: .sombra/");
    println!();
    println!("Próximos passos:");
    println!("  1. Revise a base inicial: sombra entries");
    println!("  2. Preencha a lista de termos banidos em .sombra/termos_banidos.txt");
    println!("  3. Converse: sombra chat");

    Ok(())
}

/// Updates or creates .gitignore to include .sombra/
fn update_gitignore(target_dir: &Path) -> SombraResult<()> {
    let gitignore_path = target_dir.join(".gitignore");
    let sombra_entry = ".sombra/";
    let sombra_comment = "# Sombra - local answer base";

    if gitignore_path.exists() {
        // Read existing content
        let content = std::fs::read_to_string(&gitignore_path)?;

        // Check if it already contains .sombra/
        if content
            .lines()
            .any(|line| line.trim() == sombra_entry || line.trim() == ".sombra")
        {
            tracing::debug!(".gitignore already contains .sombra/");
            return Ok(());
        }

        // Append to end of file
        let mut new_content = content.trim_end().to_string();
        if !new_content.is_empty() {
            new_content.push_str("\n\n");
        }
        new_content.push_str(sombra_comment);
        new_content.push('\n');
        new_content.push_str(sombra_entry);
        new_content.push('\n');

        std::fs::write(&gitignore_path, new_content)?;
        println!(".gitignore atualizado com .sombra/");
    } else {
        // Create new .gitignore
        let content = format!("{}\n{}\n", sombra_comment, sombra_entry);
        std::fs::write(&gitignore_path, content)?;
        println!(".gitignore criado com .sombra/");
    }

    Ok(())
}

/// Grava os arquivos de dados iniciais quando ainda não existem.
fn seed_data_files(target_dir: &Path, config: &Config) -> SombraResult<()> {
    let data_path = target_dir.join(&config.store.data_path);
    if !data_path.exists() {
        std::fs::write(&data_path, SEED_ENTRIES)?;
        println!("Base inicial criada em: {}", data_path.display());
    }

    let banned_path = target_dir.join(&config.store.banned_terms_path);
    if !banned_path.exists() {
        // Um termo minúsculo por linha; o operador preenche a lista real
        std::fs::write(&banned_path, "")?;
        println!(
            "Lista de termos banidos criada em: {}",
            banned_path.display()
        );
    }

    Ok(())
}

/// Monta o controlador de sessão a partir da configuração.
///
/// Falha se qualquer um dos dois arquivos de dados estiver ausente.
pub(crate) fn build_controller(config: &Config) -> SombraResult<SessionController> {
    let store = Store::open(&config.store.data_path)?;
    let filter = ModerationFilter::load(&config.store.banned_terms_path)?;
    Ok(SessionController::new(
        store,
        filter,
        config.matcher.fuzzy_threshold,
    ))
}

/// Faz uma única pergunta e imprime a resposta.
pub fn ask(question: &str, config: &Config) -> SombraResult<()> {
    let mut controller = build_controller(config)?;

    match controller.handle(SessionCommand::Submit(question.to_string()))? {
        Reply::Refused { message } => println!("{}", message),
        Reply::Answered {
            response,
            suggestion,
            ..
        } => {
            println!("{}", response);
            if let Some(suggestion) = suggestion {
                println!("Você quis dizer: \"{}\"?", suggestion.question);
            }
        }
        Reply::Ignored => println!("Pergunta vazia."),
        other => tracing::debug!("Resposta inesperada no envio: {:?}", other),
    }

    Ok(())
}

/// Ingere um arquivo na base pelo adaptador correspondente à extensão.
pub fn import(file: &Path, config: &Config) -> SombraResult<()> {
    let mut controller = build_controller(config)?;

    // A extração de documentos pode demorar; os demais formatos são rápidos
    let spinner = match ingest::detect(file) {
        Some(ingest::SourceKind::Document) => {
            let pb = indicatif::ProgressBar::new_spinner();
            pb.set_message(format!("Extraindo texto de {}...", file.display()));
            pb.enable_steady_tick(std::time::Duration::from_millis(120));
            Some(pb)
        }
        _ => None,
    };

    let reply = controller.handle(SessionCommand::Upload(file.to_path_buf()));

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match reply? {
        Reply::Imported { entries, kind } => {
            println!("✓ {} entrada(s) de {} mescladas na base.", entries, kind);
        }
        Reply::UnsupportedFormat { extension } => {
            println!("Formato não suportado: .{}", extension);
            println!("Formatos aceitos: .txt, .csv, .pdf");
        }
        other => tracing::debug!("Resposta inesperada na ingestão: {:?}", other),
    }

    Ok(())
}

/// Lista os pares armazenados em ordem lexicográfica.
pub fn entries(limit: Option<usize>, config: &Config) -> SombraResult<()> {
    let store = Store::open(&config.store.data_path)?;

    if store.is_empty() {
        println!("A base está vazia.");
        return Ok(());
    }

    let shown = limit.unwrap_or(store.len()).min(store.len());
    for (question, answer) in store.iter().take(shown) {
        println!("  {} → {}", question, preview(answer));
    }
    println!();
    println!("{} de {} par(es) exibidos.", shown, store.len());

    Ok(())
}

/// Primeira linha da resposta, truncada para caber na listagem.
fn preview(answer: &str) -> String {
    let first_line = answer.lines().next().unwrap_or("");
    let mut out: String = first_line.chars().take(60).collect();
    if first_line.chars().count() > 60 || answer.lines().count() > 1 {
        out.push('…');
    }
    out
}

/// Diagnostica configuração e arquivos de dados.
pub fn doctor(config_path: &Path, config: &Config) -> SombraResult<()> {
    println!("Diagnóstico do Sombra\n");

    if config_path.exists() {
        println!("  ✓ Configuração: {}", config_path.display());
    } else {
        println!(
            "  ○ Configuração ausente em: {} (usando padrões)",
            config_path.display()
        );
    }

    match Store::open(&config.store.data_path) {
        Ok(store) => println!(
            "  ✓ Base de respostas: {} par(es) em {}",
            store.len(),
            config.store.data_path.display()
        ),
        Err(e) => println!("  ✗ Base de respostas: {}", e),
    }

    match ModerationFilter::load(&config.store.banned_terms_path) {
        Ok(filter) if filter.is_empty() => {
            println!("  ○ Termos banidos: arquivo vazio (filtro inativo)");
        }
        Ok(filter) => println!("  ✓ Termos banidos: {} termo(s)", filter.len()),
        Err(e) => println!("  ✗ Termos banidos: {}", e),
    }

    let threshold = config.matcher.fuzzy_threshold;
    if (0.0..=100.0).contains(&threshold) {
        println!("  ✓ Limiar fuzzy: {:.1}", threshold);
    } else {
        println!("  ✗ Limiar fuzzy fora da escala 0-100: {:.1}", threshold);
    }

    println!();
    println!("Execute 'sombra init' para criar arquivos ausentes.");

    Ok(())
}

/// Mostra a versão.
pub fn version() {
    println!("sombra {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_answers() {
        let long = "a".repeat(80);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), 61);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_preview_marks_multiline_answers() {
        assert_eq!(preview("linha 1\nlinha 2"), "linha 1…");
        assert_eq!(preview("curta"), "curta");
    }
}
