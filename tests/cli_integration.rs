//! Testes de integração para a CLI do Sombra.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binário compilado do Sombra.
fn sombra_bin() -> Command {
    Command::cargo_bin("sombra").expect("binário sombra compilado")
}

/// Inicializa um diretório temporário com `sombra init`.
fn init_dir() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    sombra_bin()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success();
    temp_dir
}

#[test]
fn test_version_command() {
    sombra_bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sombra"));
}

#[test]
fn test_help_command() {
    sombra_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_invalid_command() {
    sombra_bin()
        .arg("comando-que-nao-existe")
        .assert()
        .failure();
}

#[test]
fn test_verbose_flag() {
    sombra_bin().arg("-v").arg("version").assert().success();
}

#[test]
fn test_quiet_flag() {
    sombra_bin().arg("-q").arg("version").assert().success();
}

#[test]
fn test_init_creates_config_and_data_files() {
    let temp_dir = init_dir();

    let config_path = temp_dir.path().join("sombra.toml");
    assert!(config_path.exists(), "Config file was not created");

    let content = std::fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(content.contains("[general]"));
    assert!(content.contains("[store]"));
    assert!(content.contains("[matcher]"));

    assert!(temp_dir.path().join(".sombra/respostas.txt").exists());
    assert!(temp_dir.path().join(".sombra/termos_banidos.txt").exists());
    assert!(temp_dir.path().join(".gitignore").exists());
}

#[test]
fn test_init_is_idempotent() {
    let temp_dir = init_dir();

    // Segunda execução não falha nem sobrescreve
    sombra_bin()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("já existe"));
}

#[test]
fn test_ask_answers_seeded_question() {
    let temp_dir = init_dir();

    // "olá" da base inicial está contida na consulta: estágio exato
    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("ask")
        .arg("olá tudo bem")
        .assert()
        .success()
        .stdout(predicate::str::contains("Em que posso ajudar"));
}

#[test]
fn test_ask_fallback_for_unknown_question() {
    let temp_dir = init_dir();

    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("ask")
        .arg("zzzz sem resposta conhecida")
        .assert()
        .success()
        .stdout(predicate::str::contains("não entendi"));
}

#[test]
fn test_ask_without_data_files_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    // Sem init não há base nem termos banidos: inicialização é fatal
    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("ask")
        .arg("olá")
        .assert()
        .failure();
}

#[test]
fn test_import_csv_updates_store() {
    let temp_dir = init_dir();

    let csv_path = temp_dir.path().join("extra.csv");
    std::fs::write(&csv_path, "prazo,Dez dias úteis.\n").unwrap();

    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("import")
        .arg("extra.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("mescladas"));

    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("ask")
        .arg("qual o prazo de entrega")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dez dias úteis."));
}

#[test]
fn test_import_unsupported_format() {
    let temp_dir = init_dir();

    let doc_path = temp_dir.path().join("nota.docx");
    std::fs::write(&doc_path, "qualquer coisa").unwrap();

    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("import")
        .arg("nota.docx")
        .assert()
        .success()
        .stdout(predicate::str::contains("não suportado"));
}

#[test]
fn test_entries_lists_seeded_pairs() {
    let temp_dir = init_dir();

    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("entries")
        .assert()
        .success()
        .stdout(predicate::str::contains("olá"))
        .stdout(predicate::str::contains("tchau"));
}

#[test]
fn test_entries_respects_limit() {
    let temp_dir = init_dir();

    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("entries")
        .arg("--limit")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 de 4 par(es)"));
}

#[test]
fn test_doctor_reports_data_files() {
    let temp_dir = init_dir();

    sombra_bin()
        .current_dir(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base de respostas"))
        .stdout(predicate::str::contains("Termos banidos"));
}
