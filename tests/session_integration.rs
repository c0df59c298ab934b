//! Testes de integração do controlador de sessão contra arquivos reais.

use sombra::filter::ModerationFilter;
use sombra::matcher::DEFAULT_FUZZY_THRESHOLD;
use sombra::session::{
    Reply, SessionCommand, SessionController, FALLBACK_MESSAGE, REFUSAL_MESSAGE,
};
use sombra::store::Store;
use tempfile::TempDir;

fn create_session(entries: &str, banned: &str) -> (SessionController, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = dir.path().join("respostas.txt");
    let banned_path = dir.path().join("termos_banidos.txt");
    std::fs::write(&store_path, entries).unwrap();
    std::fs::write(&banned_path, banned).unwrap();

    let store = Store::open(&store_path).unwrap();
    let filter = ModerationFilter::load(&banned_path).unwrap();
    let controller = SessionController::new(store, filter, DEFAULT_FUZZY_THRESHOLD);
    (controller, dir)
}

fn submit(controller: &mut SessionController, text: &str) -> Reply {
    controller
        .handle(SessionCommand::Submit(text.to_string()))
        .unwrap()
}

#[test]
fn test_exact_match_scenario() {
    let (mut controller, _dir) = create_session("hello|hi there\n", "");

    match submit(&mut controller, "hello friend") {
        Reply::Answered { response, .. } => assert_eq!(response, "hi there"),
        other => panic!("esperava Answered, veio {:?}", other),
    }
}

#[test]
fn test_fuzzy_and_fallback_scenario() {
    let (mut controller, _dir) = create_session("hello|hi there\n", "");

    // "helo" resolve por fuzzy
    match submit(&mut controller, "helo") {
        Reply::Answered { response, .. } => assert_eq!(response, "hi there"),
        other => panic!("esperava Answered, veio {:?}", other),
    }

    // "xyz" fica abaixo do limiar: mensagem de fallback
    match submit(&mut controller, "xyz") {
        Reply::Answered { response, .. } => assert_eq!(response, FALLBACK_MESSAGE),
        other => panic!("esperava Answered, veio {:?}", other),
    }
}

#[test]
fn test_refusal_scenario() {
    let (mut controller, _dir) = create_session("hello|hi there\n", "badword\n");

    match submit(&mut controller, "this is a badword test") {
        Reply::Refused { message } => assert_eq!(message, REFUSAL_MESSAGE),
        other => panic!("esperava Refused, veio {:?}", other),
    }
}

#[test]
fn test_correction_reaches_disk() {
    let (mut controller, dir) = create_session("hello|hi there\n", "");

    submit(&mut controller, "hello");
    controller.handle(SessionCommand::RequestFeedback).unwrap();
    controller
        .handle(SessionCommand::Judge { helpful: false })
        .unwrap();
    let reply = controller
        .handle(SessionCommand::Correct(Some("new answer".to_string())))
        .unwrap();
    assert_eq!(reply, Reply::CorrectionSaved);

    // O arquivo em disco reflete a correção assim que a chamada retorna
    let reloaded = Store::open(dir.path().join("respostas.txt")).unwrap();
    assert_eq!(reloaded.get("hello"), Some("new answer"));
}

#[test]
fn test_delimited_upload_uses_store_parsing_rule() {
    let (mut controller, dir) = create_session("hello|hi there\n", "");

    let upload_path = dir.path().join("extra.txt");
    std::fs::write(&upload_path, "Prazo|Dez dias úteis.\nlinha sem delimitador\n").unwrap();

    let reply = controller
        .handle(SessionCommand::Upload(upload_path))
        .unwrap();
    assert!(matches!(reply, Reply::Imported { entries: 1, .. }));

    let reloaded = Store::open(dir.path().join("respostas.txt")).unwrap();
    assert_eq!(reloaded.get("prazo"), Some("Dez dias úteis."));
    assert_eq!(reloaded.get("hello"), Some("hi there"));
}

#[test]
fn test_failed_document_upload_leaves_disk_unchanged() {
    let (mut controller, dir) = create_session("hello|hi there\n", "");
    let store_path = dir.path().join("respostas.txt");
    let before = std::fs::read_to_string(&store_path).unwrap();

    let pdf_path = dir.path().join("quebrado.pdf");
    std::fs::write(&pdf_path, b"isto nao e um pdf").unwrap();

    let result = controller.handle(SessionCommand::Upload(pdf_path));
    assert!(result.is_err());

    let after = std::fs::read_to_string(&store_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_store_and_disk_converge_after_each_mutation() {
    let (mut controller, dir) = create_session("hello|hi there\n", "");
    let store_path = dir.path().join("respostas.txt");

    let csv_path = dir.path().join("extra.csv");
    std::fs::write(&csv_path, "prazo,Dez dias úteis.\nhorário,Das 9h às 18h.\n").unwrap();
    controller.handle(SessionCommand::Upload(csv_path)).unwrap();

    let reloaded = Store::open(&store_path).unwrap();
    let in_memory: Vec<(String, String)> = controller
        .store()
        .iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect();
    let on_disk: Vec<(String, String)> = reloaded
        .iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect();
    assert_eq!(in_memory, on_disk);
}
