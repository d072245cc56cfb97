use std::path::PathBuf;
use token_span_annotator::app::use_cases::session;
use token_span_annotator::shared::HistoryScope;
use token_span_annotator::{
    AppCommand, AppController, AppIntent, AppState, Entity, SessionPaths, Span,
};

use super::{send, temp_dir, test_metrics, write_file};

const EXAMPLE_LINE: &str = r#"{"doc_key":"d1","sentences":[["John","works","at","Google"]],"ner":[[[0,0,"PERSON"],[3,3,"ORG"]]],"relations":[[[0,0,3,3,"WORKS_AT"]]]}"#;

fn fixture() -> &'static str {
    include_str!("../fixtures/scierc_sample.jsonl")
}

fn load(controller: &mut AppController, state: &mut AppState, path: PathBuf) {
    send(controller, state, AppIntent::FileSelected { path });
    state.view.viewport_size = [400.0, 300.0];
    state.view.metrics = test_metrics();
}

#[test]
fn test_load_fixture_skips_broken_line_and_collects_warnings() {
    let dir = temp_dir("load_fixture");
    let path = write_file(&dir, "sample.jsonl", fixture());
    let mut controller = AppController::new();
    let mut state = AppState::new();

    load(&mut controller, &mut state, path.clone());

    assert_eq!(state.documents.len(), 3);
    assert_eq!(state.documents.active_index(), 0);
    assert_eq!(state.documents.source_path.as_deref(), Some(path.as_path()));
    assert!(state.ui.show_load_warnings);
    assert!(state.ui.load_warnings.iter().any(|w| w.line == 3));
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("3 Dokumente geladen, 1 Zeilen übersprungen")
    );
    assert_eq!(state.recent_files.most_recent(), Some(path.as_path()));
    assert!(state.settings.known_entities.iter().any(|l| l == "PERSON"));
    assert!(state.settings.known_relations.iter().any(|l| l == "WORKS_AT"));

    let keys: Vec<&str> = state
        .documents
        .documents()
        .iter()
        .map(|d| d.key.as_str())
        .collect();
    assert_eq!(keys, ["d1", "P05-1010", "doc_3"]);
    assert!(!state.documents.is_dirty());
}

#[test]
fn test_remove_undo_save_reproduces_original_line() {
    let dir = temp_dir("example_roundtrip");
    let path = write_file(&dir, "d1.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let mut controller = AppController::new();
    let mut state = AppState::new();
    load(&mut controller, &mut state, path.clone());

    send(
        &mut controller,
        &mut state,
        AppIntent::RemoveEntityRequested {
            entity: Entity::new(0, 0, "PERSON"),
        },
    );
    assert_eq!(state.relation_count(), 0, "Relation kaskadiert mit");

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.entity_count(), 2);
    assert_eq!(state.relation_count(), 1);

    send(&mut controller, &mut state, AppIntent::SaveRequested);

    let saved = std::fs::read_to_string(&path).expect("Datei sollte lesbar sein");
    assert_eq!(saved, format!("{EXAMPLE_LINE}\n"));
    assert!(!state.documents.is_dirty());
}

#[test]
fn test_save_as_switches_current_path() {
    let dir = temp_dir("save_as");
    let original = write_file(&dir, "in.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let target = dir.join("out.jsonl");
    let mut controller = AppController::new();
    let mut state = AppState::new();
    load(&mut controller, &mut state, original);

    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 2),
            label: "ROLE".to_string(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::SaveFilePathSelected {
            path: target.clone(),
        },
    );

    assert_eq!(state.documents.source_path.as_deref(), Some(target.as_path()));
    let saved = std::fs::read_to_string(&target).expect("Datei sollte geschrieben sein");
    assert!(saved.contains(r#"[1,2,"ROLE"]"#));
    assert_eq!(state.recent_files.most_recent(), Some(target.as_path()));
}

#[test]
fn test_failed_save_keeps_state_and_dirty_flag() {
    let dir = temp_dir("save_failure");
    let path = write_file(&dir, "d1.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let mut controller = AppController::new();
    let mut state = AppState::new();
    load(&mut controller, &mut state, path.clone());
    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 2),
            label: "ROLE".to_string(),
        },
    );
    assert!(state.documents.is_dirty());

    let missing_parent = dir.join("no_such_dir").join("out.jsonl");
    let result = controller.handle_command(
        &mut state,
        AppCommand::SaveFile {
            path: Some(missing_parent),
        },
    );
    assert!(result.is_err());

    // aktueller Pfad zeigt jetzt auf ein Verzeichnis
    std::fs::remove_file(&path).expect("Datei sollte löschbar sein");
    std::fs::create_dir(&path).expect("Verzeichnis sollte anlegbar sein");
    let result = controller.handle_command(&mut state, AppCommand::SaveFile { path: None });
    assert!(result.is_err());

    assert!(state.documents.is_dirty());
    assert_eq!(state.documents.source_path.as_deref(), Some(path.as_path()));
    assert_eq!(state.recent_files.most_recent(), Some(path.as_path()));
    let document = state.documents.active().expect("Dokument geladen");
    assert_eq!(document.entity_count(), 3);
    assert!(document.has_entity(&Entity::new(1, 2, "ROLE")));
    assert!(document.has_entity(&Entity::new(0, 0, "PERSON")));
    assert_eq!(document.relation_count(), 1);
}

#[test]
fn test_load_missing_file_keeps_previous_documents() {
    let dir = temp_dir("missing");
    let path = write_file(&dir, "ok.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let mut controller = AppController::new();
    let mut state = AppState::new();
    load(&mut controller, &mut state, path.clone());

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: dir.join("does_not_exist.jsonl"),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.documents.len(), 1);
    assert_eq!(state.documents.source_path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_per_file_history_is_cleared_on_other_file() {
    let dir = temp_dir("per_file_history");
    let first = write_file(&dir, "a.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let second = write_file(&dir, "b.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.settings.history_scope = HistoryScope::PerFile;
    load(&mut controller, &mut state, first);
    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 1),
            label: "ACTION".to_string(),
        },
    );
    assert!(state.can_undo());

    load(&mut controller, &mut state, second);

    assert!(!state.can_undo());
}

#[test]
fn test_session_history_survives_file_switch() {
    let dir = temp_dir("session_history");
    let first = write_file(&dir, "a.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let second = write_file(&dir, "b.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let mut controller = AppController::new();
    let mut state = AppState::new();
    load(&mut controller, &mut state, first);
    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 1),
            label: "ACTION".to_string(),
        },
    );

    load(&mut controller, &mut state, second);

    assert!(state.can_undo());
}

#[test]
fn test_persisted_session_is_restored_on_next_start() {
    let dir = temp_dir("session_restore");
    let data = write_file(&dir, "data.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let paths = SessionPaths::in_dir(&dir);
    let mut controller = AppController::new();
    let mut state = session::load_session(paths.clone());
    state.settings.history_autosave_every = 0;
    load(&mut controller, &mut state, data.clone());
    send(
        &mut controller,
        &mut state,
        AppIntent::AddCustomEntityLabelRequested {
            label: "Gene".to_string(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 2),
            label: "Gene".to_string(),
        },
    );
    assert!(!paths.history.exists(), "Autosave ist deaktiviert");

    controller
        .handle_command(&mut state, AppCommand::PersistSession)
        .expect("PersistSession sollte nicht fehlschlagen");

    let restored = session::load_session(paths);
    assert_eq!(restored.history.undo_entries().len(), 1);
    assert_eq!(restored.history.source_path.as_deref(), Some(data.as_path()));
    assert_eq!(restored.recent_files.most_recent(), Some(data.as_path()));
    assert!(restored.settings.custom_entities.iter().any(|l| l == "Gene"));
    assert_eq!(restored.settings.history_autosave_every, 0);
}

#[test]
fn test_history_autosave_after_configured_commands() {
    let dir = temp_dir("autosave");
    let data = write_file(&dir, "data.jsonl", &format!("{EXAMPLE_LINE}\n"));
    let paths = SessionPaths::in_dir(&dir);
    let mut controller = AppController::new();
    let mut state = session::load_session(paths.clone());
    state.settings.history_autosave_every = 2;
    load(&mut controller, &mut state, data);

    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 1),
            label: "A".to_string(),
        },
    );
    assert!(!paths.history.exists());

    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(2, 2),
            label: "B".to_string(),
        },
    );
    assert!(paths.history.exists());
    assert_eq!(state.history.recorded_since_persist(), 0);
}
