use token_span_annotator::{AppController, AppIntent, Document, Entity, Span};

use super::{john_document, make_state, send};

fn plain_document(key: &str, tokens: &[&str]) -> Document {
    Document::new(key, vec![tokens.iter().map(|t| t.to_string()).collect()])
}

fn three_documents() -> Vec<Document> {
    vec![
        john_document(),
        plain_document("d2", &["Paris", "is", "nice"]),
        plain_document("d3", &["Nothing", "here"]),
    ]
}

#[test]
fn test_undo_and_redo_add_entity() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);
    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 2),
            label: "ROLE".to_string(),
        },
    );
    assert_eq!(state.entity_count(), 3);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.entity_count(), 2);
    assert!(state.can_redo());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.entity_count(), 3);
    assert!(!state.can_redo());
}

#[test]
fn test_new_command_clears_redo() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);
    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 1),
            label: "A".to_string(),
        },
    );
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(2, 2),
            label: "B".to_string(),
        },
    );

    assert!(!state.can_redo());
}

#[test]
fn test_undo_on_empty_history_reports_status() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_eq!(state.entity_count(), 2);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Nichts rückgängig zu machen")
    );
}

#[test]
fn test_remove_entity_cascade_undo_restores_both() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);
    send(
        &mut controller,
        &mut state,
        AppIntent::AddRelationRequested {
            source: Span::new(0, 0),
            target: Span::new(3, 3),
            label: "WORKS_AT".to_string(),
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::RemoveEntityRequested {
            entity: Entity::new(0, 0, "PERSON"),
        },
    );
    assert_eq!(state.entity_count(), 1);
    assert_eq!(state.relation_count(), 0);

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    let document = state.active_document().expect("Dokument geladen");
    let labels: Vec<&str> = document.entities().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["PERSON", "ORG"], "Reihenfolge bleibt erhalten");
    assert_eq!(state.relation_count(), 1);
}

#[test]
fn test_undo_switches_to_document_of_command() {
    let mut controller = AppController::new();
    let mut state = make_state(three_documents());
    send(
        &mut controller,
        &mut state,
        AppIntent::AddEntityRequested {
            span: Span::new(1, 1),
            label: "ACTION".to_string(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::GotoDocumentRequested { index: 2 },
    );
    assert_eq!(state.documents.active_index(), 2);

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_eq!(state.documents.active_index(), 0);
    assert_eq!(state.entity_count(), 2);
}

#[test]
fn test_jump_is_clamped_to_document_range() {
    let mut controller = AppController::new();
    let mut state = make_state(three_documents());

    send(
        &mut controller,
        &mut state,
        AppIntent::JumpDocumentsRequested { delta: 10 },
    );
    assert_eq!(state.documents.active_index(), 2);

    send(
        &mut controller,
        &mut state,
        AppIntent::JumpDocumentsRequested { delta: -1 },
    );
    assert_eq!(state.documents.active_index(), 1);

    send(
        &mut controller,
        &mut state,
        AppIntent::JumpDocumentsRequested { delta: -10 },
    );
    assert_eq!(state.documents.active_index(), 0);
}

#[test]
fn test_first_and_last_document() {
    let mut controller = AppController::new();
    let mut state = make_state(three_documents());

    send(&mut controller, &mut state, AppIntent::LastDocumentRequested);
    assert_eq!(state.documents.active_index(), 2);
    assert_eq!(
        state.active_document().map(|d| d.key.as_str()),
        Some("d3")
    );

    send(&mut controller, &mut state, AppIntent::FirstDocumentRequested);
    assert_eq!(state.documents.active_index(), 0);
}

#[test]
fn test_goto_out_of_range_is_rejected() {
    let mut controller = AppController::new();
    let mut state = make_state(three_documents());

    send(
        &mut controller,
        &mut state,
        AppIntent::GotoDocumentRequested { index: 7 },
    );

    assert_eq!(state.documents.active_index(), 0);
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.starts_with("Navigation abgelehnt")));
}

#[test]
fn test_navigation_resets_selection_and_gestures() {
    let mut controller = AppController::new();
    let mut state = make_state(three_documents());
    state.selection.toggle(Entity::new(0, 0, "PERSON"));

    send(
        &mut controller,
        &mut state,
        AppIntent::JumpDocumentsRequested { delta: 1 },
    );

    assert!(state.selection.selected_entity.is_none());
    assert!(state.gestures.is_idle());
    assert_eq!(state.view.scroll, 0.0);
}

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut controller = AppController::new();
    let long_text: Vec<String> = (0..400).map(|i| format!("tok{i}")).collect();
    let mut state = make_state(vec![Document::new("long", vec![long_text])]);

    send(
        &mut controller,
        &mut state,
        AppIntent::ScrollRequested { delta: -500.0 },
    );
    assert_eq!(state.view.scroll, 0.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::ScrollRequested { delta: 1.0e6 },
    );
    let max_scroll = state.view.layout().max_scroll();
    assert!(max_scroll > 0.0);
    assert!((state.view.scroll - max_scroll).abs() < 1e-3);
}
