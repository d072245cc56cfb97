use glam::Vec2;
use token_span_annotator::app::LabelKind;
use token_span_annotator::{AppController, AppIntent, Entity, Relation, Span};

use super::{john_document, make_state, send};

#[test]
fn test_drag_over_tokens_and_choose_label_adds_entity() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);

    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(70.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(120.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryReleased {
            pos: Vec2::new(120.0, 15.0),
        },
    );

    assert_eq!(state.gestures.pending_label(), Some(LabelKind::Entity));
    assert_eq!(state.entity_count(), 2, "Vor der Typ-Auswahl keine Mutation");

    send(
        &mut controller,
        &mut state,
        AppIntent::LabelChosen {
            label: "ROLE".to_string(),
        },
    );

    assert!(state.gestures.is_idle());
    assert!(state
        .active_document()
        .expect("Dokument geladen")
        .has_entity(&Entity::new(1, 2, "ROLE")));
    assert!(state.settings.known_entities.iter().any(|l| l == "ROLE"));
    assert!(state.documents.is_dirty());
    assert!(state.can_undo());
}

#[test]
fn test_drag_backwards_normalizes_span() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);

    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(120.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryReleased {
            pos: Vec2::new(70.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::LabelChosen {
            label: "ROLE".to_string(),
        },
    );

    let document = state.active_document().expect("Dokument geladen");
    assert!(document.has_entity(&Entity::new(1, 2, "ROLE")));
}

#[test]
fn test_cancel_while_awaiting_label_leaves_model_unchanged() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);

    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(70.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryReleased {
            pos: Vec2::new(70.0, 15.0),
        },
    );
    assert!(state.gestures.pending_label().is_some());

    send(&mut controller, &mut state, AppIntent::CancelRequested);

    assert!(state.gestures.is_idle());
    assert_eq!(state.entity_count(), 2);
    assert!(!state.can_undo());
    assert!(!state.documents.is_dirty());
}

#[test]
fn test_empty_label_keeps_chooser_open() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);

    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(70.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PrimaryReleased {
            pos: Vec2::new(70.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::LabelChosen {
            label: "   ".to_string(),
        },
    );

    assert_eq!(state.gestures.pending_label(), Some(LabelKind::Entity));
    assert_eq!(state.entity_count(), 2);
}

#[test]
fn test_secondary_drag_between_entities_adds_relation() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);

    send(
        &mut controller,
        &mut state,
        AppIntent::SecondaryPressed {
            pos: Vec2::new(20.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(100.0, 40.0),
        },
    );
    assert!(controller
        .build_render_scene(&state)
        .preview_line
        .is_some());

    send(
        &mut controller,
        &mut state,
        AppIntent::SecondaryReleased {
            pos: Vec2::new(150.0, 15.0),
        },
    );
    assert_eq!(state.gestures.pending_label(), Some(LabelKind::Relation));

    send(
        &mut controller,
        &mut state,
        AppIntent::LabelChosen {
            label: "WORKS_AT".to_string(),
        },
    );

    let relation = Relation::new(Span::new(0, 0), Span::new(3, 3), "WORKS_AT");
    assert!(state
        .active_document()
        .expect("Dokument geladen")
        .has_relation(&relation));
    assert!(state.gestures.is_idle());
}

#[test]
fn test_secondary_release_on_source_cancels_relation() {
    let mut controller = AppController::new();
    let mut state = make_state(vec![john_document()]);

    send(
        &mut controller,
        &mut state,
        AppIntent::SecondaryPressed {
            pos: Vec2::new(20.0, 15.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::SecondaryReleased {
            pos: Vec2::new(40.0, 15.0),
        },
    );

    assert!(state.gestures.is_idle());
    assert_eq!(state.relation_count(), 0);
}

#[test]
fn test_click_on_entity_selects_and_delete_removes_it() {
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
        AppIntent::PrimaryPressed {
            pos: Vec2::new(150.0, 15.0),
        },
    );
    assert_eq!(
        state.selection.selected_entity,
        Some(Entity::new(3, 3, "ORG"))
    );

    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert!(state.selection.selected_entity.is_none());
    assert_eq!(state.entity_count(), 1);
    assert_eq!(state.relation_count(), 0, "Relation kaskadiert mit");
}
