//! Use-Case-Funktionen für die Gesten-Automaten.
//!
//! Die Automaten lesen nur Layout und Modell. Abgeschlossene Gesten werden
//! hier über [`super::annotation::apply_command`] angewendet.

use crate::app::gestures::{Gesture, GestureOutcome};
use crate::app::{AppState, LabelKind};
use glam::Vec2;

/// Startet eine Span-Auswahl am Token unter dem Pointer.
pub fn begin_token_selection(state: &mut AppState, pos: Vec2) {
    state.refresh_layout();
    let outcome = state
        .gestures
        .selection
        .pointer_down(state.view.layout(), pos);
    report(state, "Span-Auswahl", &outcome);
}

/// Verfolgt den Pointer während der Span-Auswahl.
pub fn update_token_selection(state: &mut AppState, pos: Vec2) {
    state.refresh_layout();
    state
        .gestures
        .selection
        .pointer_move(state.view.layout(), pos);
}

/// Schließt die Span-Auswahl ab und öffnet die Typ-Auswahl.
pub fn finish_token_selection(state: &mut AppState, pos: Vec2) {
    state.refresh_layout();
    let outcome = state
        .gestures
        .selection
        .pointer_up(state.view.layout(), pos);
    if outcome == GestureOutcome::AwaitingLabel {
        state.ui.label_input.clear();
    }
    report(state, "Span-Auswahl", &outcome);
}

/// Wählt die Entity unter dem Pointer als Quelle einer Relation.
pub fn begin_relation(state: &mut AppState, pos: Vec2) {
    state.refresh_layout();
    let Some(document) = state.documents.active() else {
        return;
    };
    let outcome = state
        .gestures
        .relation
        .pointer_down(state.view.layout(), document, pos);
    report(state, "Relation", &outcome);
}

/// Verfolgt den Pointer für die Gummiband-Vorschau.
pub fn update_relation(state: &mut AppState, pos: Vec2) {
    state.gestures.relation.pointer_move(pos);
}

/// Legt das Ziel der Relation fest oder bricht ab.
pub fn finish_relation(state: &mut AppState, pos: Vec2) {
    state.refresh_layout();
    let Some(document) = state.documents.active() else {
        state.gestures.relation.reset();
        return;
    };
    let outcome = state
        .gestures
        .relation
        .pointer_up(state.view.layout(), document, pos);
    if outcome == GestureOutcome::AwaitingLabel {
        state.ui.label_input.clear();
    }
    report(state, "Relation", &outcome);
}

/// Schließt die wartende Geste mit dem gewählten Typ ab.
///
/// Ein leeres Label lässt die Typ-Auswahl offen.
pub fn confirm_label(state: &mut AppState, label: &str) -> anyhow::Result<()> {
    let label = label.trim();
    if label.is_empty() {
        state.ui.set_status("Bitte einen Typ wählen");
        return Ok(());
    }
    let Some(kind) = state.gestures.pending_label() else {
        log::debug!("Kein Gesten-Schritt wartet auf ein Label");
        return Ok(());
    };
    let Some(document) = state.active_document_ref() else {
        state.gestures.reset();
        return Ok(());
    };

    let outcome = match kind {
        LabelKind::Entity => state.gestures.selection.confirm(document, label),
        LabelKind::Relation => state.gestures.relation.confirm(document, label),
    };
    state.ui.label_input.clear();

    let GestureOutcome::Committed(command) = outcome else {
        return Ok(());
    };
    let changed = super::annotation::apply_command(state, command)?;
    if changed {
        match kind {
            LabelKind::Entity => state.settings.register_entity_label(label),
            LabelKind::Relation => state.settings.register_relation_label(label),
        };
    }
    Ok(())
}

/// Bricht laufende Gesten ohne Mutation ab (Escape).
pub fn cancel(state: &mut AppState) {
    let selection = state.gestures.selection.cancel();
    let relation = state.gestures.relation.cancel();
    if selection == GestureOutcome::Cancelled || relation == GestureOutcome::Cancelled {
        log::debug!("Geste abgebrochen");
        state.ui.set_status("Abgebrochen");
    }
    state.ui.label_input.clear();
}

fn report(state: &mut AppState, gesture: &str, outcome: &GestureOutcome) {
    match outcome {
        GestureOutcome::AwaitingLabel => {
            log::debug!("{}: Typ-Auswahl geöffnet", gesture);
        }
        GestureOutcome::Cancelled => {
            state.ui.set_status(format!("{gesture} abgebrochen"));
        }
        GestureOutcome::Ignored | GestureOutcome::Changed | GestureOutcome::Committed(_) => {}
    }
}
