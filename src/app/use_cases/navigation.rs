//! Use-Case-Funktionen für die Navigation zwischen Dokumenten.

use crate::app::AppState;

/// Aktiviert das Dokument an `index`. Ungültige Indizes werden gemeldet, nicht ausgeführt.
pub fn goto_document(state: &mut AppState, index: usize) {
    if index == state.documents.active_index() && !state.documents.is_empty() {
        return;
    }
    activate_document(state, index);
}

/// Springt relativ, geklemmt auf den gültigen Bereich.
pub fn jump_documents(state: &mut AppState, delta: isize) {
    let before = state.documents.active_index();
    let after = state.documents.jump(delta);
    if before != after {
        log::debug!("Dokument {} → {}", before + 1, after + 1);
        reset_document_view(state);
    }
}

/// Setzt das aktive Dokument und verwirft dokumentbezogenen UI-Zustand.
pub fn activate_document(state: &mut AppState, index: usize) {
    match state.documents.goto(index) {
        Ok(()) => {
            log::debug!("Dokument {} aktiviert", index + 1);
            reset_document_view(state);
        }
        Err(e) => {
            log::warn!("Navigation abgelehnt: {}", e);
            state.ui.set_status(format!("Navigation abgelehnt: {e}"));
        }
    }
}

/// Scroll, Gesten und Selektion gehören zum Dokument und werden zurückgesetzt.
pub fn reset_document_view(state: &mut AppState) {
    state.view.scroll = 0.0;
    state.gestures.reset();
    state.selection.clear();
    state.ui.label_input.clear();
}
