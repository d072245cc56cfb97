//! Use-Case-Funktionen für Undo/Redo.

use crate::app::history::{DocumentRef, HistoryError};
use crate::app::AppState;

/// Macht den jüngsten Befehl rückgängig.
///
/// Ein leerer Stack ist kein Fehler, sondern wird in der Statuszeile gemeldet.
pub fn undo(state: &mut AppState) -> anyhow::Result<()> {
    match state.history.undo(&mut state.documents) {
        Ok(target) => {
            after_step(state, target);
            state.ui.set_status("Rückgängig gemacht");
            Ok(())
        }
        Err(HistoryError::NothingToUndo) => {
            log::debug!("Undo: nichts zu tun");
            state.ui.set_status("Nichts rückgängig zu machen");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Wiederholt den zuletzt rückgängig gemachten Befehl.
pub fn redo(state: &mut AppState) -> anyhow::Result<()> {
    match state.history.redo(&mut state.documents) {
        Ok(target) => {
            after_step(state, target);
            state.ui.set_status("Wiederholt");
            Ok(())
        }
        Err(HistoryError::NothingToRedo) => {
            log::debug!("Redo: nichts zu tun");
            state.ui.set_status("Nichts zu wiederholen");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Zeigt das betroffene Dokument an, damit die Änderung sichtbar ist.
fn after_step(state: &mut AppState, target: DocumentRef) {
    state.documents.mark_dirty();
    if target.index != state.documents.active_index() {
        super::navigation::activate_document(state, target.index);
    }
    super::annotation::sync_selection(state);
}
