//! Use-Case-Funktionen für Mutationen am Annotationsmodell.
//!
//! Jede Mutation läuft als [`HistoryCommand`] über die History, damit sie
//! rückgängig gemacht werden kann.

use crate::app::history::HistoryCommand;
use crate::app::AppState;
use crate::core::{AnnotationError, Entity, Relation, Span};

/// Wendet einen Befehl über die History an.
///
/// Bei Erfolg wird der Store als geändert markiert und die Selektion
/// abgeglichen. Gibt `false` zurück, wenn der Befehl nichts geändert hat.
pub fn apply_command(state: &mut AppState, command: HistoryCommand) -> anyhow::Result<bool> {
    let pending = command.describe();
    let changed = state.history.push(&mut state.documents, command)?;
    if changed {
        state.documents.mark_dirty();
        sync_selection(state);
        // Beschreibung nach dem Anwenden enthält die Kaskade
        let applied = state
            .history
            .undo_entries()
            .last()
            .map_or(pending, |command| command.describe());
        state.ui.set_status(applied);
        super::session::autosave_history(state);
    } else {
        state.ui.set_status(format!("Bereits vorhanden: {pending}"));
    }
    Ok(changed)
}

/// Legt eine Entity im aktiven Dokument an und registriert ihr Label.
pub fn add_entity(state: &mut AppState, span: Span, label: &str) -> anyhow::Result<bool> {
    let document = active_ref(state)?;
    let entity = Entity {
        span,
        label: label.to_string(),
    };
    let changed = apply_command(state, HistoryCommand::AddEntity { document, entity })?;
    if changed {
        state.settings.register_entity_label(label);
    }
    Ok(changed)
}

/// Entfernt eine Entity samt aller Relationen mit passendem Endpunkt.
pub fn remove_entity(state: &mut AppState, entity: Entity) -> anyhow::Result<bool> {
    let document = active_ref(state)?;
    apply_command(state, HistoryCommand::remove_entity(document, entity))
}

/// Legt eine Relation im aktiven Dokument an und registriert ihr Label.
pub fn add_relation(
    state: &mut AppState,
    source: Span,
    target: Span,
    label: &str,
) -> anyhow::Result<bool> {
    let document = active_ref(state)?;
    let relation = Relation::new(source, target, label);
    let changed = apply_command(state, HistoryCommand::AddRelation { document, relation })?;
    if changed {
        state.settings.register_relation_label(label);
    }
    Ok(changed)
}

/// Entfernt eine Relation aus dem aktiven Dokument.
pub fn remove_relation(state: &mut AppState, relation: Relation) -> anyhow::Result<bool> {
    let document = active_ref(state)?;
    apply_command(state, HistoryCommand::remove_relation(document, relation))
}

/// Entfernt die per Klick selektierte Entity.
pub fn delete_selected_entity(state: &mut AppState) -> anyhow::Result<bool> {
    let Some(entity) = state.selection.selected_entity.take() else {
        log::debug!("Keine Entity selektiert, nichts zu löschen");
        return Ok(false);
    };
    remove_entity(state, entity)
}

/// Hebt die Selektion auf, wenn die selektierte Entity im aktiven Dokument fehlt.
pub fn sync_selection(state: &mut AppState) {
    let still_present = match (&state.selection.selected_entity, state.documents.active()) {
        (Some(entity), Some(document)) => document.has_entity(entity),
        (None, _) => return,
        (Some(_), None) => false,
    };
    if !still_present {
        state.selection.clear();
    }
}

fn active_ref(state: &AppState) -> Result<crate::app::history::DocumentRef, AnnotationError> {
    state
        .active_document_ref()
        .ok_or(AnnotationError::NoDocument(state.documents.active_index()))
}
