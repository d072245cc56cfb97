//! Handler für die Entity-Selektion.

use crate::app::AppState;
use crate::core::Entity;

/// Selektiert die Entity bzw. hebt ihre Selektion auf.
pub fn toggle_entity(state: &mut AppState, entity: Entity) {
    state.selection.toggle(entity);
    match &state.selection.selected_entity {
        Some(entity) => state.ui.set_status(format!("Selektiert: {entity}")),
        None => state.ui.status_message = None,
    }
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.selection.clear();
}
