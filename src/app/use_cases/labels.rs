//! Use-Case-Funktionen für die Label-Registry.

use crate::app::AppState;
use crate::app::LabelKind;

/// Legt einen benutzerdefinierten Entity- oder Relations-Typ an.
///
/// Leere oder bereits bekannte Labels werden abgelehnt und gemeldet.
pub fn add_custom_label(state: &mut AppState, kind: LabelKind, label: &str) {
    let result = match kind {
        LabelKind::Entity => state.settings.add_custom_entity_label(label),
        LabelKind::Relation => state.settings.add_custom_relation_label(label),
    };
    match result {
        Ok(label) => {
            log::info!("Neuer {:?}-Typ: {}", kind, label);
            state.ui.set_status(format!("Neuer Typ angelegt: {label}"));
        }
        Err(e) => {
            log::warn!("Label '{}' abgelehnt: {}", label, e);
            state.ui.set_status(format!("Label abgelehnt: {e}"));
        }
    }
}
