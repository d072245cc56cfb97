//! Handler für Editing-Operationen (Entitäten, Relationen, Labels).

use crate::app::use_cases;
use crate::app::{AppState, LabelKind};
use crate::core::{Entity, Relation, Span};

/// Legt eine Entity im aktiven Dokument an.
pub fn add_entity(state: &mut AppState, span: Span, label: &str) -> anyhow::Result<()> {
    use_cases::annotation::add_entity(state, span, label)?;
    Ok(())
}

/// Entfernt eine Entity inkl. Kaskade.
pub fn remove_entity(state: &mut AppState, entity: Entity) -> anyhow::Result<()> {
    use_cases::annotation::remove_entity(state, entity)?;
    Ok(())
}

/// Legt eine Relation im aktiven Dokument an.
pub fn add_relation(
    state: &mut AppState,
    source: Span,
    target: Span,
    label: &str,
) -> anyhow::Result<()> {
    use_cases::annotation::add_relation(state, source, target, label)?;
    Ok(())
}

/// Entfernt eine Relation.
pub fn remove_relation(state: &mut AppState, relation: Relation) -> anyhow::Result<()> {
    use_cases::annotation::remove_relation(state, relation)?;
    Ok(())
}

/// Löscht die selektierte Entity.
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::annotation::delete_selected_entity(state)?;
    Ok(())
}

/// Legt einen neuen Entity-Typ an.
pub fn add_custom_entity_label(state: &mut AppState, label: &str) {
    use_cases::labels::add_custom_label(state, LabelKind::Entity, label);
}

/// Legt einen neuen Relations-Typ an.
pub fn add_custom_relation_label(state: &mut AppState, label: &str) {
    use_cases::labels::add_custom_label(state, LabelKind::Relation, label);
}
