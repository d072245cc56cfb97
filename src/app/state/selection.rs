//! Auswahlzustand: selektierte Entity und laufende Gesten.

use crate::app::gestures::{Gesture, RelationBuilder, SelectionController};
use crate::core::Entity;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Per Klick selektierte Entity (Ziel für Löschen)
    pub selected_entity: Option<Entity>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektiert die Entity bzw. hebt die Selektion auf, wenn sie schon selektiert ist.
    pub fn toggle(&mut self, entity: Entity) {
        if self.selected_entity.as_ref() == Some(&entity) {
            self.selected_entity = None;
        } else {
            self.selected_entity = Some(entity);
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_entity = None;
    }
}

/// Welche Art Label gerade gewählt wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Entity-Typ für einen aufgezogenen Span
    Entity,
    /// Relations-Typ für eine gezogene Relation
    Relation,
}

/// Beide Gesten-Automaten
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Span-Auswahl (linke Maustaste)
    pub selection: SelectionController,
    /// Relation ziehen (rechte Maustaste)
    pub relation: RelationBuilder,
}

impl GestureState {
    /// Offene Typ-Auswahl, falls eine Geste darauf wartet
    pub fn pending_label(&self) -> Option<LabelKind> {
        if self.selection.is_awaiting_label() {
            Some(LabelKind::Entity)
        } else if self.relation.is_awaiting_label() {
            Some(LabelKind::Relation)
        } else {
            None
        }
    }

    /// Beide Gesten im Ruhezustand?
    pub fn is_idle(&self) -> bool {
        self.selection.is_idle() && self.relation.is_idle()
    }

    /// Hinweistext der aktiven Geste
    pub fn status_text(&self) -> Option<&str> {
        if !self.relation.is_idle() {
            Some(self.relation.status_text())
        } else if !self.selection.is_idle() {
            Some(self.selection.status_text())
        } else {
            None
        }
    }

    /// Setzt beide Gesten zurück.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.relation.reset();
    }
}
