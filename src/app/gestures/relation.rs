//! Zustandsautomat für das Ziehen einer Relation zwischen zwei Entitäten.
//!
//! `Idle → SourcePicked → AwaitingRelationType → Idle`

use super::{Gesture, GestureOutcome};
use crate::app::history::{DocumentRef, HistoryCommand};
use crate::core::{Document, Relation, Span, TokenLayout};
use glam::Vec2;

/// Phase des Relation-Aufbaus
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RelationPhase {
    /// Keine Relation in Arbeit
    #[default]
    Idle,
    /// Quell-Entity gewählt, Pointer wird zum Ziel gezogen
    SourcePicked {
        /// Span der Quell-Entity
        source: Span,
        /// Aktuelle Pointer-Position (für die Gummiband-Linie)
        pointer: Vec2,
    },
    /// Ziel steht fest, Typ-Auswahl offen
    AwaitingRelationType {
        /// Quell-Span
        source: Span,
        /// Ziel-Span
        target: Span,
    },
}

/// Baut aus einer Sekundär-Drag-Geste zwischen zwei Entitäten eine Relation.
#[derive(Debug, Clone, Default)]
pub struct RelationBuilder {
    phase: RelationPhase,
}

impl RelationBuilder {
    /// Erstellt einen Builder im Ruhezustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> RelationPhase {
        self.phase
    }

    /// Sekundär-Pointer-Down: wählt die Entity unter dem Pointer als Quelle.
    pub fn pointer_down(
        &mut self,
        layout: &TokenLayout,
        document: &Document,
        point: Vec2,
    ) -> GestureOutcome {
        if self.phase != RelationPhase::Idle {
            return GestureOutcome::Ignored;
        }
        match layout.entity_at(document, point) {
            Some(entity) => {
                self.phase = RelationPhase::SourcePicked {
                    source: entity.span,
                    pointer: point,
                };
                GestureOutcome::Changed
            }
            None => GestureOutcome::Ignored,
        }
    }

    /// Pointer-Move: verfolgt die Position für die Vorschau.
    pub fn pointer_move(&mut self, point: Vec2) -> GestureOutcome {
        match &mut self.phase {
            RelationPhase::SourcePicked { pointer, .. } => {
                *pointer = point;
                GestureOutcome::Changed
            }
            _ => GestureOutcome::Ignored,
        }
    }

    /// Pointer-Up: auf einer anderen Entity wird sie zum Ziel, sonst Abbruch.
    ///
    /// Loslassen auf demselben Span (auch bei anderem Entity-Typ) bricht ab;
    /// Selbst-Relationen entstehen über diese Geste nicht.
    pub fn pointer_up(
        &mut self,
        layout: &TokenLayout,
        document: &Document,
        point: Vec2,
    ) -> GestureOutcome {
        let RelationPhase::SourcePicked { source, .. } = self.phase else {
            return GestureOutcome::Ignored;
        };
        match layout.entity_at(document, point) {
            Some(target) if target.span != source => {
                self.phase = RelationPhase::AwaitingRelationType {
                    source,
                    target: target.span,
                };
                GestureOutcome::AwaitingLabel
            }
            _ => {
                log::debug!("Relation verworfen: kein anderes Ziel unter dem Pointer");
                self.phase = RelationPhase::Idle;
                GestureOutcome::Cancelled
            }
        }
    }

    /// Typ bestätigt: liefert den `AddRelation`-Befehl und kehrt nach `Idle` zurück.
    pub fn confirm(&mut self, document: DocumentRef, label: &str) -> GestureOutcome {
        let RelationPhase::AwaitingRelationType { source, target } = self.phase else {
            return GestureOutcome::Ignored;
        };
        self.phase = RelationPhase::Idle;
        GestureOutcome::Committed(HistoryCommand::AddRelation {
            document,
            relation: Relation::new(source, target, label),
        })
    }

    /// Gummiband von der Quelle zum Pointer (Viewport-Koordinaten)
    pub fn preview_line(&self, layout: &TokenLayout) -> Option<(Vec2, Vec2)> {
        match self.phase {
            RelationPhase::SourcePicked { source, pointer } => {
                Some((layout.span_anchor(source)?, pointer))
            }
            RelationPhase::AwaitingRelationType { source, target } => {
                Some((layout.span_anchor(source)?, layout.span_anchor(target)?))
            }
            RelationPhase::Idle => None,
        }
    }

    /// Setzt ohne Rückmeldung zurück (Dokumentwechsel).
    pub fn reset(&mut self) {
        self.phase = RelationPhase::Idle;
    }
}

impl Gesture for RelationBuilder {
    fn name(&self) -> &str {
        "Relation ziehen"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            RelationPhase::Idle => "Rechtsklick auf eine Entity und zur Ziel-Entity ziehen",
            RelationPhase::SourcePicked { .. } => "Über der Ziel-Entity loslassen",
            RelationPhase::AwaitingRelationType { .. } => "Relations-Typ wählen, Escape bricht ab",
        }
    }

    fn is_idle(&self) -> bool {
        self.phase == RelationPhase::Idle
    }

    fn is_awaiting_label(&self) -> bool {
        matches!(self.phase, RelationPhase::AwaitingRelationType { .. })
    }

    fn cancel(&mut self) -> GestureOutcome {
        if self.phase == RelationPhase::Idle {
            return GestureOutcome::Ignored;
        }
        self.phase = RelationPhase::Idle;
        GestureOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entity, FontMetrics};

    /// Token-x: 10..54, 56..110, 112..136, 138..202; y 10..30
    fn setup() -> (Document, TokenLayout) {
        let mut doc = Document::new(
            "d1",
            vec![vec!["John".into(), "works".into(), "at".into(), "Google".into()]],
        );
        doc.add_entity(Entity::new(0, 0, "PERSON")).unwrap();
        doc.add_entity(Entity::new(0, 0, "NAME")).unwrap();
        doc.add_entity(Entity::new(3, 3, "ORG")).unwrap();
        let metrics = FontMetrics {
            char_width: 10.0,
            font_height: 12.0,
        };
        let layout = TokenLayout::compute(&doc, Vec2::new(400.0, 200.0), 0.0, &metrics);
        (doc, layout)
    }

    fn at(x: f32) -> Vec2 {
        Vec2::new(x, 20.0)
    }

    #[test]
    fn drag_between_entities_commits_relation() {
        let (doc, layout) = setup();
        let mut builder = RelationBuilder::new();

        assert_eq!(builder.pointer_down(&layout, &doc, at(20.0)), GestureOutcome::Changed);
        assert_eq!(builder.pointer_move(at(100.0)), GestureOutcome::Changed);
        assert_eq!(builder.pointer_up(&layout, &doc, at(150.0)), GestureOutcome::AwaitingLabel);
        assert!(builder.preview_line(&layout).is_some());

        let outcome = builder.confirm(DocumentRef::new(0, "d1"), "WORKS_AT");
        assert_eq!(
            outcome,
            GestureOutcome::Committed(HistoryCommand::AddRelation {
                document: DocumentRef::new(0, "d1"),
                relation: Relation::new(Span::new(0, 0), Span::new(3, 3), "WORKS_AT"),
            })
        );
        assert!(builder.is_idle());
    }

    #[test]
    fn release_on_empty_space_cancels() {
        let (doc, layout) = setup();
        let mut builder = RelationBuilder::new();
        builder.pointer_down(&layout, &doc, at(20.0));

        assert_eq!(builder.pointer_up(&layout, &doc, at(80.0)), GestureOutcome::Cancelled);
        assert!(builder.is_idle());
    }

    #[test]
    fn release_on_same_span_cancels_even_with_other_type() {
        let (doc, layout) = setup();
        let mut builder = RelationBuilder::new();
        builder.pointer_down(&layout, &doc, at(20.0));

        assert_eq!(builder.pointer_up(&layout, &doc, at(30.0)), GestureOutcome::Cancelled);
    }

    #[test]
    fn pointer_down_without_entity_is_ignored() {
        let (doc, layout) = setup();
        let mut builder = RelationBuilder::new();

        assert_eq!(builder.pointer_down(&layout, &doc, at(60.0)), GestureOutcome::Ignored);
        assert_eq!(builder.pointer_move(at(70.0)), GestureOutcome::Ignored);
        assert!(builder.is_idle());
    }

    #[test]
    fn escape_while_awaiting_type_discards() {
        let (doc, layout) = setup();
        let mut builder = RelationBuilder::new();
        builder.pointer_down(&layout, &doc, at(150.0));
        builder.pointer_up(&layout, &doc, at(20.0));
        assert!(builder.is_awaiting_label());

        assert_eq!(builder.cancel(), GestureOutcome::Cancelled);
        assert_eq!(
            builder.confirm(DocumentRef::new(0, "d1"), "R"),
            GestureOutcome::Ignored
        );
    }
}
