//! Zustandsautomat für das Aufziehen eines Entity-Spans.
//!
//! `Idle → Dragging → AwaitingEntityType → Idle`

use super::{Gesture, GestureOutcome};
use crate::app::history::{DocumentRef, HistoryCommand};
use crate::core::{Entity, Span, TokenLayout};
use glam::Vec2;

/// Phase der Span-Auswahl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// Keine Auswahl aktiv
    #[default]
    Idle,
    /// Pointer gedrückt, Span wird aufgezogen
    Dragging {
        /// Token beim Pointer-Down
        anchor: usize,
        /// Token unter dem Pointer
        current: usize,
    },
    /// Span steht fest, Typ-Auswahl offen
    AwaitingEntityType {
        /// Normalisierter Span
        span: Span,
    },
}

/// Wandelt Pointer-Drags über Tokens in einen Kandidaten-Span.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    phase: SelectionPhase,
}

impl SelectionController {
    /// Erstellt einen Controller im Ruhezustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Aktueller Kandidat (während des Drags oder in der Typ-Auswahl), immer normalisiert.
    pub fn candidate_span(&self) -> Option<Span> {
        match self.phase {
            SelectionPhase::Idle => None,
            SelectionPhase::Dragging { anchor, current } => Some(Span::normalized(anchor, current)),
            SelectionPhase::AwaitingEntityType { span } => Some(span),
        }
    }

    /// Pointer-Down: startet den Drag, wenn ein Token getroffen wurde.
    pub fn pointer_down(&mut self, layout: &TokenLayout, point: Vec2) -> GestureOutcome {
        if self.phase != SelectionPhase::Idle {
            return GestureOutcome::Ignored;
        }
        match layout.hit_test(point) {
            Some(token) => {
                self.phase = SelectionPhase::Dragging {
                    anchor: token,
                    current: token,
                };
                GestureOutcome::Changed
            }
            None => GestureOutcome::Ignored,
        }
    }

    /// Pointer-Move: aktualisiert den End-Token. Zwischenräume behalten den letzten Treffer.
    pub fn pointer_move(&mut self, layout: &TokenLayout, point: Vec2) -> GestureOutcome {
        let SelectionPhase::Dragging { anchor, current } = self.phase else {
            return GestureOutcome::Ignored;
        };
        match layout.hit_test(point) {
            Some(token) if token != current => {
                self.phase = SelectionPhase::Dragging {
                    anchor,
                    current: token,
                };
                GestureOutcome::Changed
            }
            _ => GestureOutcome::Ignored,
        }
    }

    /// Pointer-Up: fixiert den Span und öffnet die Typ-Auswahl.
    pub fn pointer_up(&mut self, layout: &TokenLayout, point: Vec2) -> GestureOutcome {
        self.pointer_move(layout, point);
        let SelectionPhase::Dragging { anchor, current } = self.phase else {
            return GestureOutcome::Ignored;
        };
        self.phase = SelectionPhase::AwaitingEntityType {
            span: Span::normalized(anchor, current),
        };
        GestureOutcome::AwaitingLabel
    }

    /// Typ bestätigt: liefert den `AddEntity`-Befehl und kehrt nach `Idle` zurück.
    pub fn confirm(&mut self, document: DocumentRef, label: &str) -> GestureOutcome {
        let SelectionPhase::AwaitingEntityType { span } = self.phase else {
            return GestureOutcome::Ignored;
        };
        self.phase = SelectionPhase::Idle;
        GestureOutcome::Committed(HistoryCommand::AddEntity {
            document,
            entity: Entity {
                span,
                label: label.to_string(),
            },
        })
    }

    /// Setzt ohne Rückmeldung zurück (Dokumentwechsel).
    pub fn reset(&mut self) {
        self.phase = SelectionPhase::Idle;
    }
}

impl Gesture for SelectionController {
    fn name(&self) -> &str {
        "Entity markieren"
    }

    fn status_text(&self) -> &str {
        match self.phase {
            SelectionPhase::Idle => "Tokens mit gedrückter linker Maustaste markieren",
            SelectionPhase::Dragging { .. } => "Loslassen, um den Bereich festzulegen",
            SelectionPhase::AwaitingEntityType { .. } => {
                "Entity-Typ wählen, Escape bricht ab"
            }
        }
    }

    fn is_idle(&self) -> bool {
        self.phase == SelectionPhase::Idle
    }

    fn is_awaiting_label(&self) -> bool {
        matches!(self.phase, SelectionPhase::AwaitingEntityType { .. })
    }

    fn cancel(&mut self) -> GestureOutcome {
        if self.phase == SelectionPhase::Idle {
            return GestureOutcome::Ignored;
        }
        self.phase = SelectionPhase::Idle;
        GestureOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Document, FontMetrics};

    fn layout() -> TokenLayout {
        let doc = Document::new(
            "d1",
            vec![vec!["John".into(), "works".into(), "at".into(), "Google".into()]],
        );
        let metrics = FontMetrics {
            char_width: 10.0,
            font_height: 12.0,
        };
        // Token-x: 10..54, 56..110, 112..136, 138..202; y 10..30
        TokenLayout::compute(&doc, Vec2::new(400.0, 200.0), 0.0, &metrics)
    }

    fn token(x: f32) -> Vec2 {
        Vec2::new(x, 20.0)
    }

    #[test]
    fn drag_backwards_is_normalized() {
        let layout = layout();
        let mut ctl = SelectionController::new();

        assert_eq!(ctl.pointer_down(&layout, token(150.0)), GestureOutcome::Changed);
        assert_eq!(ctl.pointer_move(&layout, token(60.0)), GestureOutcome::Changed);
        assert_eq!(ctl.candidate_span(), Some(Span::new(1, 3)));
        assert_eq!(ctl.pointer_up(&layout, token(60.0)), GestureOutcome::AwaitingLabel);
        assert_eq!(
            ctl.phase(),
            SelectionPhase::AwaitingEntityType {
                span: Span::new(1, 3)
            }
        );
    }

    #[test]
    fn confirm_commits_add_entity_and_returns_to_idle() {
        let layout = layout();
        let mut ctl = SelectionController::new();
        ctl.pointer_down(&layout, token(20.0));
        ctl.pointer_up(&layout, token(20.0));

        let outcome = ctl.confirm(DocumentRef::new(0, "d1"), "PERSON");
        assert_eq!(
            outcome,
            GestureOutcome::Committed(HistoryCommand::AddEntity {
                document: DocumentRef::new(0, "d1"),
                entity: Entity::new(0, 0, "PERSON"),
            })
        );
        assert!(ctl.is_idle());
    }

    #[test]
    fn escape_discards_pending_span() {
        let layout = layout();
        let mut ctl = SelectionController::new();
        ctl.pointer_down(&layout, token(20.0));
        ctl.pointer_up(&layout, token(120.0));
        assert!(ctl.is_awaiting_label());

        assert_eq!(ctl.cancel(), GestureOutcome::Cancelled);
        assert!(ctl.is_idle());
        assert_eq!(ctl.confirm(DocumentRef::new(0, "d1"), "X"), GestureOutcome::Ignored);
        assert_eq!(ctl.cancel(), GestureOutcome::Ignored);
    }

    #[test]
    fn pointer_down_outside_tokens_is_ignored() {
        let layout = layout();
        let mut ctl = SelectionController::new();
        assert_eq!(ctl.pointer_down(&layout, token(300.0)), GestureOutcome::Ignored);
        assert_eq!(ctl.pointer_up(&layout, token(300.0)), GestureOutcome::Ignored);
        assert!(ctl.is_idle());
    }

    #[test]
    fn release_in_gap_keeps_last_token() {
        let layout = layout();
        let mut ctl = SelectionController::new();
        ctl.pointer_down(&layout, token(20.0));
        ctl.pointer_move(&layout, token(60.0));
        // Lücke zwischen Token 1 und 2
        ctl.pointer_up(&layout, token(111.0));
        assert_eq!(ctl.candidate_span(), Some(Span::new(0, 1)));
    }
}
