//! Zweiphasige Gesten als explizite Zustandsautomaten.
//!
//! Gesten lesen Layout und Modell nur; sie mutieren nie selbst. Ein
//! abgeschlossener Ablauf liefert einen [`HistoryCommand`], den der Handler
//! über die History anwendet.

/// Relation ziehen: Quell-Entity → Ziel-Entity → Typ wählen.
pub mod relation;
/// Span aufziehen: Token-Drag → Typ wählen.
pub mod selection;

pub use relation::{RelationBuilder, RelationPhase};
pub use selection::{SelectionController, SelectionPhase};

use super::history::HistoryCommand;

/// Ergebnis eines Übergangs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Eingabe in diesem Zustand ohne Bedeutung
    Ignored,
    /// Zustand geändert, Geste läuft weiter
    Changed,
    /// Geste wartet auf die Typ-Auswahl
    AwaitingLabel,
    /// Geste abgeschlossen, Befehl bereit zur Anwendung
    Committed(HistoryCommand),
    /// Geste abgebrochen, keine Mutation
    Cancelled,
}

/// Gemeinsame Schnittstelle beider Gesten.
pub trait Gesture {
    /// Anzeigename für die Statusleiste
    fn name(&self) -> &str;

    /// Hinweis zum aktuellen Schritt
    fn status_text(&self) -> &str;

    /// Ruhezustand?
    fn is_idle(&self) -> bool;

    /// Wartet die Geste auf die Typ-Auswahl?
    fn is_awaiting_label(&self) -> bool;

    /// Bricht die Geste ab (Esc) und kehrt in den Ruhezustand zurück.
    fn cancel(&mut self) -> GestureOutcome;
}
