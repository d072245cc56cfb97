//! Handler für Undo/Redo-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::history::undo(state)
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::history::redo(state)
}
