//! Handler für Span-Auswahl und Relation-Geste.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Pointer-Down der Span-Auswahl.
pub fn begin_token_selection(state: &mut AppState, pos: Vec2) {
    use_cases::gesture::begin_token_selection(state, pos);
}

/// Pointer-Move der Span-Auswahl.
pub fn update_token_selection(state: &mut AppState, pos: Vec2) {
    use_cases::gesture::update_token_selection(state, pos);
}

/// Pointer-Up der Span-Auswahl.
pub fn finish_token_selection(state: &mut AppState, pos: Vec2) {
    use_cases::gesture::finish_token_selection(state, pos);
}

/// Sekundär-Pointer-Down: Quelle wählen.
pub fn begin_relation(state: &mut AppState, pos: Vec2) {
    use_cases::gesture::begin_relation(state, pos);
}

/// Pointer-Move der Relation-Geste.
pub fn update_relation(state: &mut AppState, pos: Vec2) {
    use_cases::gesture::update_relation(state, pos);
}

/// Sekundär-Pointer-Up: Ziel wählen.
pub fn finish_relation(state: &mut AppState, pos: Vec2) {
    use_cases::gesture::finish_relation(state, pos);
}

/// Typ-Auswahl bestätigt.
pub fn confirm_label(state: &mut AppState, label: &str) -> anyhow::Result<()> {
    use_cases::gesture::confirm_label(state, label)
}

/// Escape während einer Geste.
pub fn cancel(state: &mut AppState) {
    use_cases::gesture::cancel(state);
}
