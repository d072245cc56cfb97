//! Use-Case-Funktionen für Viewport, Schriftmetriken und Scrollen.

use crate::app::AppState;
use crate::core::FontMetrics;

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    state.refresh_layout();
}

/// Übernimmt neue Schriftmetriken des Hosts.
pub fn set_font_metrics(state: &mut AppState, metrics: FontMetrics) {
    state.view.metrics = metrics;
    state.refresh_layout();
}

/// Scrollt vertikal; das Ergebnis wird auf `[0, max_scroll]` geklemmt.
pub fn scroll_by(state: &mut AppState, delta: f32) {
    state.view.scroll = (state.view.scroll + delta).max(0.0);
    state.refresh_layout();
}
