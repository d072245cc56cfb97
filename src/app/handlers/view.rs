//! Handler für Viewport, Schriftmetriken und Scrollen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FontMetrics;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Übernimmt neue Schriftmetriken.
pub fn set_font_metrics(state: &mut AppState, metrics: FontMetrics) {
    use_cases::viewport::set_font_metrics(state, metrics);
}

/// Scrollt um ein Pixel-Delta.
pub fn scroll_by(state: &mut AppState, delta: f32) {
    use_cases::viewport::scroll_by(state, delta);
}
