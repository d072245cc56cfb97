//! Mausrad-Scrollen im Dokumentbereich.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Mausrad nach unten scrollt den Inhalt nach oben (positiver Offset).
    pub(crate) fn handle_scroll(ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.pointer_inside() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }
        events.push(AppIntent::ScrollRequested { delta: -scroll });
    }
}
