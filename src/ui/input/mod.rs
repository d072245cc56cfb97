//! Viewport-Input-Handling: Maus-Events, Scroll und Shortcuts → AppIntent.
//!
//! Pointer-Positionen werden relativ zur linken oberen Ecke des
//! Dokumentbereichs übergeben.

mod pointer;
mod scroll;

use super::keyboard::{self, KeyboardContext};
use crate::app::AppIntent;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
}

impl ViewportContext<'_> {
    /// Pointer-Position relativ zum Dokumentbereich.
    fn local_pointer(&self) -> Option<glam::Vec2> {
        let pos = self.ui.input(|i| i.pointer.latest_pos())?;
        let local = pos - self.response.rect.min;
        Some(glam::Vec2::new(local.x, local.y))
    }

    /// Liegt der Pointer über dem Dokumentbereich?
    fn pointer_inside(&self) -> bool {
        self.ui
            .input(|i| i.pointer.latest_pos())
            .is_some_and(|pos| self.response.rect.contains(pos))
    }
}

/// Verwaltet den Input-Zustand für den Dokumentbereich (laufende Drags).
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_down: bool,
    pub(crate) secondary_down: bool,
}

/// Zustand aus dem AppState, den die Eingabeverarbeitung braucht.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputContext {
    /// Eine Entity ist selektiert
    pub has_selection: bool,
    /// Eine Typ-Auswahl ist offen
    pub label_pending: bool,
    /// Scroll-Schritt in Pixeln
    pub scroll_step: f32,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Dokumentbereich.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        input: InputContext,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext { ui, response };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            KeyboardContext {
                has_selection: input.has_selection,
                label_pending: input.label_pending,
                scroll_step: input.scroll_step,
            },
        ));

        self.handle_pointer_buttons(&ctx, &mut events);
        self.handle_pointer_motion(&ctx, &mut events);
        Self::handle_scroll(&ctx, &mut events);

        events
    }
}
