//! Pointer-Tasten: Primär = Span aufziehen bzw. Entity selektieren,
//! Sekundär = Relation ziehen.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use egui::PointerButton;

impl InputState {
    /// Erzeugt Press-/Release-Intents. Press zählt nur im Dokumentbereich,
    /// Release überall, damit kein Drag hängen bleibt.
    pub(crate) fn handle_pointer_buttons(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(pos) = ctx.local_pointer() else {
            return;
        };
        let (primary_pressed, primary_released, secondary_pressed, secondary_released) =
            ctx.ui.input(|i| {
                (
                    i.pointer.button_pressed(PointerButton::Primary),
                    i.pointer.button_released(PointerButton::Primary),
                    i.pointer.button_pressed(PointerButton::Secondary),
                    i.pointer.button_released(PointerButton::Secondary),
                )
            });
        let inside = ctx.pointer_inside();

        if primary_pressed && inside && !self.secondary_down {
            self.primary_down = true;
            events.push(AppIntent::PrimaryPressed { pos });
        }
        if secondary_pressed && inside && !self.primary_down {
            self.secondary_down = true;
            events.push(AppIntent::SecondaryPressed { pos });
        }
        if primary_released && self.primary_down {
            self.primary_down = false;
            events.push(AppIntent::PrimaryReleased { pos });
        }
        if secondary_released && self.secondary_down {
            self.secondary_down = false;
            events.push(AppIntent::SecondaryReleased { pos });
        }
    }

    /// Meldet Pointer-Bewegungen, solange eine Taste gehalten wird.
    pub(crate) fn handle_pointer_motion(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !(self.primary_down || self.secondary_down) {
            return;
        }
        let moved = ctx.ui.input(|i| i.pointer.delta() != egui::Vec2::ZERO);
        if !moved {
            return;
        }
        if let Some(pos) = ctx.local_pointer() {
            events.push(AppIntent::PointerMoved { pos });
        }
    }
}
