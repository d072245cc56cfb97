//! Fenster mit den Warnungen des letzten Ladevorgangs.

use crate::app::UiState;

/// Zeigt übersprungene Zeilen und verworfene Annotationen des letzten Ladens.
pub fn show_load_warnings(ctx: &egui::Context, ui_state: &mut UiState) {
    if !ui_state.show_load_warnings {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("Warnungen beim Laden ({})", ui_state.load_warnings.len()))
        .open(&mut open)
        .collapsible(true)
        .resizable(true)
        .default_width(520.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(300.0)
                .show(ui, |ui| {
                    for warning in &ui_state.load_warnings {
                        ui.label(format!("Zeile {}: {}", warning.line, warning.message));
                    }
                });
        });

    if !open {
        ui_state.show_load_warnings = false;
    }
}
