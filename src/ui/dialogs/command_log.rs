//! Fenster mit dem Sitzungsprotokoll.

use crate::app::{CommandLog, CommandOutcome, UiState};

/// Zeigt die protokollierten Commands, jüngster oben. Fehler sind rot markiert.
pub fn show_command_log(ctx: &egui::Context, ui_state: &mut UiState, log: &CommandLog) {
    if !ui_state.show_command_log {
        return;
    }

    let mut open = true;
    egui::Window::new(format!(
        "Sitzungsprotokoll ({} Einträge, {} Fehler)",
        log.len(),
        log.failure_count()
    ))
    .open(&mut open)
    .collapsible(true)
    .resizable(true)
    .default_width(480.0)
    .show(ctx, |ui| {
        if log.is_empty() {
            ui.label(egui::RichText::new("Noch keine Befehle").weak());
            return;
        }
        egui::ScrollArea::vertical()
            .max_height(320.0)
            .show(ui, |ui| {
                for entry in log.entries().rev() {
                    let text = egui::RichText::new(entry.summary()).monospace();
                    match entry.outcome {
                        CommandOutcome::Applied => ui.label(text),
                        CommandOutcome::Failed(_) => ui.label(text.color(egui::Color32::RED)),
                    };
                }
            });
    });

    if !open {
        ui_state.show_command_log = false;
    }
}
