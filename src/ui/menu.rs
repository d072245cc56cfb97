//! Top-Menü (Datei, Bearbeiten, Ansicht, Navigation).

use crate::app::{AppIntent, AppState};
use crate::shared::NAVIGATION_JUMP;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Öffnen... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.menu_button("Zuletzt geöffnet", |ui| {
                    if state.recent_files.paths().is_empty() {
                        ui.label(egui::RichText::new("Keine Einträge").weak());
                    }
                    for path in state.recent_files.paths() {
                        if ui.button(path.display().to_string()).clicked() {
                            events.push(AppIntent::RecentFileSelected { path: path.clone() });
                            ui.close();
                        }
                    }
                });

                ui.separator();

                let has_file = !state.documents.is_empty();

                if ui
                    .add_enabled(has_file, egui::Button::new("Speichern (Ctrl+S)"))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_file, egui::Button::new("Speichern unter..."))
                    .clicked()
                {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Bearbeiten: Undo / Redo / Löschen
            ui.menu_button("Bearbeiten", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Rückgängig (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        state.can_redo(),
                        egui::Button::new("Wiederholen (Ctrl+Y / Shift+Ctrl+Z)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                let has_selection = state.selection.selected_entity.is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Entity löschen (Entf)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let label = if state.ui.show_command_log {
                    "Sitzungsprotokoll ausblenden"
                } else {
                    "Sitzungsprotokoll anzeigen"
                };
                if ui.button(label).clicked() {
                    events.push(AppIntent::CommandLogToggled);
                    ui.close();
                }
            });

            ui.menu_button("Navigation", |ui| {
                let has_file = !state.documents.is_empty();
                let entries = [
                    ("Erstes Dokument (Pos1)", AppIntent::FirstDocumentRequested),
                    (
                        "Zurück (←)",
                        AppIntent::JumpDocumentsRequested { delta: -1 },
                    ),
                    ("Weiter (→)", AppIntent::JumpDocumentsRequested { delta: 1 }),
                    (
                        "10 zurück (Ctrl+←)",
                        AppIntent::JumpDocumentsRequested {
                            delta: -NAVIGATION_JUMP,
                        },
                    ),
                    (
                        "10 weiter (Ctrl+→)",
                        AppIntent::JumpDocumentsRequested {
                            delta: NAVIGATION_JUMP,
                        },
                    ),
                    ("Letztes Dokument (Ende)", AppIntent::LastDocumentRequested),
                ];
                for (text, intent) in entries {
                    if ui.add_enabled(has_file, egui::Button::new(text)).clicked() {
                        events.push(intent);
                        ui.close();
                    }
                }
            });
        });
    });

    events
}
