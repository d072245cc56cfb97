//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(path) = &state.documents.source_path {
                let filename = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                let dirty = if state.documents.is_dirty() { " *" } else { "" };
                ui.label(format!("Datei: {}{}", filename, dirty));
                ui.separator();
                ui.label(format!(
                    "Entitäten: {} | Relationen: {} (gesamt {} | {})",
                    state.entity_count(),
                    state.relation_count(),
                    state.documents.total_entities(),
                    state.documents.total_relations()
                ));
            } else {
                ui.label("Keine Datei geladen");
            }

            ui.separator();

            ui.label(format!(
                "Undo: {} | Redo: {}",
                state.history.undo_entries().len(),
                state.history.redo_entries().len()
            ));

            // Hinweis der laufenden Geste
            if let Some(text) = state.gestures.status_text() {
                ui.separator();
                ui.label(egui::RichText::new(text).italics());
            }

            // Statusnachricht (Fehler, Undo-Meldungen, ...)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(entity) = &state.selection.selected_entity {
                    ui.label(format!("Selektiert: {}", entity));
                }
            });
        });
    });
}
