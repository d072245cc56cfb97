//! Navigationsleiste: Dokumentwechsel und Sprung zu einer Dokumentnummer.

use crate::app::{AppIntent, AppState};
use crate::shared::NAVIGATION_JUMP;

/// Rendert die Navigationsleiste unter dem Menü.
pub fn render_toolbar(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("navigation_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let count = state.documents.len();
            let has_file = count > 0;
            let active = state.documents.active_index();

            ui.add_enabled_ui(has_file, |ui| {
                if ui.button("⏮").on_hover_text("Erstes Dokument").clicked() {
                    events.push(AppIntent::FirstDocumentRequested);
                }
                if ui
                    .button(format!("-{NAVIGATION_JUMP}"))
                    .on_hover_text("Zurück springen")
                    .clicked()
                {
                    events.push(AppIntent::JumpDocumentsRequested {
                        delta: -NAVIGATION_JUMP,
                    });
                }
                if ui.button("◀").on_hover_text("Vorheriges Dokument").clicked() {
                    events.push(AppIntent::JumpDocumentsRequested { delta: -1 });
                }
                if ui.button("▶").on_hover_text("Nächstes Dokument").clicked() {
                    events.push(AppIntent::JumpDocumentsRequested { delta: 1 });
                }
                if ui
                    .button(format!("+{NAVIGATION_JUMP}"))
                    .on_hover_text("Vorwärts springen")
                    .clicked()
                {
                    events.push(AppIntent::JumpDocumentsRequested {
                        delta: NAVIGATION_JUMP,
                    });
                }
                if ui.button("⏭").on_hover_text("Letztes Dokument").clicked() {
                    events.push(AppIntent::LastDocumentRequested);
                }

                ui.separator();

                ui.label("Gehe zu:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.ui.goto_input).desired_width(60.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submitted || ui.button("OK").clicked() {
                    match parse_document_number(&state.ui.goto_input, count) {
                        Some(index) => events.push(AppIntent::GotoDocumentRequested { index }),
                        None => state.ui.set_status(format!(
                            "Ungültige Dokumentnummer: '{}' (1..={})",
                            state.ui.goto_input.trim(),
                            count
                        )),
                    }
                    state.ui.goto_input.clear();
                }
            });

            ui.separator();

            if let Some(document) = state.active_document() {
                ui.label(format!("Dokument {} / {}", active + 1, count));
                ui.separator();
                ui.label(egui::RichText::new(&document.key).strong());
            } else {
                ui.label("Keine Datei geladen");
            }
        });
    });

    events
}

/// Wandelt eine 1-basierte Eingabe in einen 0-basierten Index.
fn parse_document_number(input: &str, count: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}
