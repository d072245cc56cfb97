//! Typ-Auswahl nach einer Span-Auswahl oder Relation-Geste.

use crate::app::{AppIntent, LabelKind, UiState};
use crate::shared::AnnotatorSettings;

/// Zeigt die Typ-Auswahl, solange eine Geste auf ein Label wartet.
///
/// Das Eingabefeld filtert die bekannten Typen; Enter übernimmt einen
/// eindeutigen Treffer bzw. legt den eingegebenen Typ neu an.
pub fn show_label_chooser(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    pending: Option<LabelKind>,
    settings: &AnnotatorSettings,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(kind) = pending else {
        return events;
    };

    let (title, known) = match kind {
        LabelKind::Entity => ("Entity-Typ wählen", &settings.known_entities),
        LabelKind::Relation => ("Relations-Typ wählen", &settings.known_relations),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 60.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            let response = ui.text_edit_singleline(&mut ui_state.label_input);
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if !enter_pressed {
                response.request_focus();
            }
            let filter = ui_state.label_input.trim().to_lowercase();
            let matches: Vec<&String> = known
                .iter()
                .filter(|label| filter.is_empty() || label.to_lowercase().contains(&filter))
                .collect();

            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(260.0)
                .show(ui, |ui| {
                    for label in &matches {
                        let color = match kind {
                            LabelKind::Entity => settings.entity_color(label),
                            LabelKind::Relation => settings.relation_color(label),
                        };
                        let text = egui::RichText::new(label.as_str())
                            .color(egui::Color32::from_rgb(color[0], color[1], color[2]));
                        if ui.button(text).clicked() {
                            events.push(AppIntent::LabelChosen {
                                label: (*label).clone(),
                            });
                        }
                    }
                });

            let entered = ui_state.label_input.trim().to_string();

            ui.separator();
            ui.horizontal(|ui| {
                let is_new = !entered.is_empty() && !known.contains(&entered);
                let create_clicked = ui
                    .add_enabled(is_new, egui::Button::new("Neu anlegen"))
                    .clicked();

                if create_clicked || (enter_pressed && is_new && matches.is_empty()) {
                    events.push(match kind {
                        LabelKind::Entity => AppIntent::AddCustomEntityLabelRequested {
                            label: entered.clone(),
                        },
                        LabelKind::Relation => AppIntent::AddCustomRelationLabelRequested {
                            label: entered.clone(),
                        },
                    });
                    events.push(AppIntent::LabelChosen {
                        label: entered.clone(),
                    });
                } else if enter_pressed && matches.len() == 1 {
                    events.push(AppIntent::LabelChosen {
                        label: matches[0].clone(),
                    });
                }

                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::CancelRequested);
                }
            });
        });

    events
}
