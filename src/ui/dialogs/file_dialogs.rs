//! Native Datei-Dialoge (rfd) für Öffnen und Speichern.

use crate::app::{AppIntent, UiState};
use std::path::Path;

/// Standardname, wenn noch keine Datei geladen ist
const DEFAULT_FILE_NAME: &str = "annotations.jsonl";

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, current_path: Option<&Path>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        let mut dialog = rfd::FileDialog::new().add_filter("JSON Lines", &["jsonl", "json"]);
        if let Some(dir) = current_path.and_then(Path::parent) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            events.push(AppIntent::FileSelected { path });
        }
    }

    // Save-Datei-Dialog
    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let default_name = current_path
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON Lines", &["jsonl"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected { path });
        }
    }

    events
}
