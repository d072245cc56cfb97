//! Handler für Datei-Operationen (Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt eine JSONL-Datei aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, path)
}

/// Speichert alle Dokumente.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::save(state, path)
}
