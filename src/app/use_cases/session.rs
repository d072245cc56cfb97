//! Lebenszyklus des Sitzungskontexts: Laden beim Start, Speichern beim Beenden.
//!
//! Einstellungen, Recent-Files und History-Snapshot liegen in `SessionPaths`.
//! Keiner dieser Schritte ist fatal; Fehler werden geloggt und überstanden.

use crate::app::history::HistorySnapshot;
use crate::app::AppState;
use crate::shared::{AnnotatorSettings, RecentFiles, SessionPaths};

/// Baut den AppState aus den Sitzungsdateien auf.
///
/// Fehlende oder defekte Dateien ergeben Standardwerte bzw. eine leere History.
pub fn load_session(paths: SessionPaths) -> AppState {
    let settings = AnnotatorSettings::load_from_file(&paths.settings);
    let mut state = AppState::with_settings(settings);
    state.recent_files = RecentFiles::load_from_file(&paths.recent_files);
    state
        .history
        .restore(HistorySnapshot::load_from_file(&paths.history));
    log::info!(
        "Sitzung geladen: {} zuletzt geöffnete Dateien, {} Undo-Einträge",
        state.recent_files.paths().len(),
        state.history.undo_entries().len()
    );
    state.session_paths = Some(paths);
    state
}

/// Schreibt Einstellungen, Recent-Files und History.
pub fn persist_session(state: &mut AppState) {
    let Some(paths) = state.session_paths.clone() else {
        log::debug!("Keine Sitzungspfade gesetzt, nichts zu speichern");
        return;
    };
    if let Err(e) = state.settings.save_to_file(&paths.settings) {
        log::warn!("Einstellungen konnten nicht gespeichert werden: {:#}", e);
    }
    if let Err(e) = state.recent_files.save_to_file(&paths.recent_files) {
        log::warn!("Recent-Files konnten nicht gespeichert werden: {:#}", e);
    }
    persist_history(state);
}

/// Schreibt den History-Snapshot.
pub fn persist_history(state: &mut AppState) {
    let Some(path) = state.session_paths.as_ref().map(|p| p.history.clone()) else {
        return;
    };
    match state.history.snapshot().save_to_file(&path) {
        Ok(()) => state.history.mark_persisted(),
        Err(e) => log::warn!("History konnte nicht gespeichert werden: {:#}", e),
    }
}

/// Schreibt die History, sobald genug neue Befehle aufgezeichnet wurden.
pub fn autosave_history(state: &mut AppState) {
    let every = state.settings.history_autosave_every;
    if every > 0 && state.history.recorded_since_persist() >= every {
        log::debug!("History-Autosave nach {} Befehlen", every);
        persist_history(state);
    }
}
