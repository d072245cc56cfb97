//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::{Document, DocumentStore};
use crate::jsonl;
use crate::shared::HistoryScope;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt eine JSONL-Datei in den AppState.
///
/// Fehlerhafte Zeilen werden übersprungen und als Warnung gesammelt; nur
/// eine unlesbare Datei bricht ab (der bisherige Zustand bleibt dann erhalten).
pub fn load_selected_file(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let report = jsonl::load_jsonl(&path)?;

    register_document_labels(state, &report.documents);
    apply_history_scope(state, &path);

    let document_count = report.documents.len();
    state.documents = DocumentStore::new(report.documents, Some(path.clone()));
    state.view.document_generation += 1;
    super::navigation::reset_document_view(state);

    let message = if report.skipped_lines > 0 {
        format!(
            "{} Dokumente geladen, {} Zeilen übersprungen",
            document_count, report.skipped_lines
        )
    } else {
        format!("{} Dokumente geladen", document_count)
    };
    log::info!("{}: {}", path.display(), message);
    state.ui.set_status(message);
    state.ui.show_load_warnings = !report.warnings.is_empty();
    state.ui.load_warnings = report.warnings;

    state.recent_files.push(&path);
    Ok(())
}

/// Speichert unter dem aktuellen Pfad oder öffnet den Dialog, wenn keiner bekannt ist.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    match state.documents.source_path.clone() {
        Some(path) => write_documents(state, &path),
        None => {
            request_save_file(state);
            Ok(())
        }
    }
}

/// Speichert unter einem neuen Pfad, der danach als aktueller Pfad gilt.
pub fn save_file_as(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    write_documents(state, &path)?;
    state.documents.source_path = Some(path.clone());
    state.history.source_path = Some(path.clone());
    state.recent_files.push(&path);
    Ok(())
}

/// `None` speichert unter dem bekannten Pfad, `Some(p)` unter `p`.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    match path {
        Some(path) => save_file_as(state, path),
        None => save_current_file(state),
    }
}

/// Schreibt alle Dokumente; bei Fehlern bleibt der Dirty-Status erhalten.
fn write_documents(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    if state.documents.is_empty() {
        anyhow::bail!("Keine Datei geladen");
    }
    jsonl::save_jsonl(path, state.documents.documents())
        .with_context(|| format!("Speichern nach {} fehlgeschlagen", path.display()))?;
    state.documents.mark_saved();

    let message = format!(
        "{} Dokumente gespeichert: {}",
        state.documents.len(),
        path.display()
    );
    log::info!("{}", message);
    state.ui.set_status(message);
    Ok(())
}

/// Übernimmt alle Labels der geladenen Dokumente in die Registry.
fn register_document_labels(state: &mut AppState, documents: &[Document]) {
    let mut added = 0;
    for document in documents {
        for entity in document.entities() {
            added += usize::from(state.settings.register_entity_label(&entity.label));
        }
        for relation in document.relations() {
            added += usize::from(state.settings.register_relation_label(&relation.label));
        }
    }
    if added > 0 {
        log::info!("{} neue Labels aus der Datei übernommen", added);
    }
}

/// Bei dateibezogener History wird sie beim Wechsel der Datei verworfen.
fn apply_history_scope(state: &mut AppState, path: &Path) {
    if state.settings.history_scope == HistoryScope::PerFile
        && state.history.source_path.as_deref() != Some(path)
    {
        log::info!("History verworfen (dateibezogen, neue Datei)");
        state.history.clear();
    }
    state.history.source_path = Some(path.to_path_buf());
}
