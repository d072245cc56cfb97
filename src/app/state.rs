//! Application State: zentrale Datenhaltung der Sitzung.
//!
//! `AppState` ist der explizite Sitzungskontext: Dokumente, History,
//! Einstellungen und Recent-Files liegen hier statt in globalem Zustand.
//! Laden beim Start und Speichern beim Beenden: siehe `use_cases::session`.

mod selection;
mod ui;
mod view;

pub use selection::{GestureState, LabelKind, SelectionState};
pub use ui::UiState;
pub use view::ViewState;

use super::history::{DocumentRef, EditHistory};
use super::CommandLog;
use crate::core::{Document, DocumentStore, TokenLayout};
use crate::shared::{AnnotatorSettings, RecentFiles, SessionPaths};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geladene Dokumente (leer = keine Datei geladen)
    pub documents: DocumentStore,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufende Gesten
    pub gestures: GestureState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (befehlsbasiert)
    pub history: EditHistory,
    /// Persistente Einstellungen (Labels, Farben, Engine-Parameter)
    pub settings: AnnotatorSettings,
    /// Zuletzt geöffnete Dateien
    pub recent_files: RecentFiles,
    /// Pfade der Sitzungsdateien (None = nichts persistieren)
    pub session_paths: Option<SessionPaths>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Einstellungen
    pub fn new() -> Self {
        Self::with_settings(AnnotatorSettings::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Einstellungen.
    pub fn with_settings(settings: AnnotatorSettings) -> Self {
        let mut view = ViewState::new();
        view.metrics = crate::core::FontMetrics::monospace(settings.font_size);
        Self {
            documents: DocumentStore::default(),
            view,
            ui: UiState::new(),
            selection: SelectionState::new(),
            gestures: GestureState::default(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(settings.history_capacity),
            settings,
            recent_files: RecentFiles::default(),
            session_paths: None,
            should_exit: false,
        }
    }

    /// Aktives Dokument
    pub fn active_document(&self) -> Option<&Document> {
        self.documents.active()
    }

    /// Verweis auf das aktive Dokument für History-Befehle
    pub fn active_document_ref(&self) -> Option<DocumentRef> {
        DocumentRef::active(&self.documents)
    }

    /// Aktualisiert das gecachte Layout bei Bedarf und gibt es zurück.
    pub fn refresh_layout(&mut self) -> &TokenLayout {
        self.view.refresh_layout(&self.documents)
    }

    /// Gibt die Anzahl der Entitäten im aktiven Dokument zurück (für UI-Anzeige)
    pub fn entity_count(&self) -> usize {
        self.active_document().map_or(0, Document::entity_count)
    }

    /// Gibt die Anzahl der Relationen im aktiven Dokument zurück (für UI-Anzeige)
    pub fn relation_count(&self) -> usize {
        self.active_document().map_or(0, Document::relation_count)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
