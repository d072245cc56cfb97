//! UI-bezogener Zustand: Dialog-Flags, Statuszeile und Eingabefelder.

use crate::jsonl::LoadWarning;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Ob das Warnungsfenster des letzten Ladevorgangs sichtbar ist
    pub show_load_warnings: bool,
    /// Ob das Sitzungsprotokoll sichtbar ist
    pub show_command_log: bool,
    /// Temporäre Statusnachricht (Fehler, Undo-Meldungen, …)
    pub status_message: Option<String>,
    /// Warnungen des letzten Ladevorgangs
    pub load_warnings: Vec<LoadWarning>,
    /// Filter-/Eingabetext im Label-Auswahlfenster
    pub label_input: String,
    /// Eingabefeld für die 1-basierte Dokumentnummer
    pub goto_input: String,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statusnachricht.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
