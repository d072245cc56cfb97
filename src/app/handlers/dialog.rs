//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Blendet das Sitzungsprotokoll ein bzw. aus.
pub fn toggle_command_log(state: &mut AppState) {
    state.ui.show_command_log = !state.ui.show_command_log;
}

/// Schreibt den Sitzungskontext (Einstellungen, Recent-Files, History).
pub fn persist_session(state: &mut AppState) {
    use_cases::session::persist_session(state);
}
