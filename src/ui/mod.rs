//! UI-Layer mit egui.
//!
//! Menü, Navigationsleiste, Statuszeile, Input-Handling und Dialoge.
//! Alle Komponenten liefern `AppIntent`s und mutieren keine Annotationen.
//! Keyboard-Shortcuts sind in eine eigene Datei extrahiert.

/// Datei-Dialoge, Typ-Auswahl und Ladewarnungen
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod status;
pub mod toolbar;

pub use dialogs::{handle_file_dialogs, show_command_log, show_label_chooser, show_load_warnings};
pub use input::{InputContext, InputState};
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
