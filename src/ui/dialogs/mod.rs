//! Datei-Dialoge und modale Fenster.

mod command_log;
mod file_dialogs;
mod label_chooser;
mod load_warnings;

pub use command_log::show_command_log;
pub use file_dialogs::handle_file_dialogs;
pub use label_chooser::show_label_chooser;
pub use load_warnings::show_load_warnings;
