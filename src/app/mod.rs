//! Application-Layer: Controller, State, Events, Gesten, History und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod gestures;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Sitzungskontext (Dokumente, View, Gesten, Einstellungen).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, CommandOutcome, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use gestures::{Gesture, GestureOutcome, RelationBuilder, SelectionController};
pub use render_scene::build as build_render_scene;
pub use history::{DocumentRef, EditHistory, HistoryCommand, HistoryError, HistorySnapshot};
pub use state::{AppState, GestureState, LabelKind, SelectionState, UiState, ViewState};
