//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Das Layout wird vorher aktualisiert, damit Pointer-Intents gegen den
    /// aktuellen Viewport- und Scroll-Stand ausgewertet werden.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        state.refresh_layout();
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let sequence = state.command_log.record(&command);
        let result = dispatch(state, command);
        if let (Err(e), Some(sequence)) = (&result, sequence) {
            state.command_log.mark_failed(sequence, format!("{e:#}"));
        }
        result
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

/// Dispatcht einen Command an die Feature-Handler in `handlers/`.
fn dispatch(state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
    use super::handlers;

    match command {
        // === Datei-I/O ===
        AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
        AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
        AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
        AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,

        // === Viewport & Scroll ===
        AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
        AppCommand::SetFontMetrics { metrics } => {
            handlers::view::set_font_metrics(state, metrics)
        }
        AppCommand::ScrollBy { delta } => handlers::view::scroll_by(state, delta),

        // === Gesten ===
        AppCommand::BeginTokenSelection { pos } => {
            handlers::gesture::begin_token_selection(state, pos)
        }
        AppCommand::UpdateTokenSelection { pos } => {
            handlers::gesture::update_token_selection(state, pos)
        }
        AppCommand::FinishTokenSelection { pos } => {
            handlers::gesture::finish_token_selection(state, pos)
        }
        AppCommand::BeginRelation { pos } => handlers::gesture::begin_relation(state, pos),
        AppCommand::UpdateRelation { pos } => handlers::gesture::update_relation(state, pos),
        AppCommand::FinishRelation { pos } => handlers::gesture::finish_relation(state, pos),
        AppCommand::ConfirmLabel { label } => handlers::gesture::confirm_label(state, &label)?,
        AppCommand::CancelGestures => handlers::gesture::cancel(state),

        // === Selektion ===
        AppCommand::ToggleEntitySelection { entity } => {
            handlers::selection::toggle_entity(state, entity)
        }
        AppCommand::ClearSelection => handlers::selection::clear(state),

        // === Editing ===
        AppCommand::AddEntity { span, label } => {
            handlers::editing::add_entity(state, span, &label)?
        }
        AppCommand::RemoveEntity { entity } => handlers::editing::remove_entity(state, entity)?,
        AppCommand::AddRelation {
            source,
            target,
            label,
        } => handlers::editing::add_relation(state, source, target, &label)?,
        AppCommand::RemoveRelation { relation } => {
            handlers::editing::remove_relation(state, relation)?
        }
        AppCommand::DeleteSelectedEntity => handlers::editing::delete_selected(state)?,
        AppCommand::AddCustomEntityLabel { label } => {
            handlers::editing::add_custom_entity_label(state, &label)
        }
        AppCommand::AddCustomRelationLabel { label } => {
            handlers::editing::add_custom_relation_label(state, &label)
        }

        // === History ===
        AppCommand::Undo => handlers::history::undo(state)?,
        AppCommand::Redo => handlers::history::redo(state)?,

        // === Navigation ===
        AppCommand::GotoDocument { index } => handlers::navigation::goto(state, index),
        AppCommand::JumpDocuments { delta } => handlers::navigation::jump(state, delta),

        // === Dialoge & Anwendungssteuerung ===
        AppCommand::RequestExit => handlers::dialog::request_exit(state),
        AppCommand::PersistSession => handlers::dialog::persist_session(state),
        AppCommand::ToggleCommandLog => handlers::dialog::toggle_command_log(state),
    }

    Ok(())
}
