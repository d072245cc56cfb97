//! Mapping von UI-Intents auf mutierende App-Commands.

use super::gestures::{Gesture, RelationPhase, SelectionPhase};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Pointer-Intents werden gegen das zuletzt berechnete Layout ausgewertet.
/// Solange eine Typ-Auswahl offen ist, werden neue Gesten ignoriert.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let label_pending = state.gestures.pending_label().is_some();

    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } | AppIntent::RecentFileSelected { path } => {
            vec![AppCommand::LoadFile { path }]
        }
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::CommandLogToggled => vec![AppCommand::ToggleCommandLog],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FontMetricsChanged { metrics } => {
            vec![AppCommand::SetFontMetrics { metrics }]
        }
        AppIntent::ScrollRequested { delta } => vec![AppCommand::ScrollBy { delta }],
        AppIntent::PageScrollRequested { pages } => {
            let page = (state.view.viewport_size[1] - state.settings.scroll_step)
                .max(state.settings.scroll_step);
            vec![AppCommand::ScrollBy {
                delta: pages * page,
            }]
        }

        AppIntent::PrimaryPressed { pos } => {
            if label_pending || !state.gestures.relation.is_idle() {
                return vec![];
            }
            let hit = state
                .active_document()
                .and_then(|doc| state.view.layout().entity_at(doc, pos));
            match hit {
                Some(entity) => vec![AppCommand::ToggleEntitySelection {
                    entity: entity.clone(),
                }],
                None => vec![
                    AppCommand::ClearSelection,
                    AppCommand::BeginTokenSelection { pos },
                ],
            }
        }
        AppIntent::PointerMoved { pos } => {
            if matches!(
                state.gestures.selection.phase(),
                SelectionPhase::Dragging { .. }
            ) {
                vec![AppCommand::UpdateTokenSelection { pos }]
            } else if matches!(
                state.gestures.relation.phase(),
                RelationPhase::SourcePicked { .. }
            ) {
                vec![AppCommand::UpdateRelation { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PrimaryReleased { pos } => {
            if matches!(
                state.gestures.selection.phase(),
                SelectionPhase::Dragging { .. }
            ) {
                vec![AppCommand::FinishTokenSelection { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::SecondaryPressed { pos } => {
            if label_pending || !state.gestures.is_idle() {
                vec![]
            } else {
                vec![AppCommand::BeginRelation { pos }]
            }
        }
        AppIntent::SecondaryReleased { pos } => {
            if matches!(
                state.gestures.relation.phase(),
                RelationPhase::SourcePicked { .. }
            ) {
                vec![AppCommand::FinishRelation { pos }]
            } else {
                vec![]
            }
        }

        AppIntent::LabelChosen { label } => {
            if label_pending {
                vec![AppCommand::ConfirmLabel { label }]
            } else {
                vec![]
            }
        }
        AppIntent::CancelRequested => {
            if state.gestures.is_idle() {
                vec![AppCommand::ClearSelection]
            } else {
                vec![AppCommand::CancelGestures]
            }
        }

        AppIntent::AddEntityRequested { span, label } => {
            vec![AppCommand::AddEntity { span, label }]
        }
        AppIntent::RemoveEntityRequested { entity } => vec![AppCommand::RemoveEntity { entity }],
        AppIntent::AddRelationRequested {
            source,
            target,
            label,
        } => vec![AppCommand::AddRelation {
            source,
            target,
            label,
        }],
        AppIntent::RemoveRelationRequested { relation } => {
            vec![AppCommand::RemoveRelation { relation }]
        }
        AppIntent::DeleteSelectedRequested => {
            if state.selection.selected_entity.is_some() {
                vec![AppCommand::DeleteSelectedEntity]
            } else {
                vec![]
            }
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::GotoDocumentRequested { index } => vec![AppCommand::GotoDocument { index }],
        AppIntent::JumpDocumentsRequested { delta } => {
            vec![AppCommand::JumpDocuments { delta }]
        }
        AppIntent::FirstDocumentRequested => {
            if state.documents.is_empty() {
                vec![]
            } else {
                vec![AppCommand::GotoDocument { index: 0 }]
            }
        }
        AppIntent::LastDocumentRequested => match state.documents.len() {
            0 => vec![],
            len => vec![AppCommand::GotoDocument { index: len - 1 }],
        },

        AppIntent::AddCustomEntityLabelRequested { label } => {
            vec![AppCommand::AddCustomEntityLabel { label }]
        }
        AppIntent::AddCustomRelationLabelRequested { label } => {
            vec![AppCommand::AddCustomRelationLabel { label }]
        }
    }
}
