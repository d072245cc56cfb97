//! Undo/Redo-History auf Basis umkehrbarer Befehle.
//!
//! Jede Mutation am Annotationsmodell läuft über [`EditHistory::push`]. Beide
//! Stacks sind begrenzt; bei Überlauf fällt der älteste Eintrag weg.

mod command;
mod snapshot;

pub use command::{CascadedRelation, DocumentRef, HistoryCommand, HistoryError};
pub use snapshot::HistorySnapshot;

use crate::core::DocumentStore;
use crate::shared::options::HISTORY_CAPACITY;
use std::path::PathBuf;

/// Befehlsbasierter Undo/Redo-Manager.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<HistoryCommand>,
    redo_stack: Vec<HistoryCommand>,
    max_depth: usize,
    /// Datei, zu der die Einträge gehören (für den Geltungsbereich pro Datei)
    pub source_path: Option<PathBuf>,
    recorded_since_persist: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(HISTORY_CAPACITY)
    }
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
            source_path: None,
            recorded_since_persist: 0,
        }
    }

    /// Maximale Tiefe pro Stack
    pub fn capacity(&self) -> usize {
        self.max_depth
    }

    /// Ändert die Tiefe; überzählige älteste Einträge werden verworfen.
    pub fn set_capacity(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        trim_oldest(&mut self.undo_stack, max_depth);
        trim_oldest(&mut self.redo_stack, max_depth);
    }

    /// Wendet einen Befehl an und legt ihn auf den Undo-Stack.
    ///
    /// Der Redo-Stack wird geleert. Befehle ohne Wirkung (Duplikate) werden
    /// nicht aufgezeichnet; dann ist das Ergebnis `Ok(false)`.
    pub fn push(
        &mut self,
        store: &mut DocumentStore,
        mut command: HistoryCommand,
    ) -> Result<bool, HistoryError> {
        let document = command.document().resolve(store)?;
        if !command.apply(document)? {
            log::debug!("Keine Änderung, nicht aufgezeichnet: {}", command.describe());
            return Ok(false);
        }

        log::info!("{}", command.describe());
        push_bounded(&mut self.undo_stack, command, self.max_depth);
        self.redo_stack.clear();
        self.recorded_since_persist += 1;
        Ok(true)
    }

    /// Macht den jüngsten Befehl rückgängig.
    ///
    /// Passt das Zieldokument nicht zum geladenen Stand, bleibt der Eintrag
    /// liegen und der Fehler wird gemeldet. Ein Eintrag, dessen Revert am
    /// Dokument scheitert, wird verworfen.
    pub fn undo(&mut self, store: &mut DocumentStore) -> Result<DocumentRef, HistoryError> {
        let command = self.undo_stack.last().ok_or(HistoryError::NothingToUndo)?;
        let document = command.document().resolve(store)?;
        let reverted = command.revert(document);

        let Some(command) = self.undo_stack.pop() else {
            return Err(HistoryError::NothingToUndo);
        };
        if let Err(e) = reverted {
            log::warn!("Undo verworfen: {} ({})", command.describe(), e);
            return Err(e.into());
        }

        log::info!("Undo: {}", command.describe());
        let target = command.document().clone();
        push_bounded(&mut self.redo_stack, command, self.max_depth);
        Ok(target)
    }

    /// Wiederholt den zuletzt rückgängig gemachten Befehl.
    ///
    /// Verhält sich bei fremdem Zieldokument wie [`EditHistory::undo`].
    pub fn redo(&mut self, store: &mut DocumentStore) -> Result<DocumentRef, HistoryError> {
        let command = self.redo_stack.last_mut().ok_or(HistoryError::NothingToRedo)?;
        let document = command.document().resolve(store)?;
        let applied = command.apply(document);

        let Some(command) = self.redo_stack.pop() else {
            return Err(HistoryError::NothingToRedo);
        };
        if let Err(e) = applied {
            log::warn!("Redo verworfen: {} ({})", command.describe(), e);
            return Err(e.into());
        }

        log::info!("Redo: {}", command.describe());
        let target = command.document().clone();
        push_bounded(&mut self.undo_stack, command, self.max_depth);
        Ok(target)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo-Einträge, ältester zuerst
    pub fn undo_entries(&self) -> &[HistoryCommand] {
        &self.undo_stack
    }

    /// Redo-Einträge, ältester zuerst
    pub fn redo_entries(&self) -> &[HistoryCommand] {
        &self.redo_stack
    }

    /// Leert beide Stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.recorded_since_persist = 0;
    }

    /// Anzahl aufgezeichneter Befehle seit dem letzten Snapshot
    pub fn recorded_since_persist(&self) -> usize {
        self.recorded_since_persist
    }

    /// Markiert den aktuellen Stand als persistiert.
    pub fn mark_persisted(&mut self) {
        self.recorded_since_persist = 0;
    }

    /// Erstellt einen serialisierbaren Snapshot beider Stacks.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            version: HistorySnapshot::VERSION,
            source_path: self.source_path.clone(),
            undo: self.undo_stack.clone(),
            redo: self.redo_stack.clone(),
        }
    }

    /// Stellt die Stacks aus einem Snapshot wieder her (älteste Einträge über der Tiefe fallen weg).
    pub fn restore(&mut self, snapshot: HistorySnapshot) {
        self.undo_stack = snapshot.undo;
        self.redo_stack = snapshot.redo;
        self.source_path = snapshot.source_path;
        trim_oldest(&mut self.undo_stack, self.max_depth);
        trim_oldest(&mut self.redo_stack, self.max_depth);
        self.recorded_since_persist = 0;
    }
}

fn push_bounded(stack: &mut Vec<HistoryCommand>, command: HistoryCommand, max_depth: usize) {
    if max_depth == 0 {
        return;
    }
    if stack.len() >= max_depth {
        stack.remove(0);
    }
    stack.push(command);
}

fn trim_oldest(stack: &mut Vec<HistoryCommand>, max_depth: usize) {
    if stack.len() > max_depth {
        stack.drain(..stack.len() - max_depth);
    }
}
