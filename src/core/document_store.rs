//! Geordnete Sammlung geladener Dokumente mit aktivem Index.

use super::{AnnotationError, Document};
use std::path::PathBuf;

/// Alle Dokumente einer geöffneten Datei
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    active: usize,
    /// Pfad der Quelldatei (None wenn nicht aus Datei geladen)
    pub source_path: Option<PathBuf>,
    dirty: bool,
}

impl DocumentStore {
    /// Erstellt einen Store; das erste Dokument ist aktiv.
    pub fn new(documents: Vec<Document>, source_path: Option<PathBuf>) -> Self {
        Self {
            documents,
            active: 0,
            source_path,
            dirty: false,
        }
    }

    /// Anzahl der Dokumente
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Prüft ob keine Dokumente geladen sind
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Index des aktiven Dokuments
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Aktives Dokument
    pub fn active(&self) -> Option<&Document> {
        self.documents.get(self.active)
    }

    /// Aktives Dokument (mutierbar)
    pub fn active_mut(&mut self) -> Option<&mut Document> {
        self.documents.get_mut(self.active)
    }

    /// Dokument per Index
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Dokument per Index (mutierbar)
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Document, AnnotationError> {
        self.documents
            .get_mut(index)
            .ok_or(AnnotationError::NoDocument(index))
    }

    /// Alle Dokumente in Dateireihenfolge
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Setzt das aktive Dokument. Ungültige Indizes werden abgelehnt.
    pub fn goto(&mut self, index: usize) -> Result<(), AnnotationError> {
        if index >= self.documents.len() {
            return Err(AnnotationError::NoDocument(index));
        }
        self.active = index;
        Ok(())
    }

    /// Springt relativ zum aktiven Dokument, geklemmt auf `[0, len - 1]`.
    ///
    /// Gibt den neuen aktiven Index zurück.
    pub fn jump(&mut self, delta: isize) -> usize {
        if self.documents.is_empty() {
            return 0;
        }
        let last = self.documents.len() - 1;
        self.active = self.active.saturating_add_signed(delta).min(last);
        self.active
    }

    /// Ungespeicherte Änderungen vorhanden?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Markiert den Store als geändert
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Markiert den Store als gespeichert
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Gesamtzahl aller Entitäten über alle Dokumente
    pub fn total_entities(&self) -> usize {
        self.documents.iter().map(Document::entity_count).sum()
    }

    /// Gesamtzahl aller Relationen über alle Dokumente
    pub fn total_relations(&self) -> usize {
        self.documents.iter().map(Document::relation_count).sum()
    }
}
