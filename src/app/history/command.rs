//! Umkehrbare Befehle auf dem Annotationsmodell.

use crate::core::{AnnotationError, Document, DocumentStore, Entity, Relation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fehler beim Anwenden, Rückgängigmachen oder Wiederholen eines Befehls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo-Stack ist leer
    #[error("nichts zum Rückgängigmachen")]
    NothingToUndo,
    /// Redo-Stack ist leer
    #[error("nichts zum Wiederholen")]
    NothingToRedo,
    /// Das Zieldokument eines Befehls ist nicht (mehr) geladen
    #[error("Befehl gehört zu Dokument '{expected}' an Index {index}, geladen ist {found:?}")]
    TargetMismatch {
        /// Dokument-Index im Befehl
        index: usize,
        /// Erwarteter Dokument-Schlüssel
        expected: String,
        /// Tatsächlich geladener Schlüssel an diesem Index
        found: Option<String>,
    },
    /// Das Modell hat die Mutation abgelehnt
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}

/// Verweis auf das Zieldokument eines Befehls.
///
/// Index und Schlüssel zusammen, damit ein persistierter Befehl nach einem
/// Dateiwechsel nicht auf ein fremdes Dokument angewendet wird.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Position in der Dokumentsammlung
    pub index: usize,
    /// `doc_key` des Dokuments
    pub key: String,
}

impl DocumentRef {
    /// Verweis auf das Dokument an `index`.
    pub fn new(index: usize, key: impl Into<String>) -> Self {
        Self {
            index,
            key: key.into(),
        }
    }

    /// Verweis auf das aktive Dokument eines Stores
    pub fn active(store: &DocumentStore) -> Option<Self> {
        store
            .active()
            .map(|doc| Self::new(store.active_index(), doc.key.clone()))
    }

    /// Löst den Verweis gegen den Store auf.
    pub fn resolve<'a>(&self, store: &'a mut DocumentStore) -> Result<&'a mut Document, HistoryError> {
        let found = store.get(self.index).map(|doc| doc.key.clone());
        if found.as_deref() != Some(self.key.as_str()) {
            return Err(HistoryError::TargetMismatch {
                index: self.index,
                expected: self.key.clone(),
                found,
            });
        }
        Ok(store.get_mut(self.index)?)
    }
}

/// Eine per Kaskade entfernte Relation mit ihrer alten Position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadedRelation {
    /// Index in der Relationsmenge vor dem Entfernen
    pub position: usize,
    /// Entfernte Relation
    pub relation: Relation,
}

/// Umkehrbarer Datensatz einer Mutation.
///
/// Trägt den vollständigen Wert (nicht nur ein Diff), damit Apply und Revert
/// ohne weiteren Kontext möglich sind. Positionen werden beim Anwenden
/// festgehalten, damit Revert die exakte Reihenfolge wiederherstellt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum HistoryCommand {
    /// Entity hinzufügen
    AddEntity {
        /// Zieldokument
        document: DocumentRef,
        /// Neue Entity
        entity: Entity,
    },
    /// Entity entfernen inkl. aller Relationen mit passendem Endpunkt
    RemoveEntityWithCascade {
        /// Zieldokument
        document: DocumentRef,
        /// Entfernte Entity
        entity: Entity,
        /// Position der Entity vor dem Entfernen
        #[serde(default)]
        position: usize,
        /// Mit entfernte Relationen (aufsteigende Position)
        #[serde(default)]
        cascaded_relations: Vec<CascadedRelation>,
    },
    /// Relation hinzufügen
    AddRelation {
        /// Zieldokument
        document: DocumentRef,
        /// Neue Relation
        relation: Relation,
    },
    /// Relation entfernen
    RemoveRelation {
        /// Zieldokument
        document: DocumentRef,
        /// Entfernte Relation
        relation: Relation,
        /// Position vor dem Entfernen
        #[serde(default)]
        position: usize,
    },
}

impl HistoryCommand {
    /// Befehl zum Entfernen einer Entity (Kaskade wird beim Anwenden ermittelt).
    pub fn remove_entity(document: DocumentRef, entity: Entity) -> Self {
        Self::RemoveEntityWithCascade {
            document,
            entity,
            position: 0,
            cascaded_relations: Vec::new(),
        }
    }

    /// Befehl zum Entfernen einer Relation.
    pub fn remove_relation(document: DocumentRef, relation: Relation) -> Self {
        Self::RemoveRelation {
            document,
            relation,
            position: 0,
        }
    }

    /// Zieldokument des Befehls
    pub fn document(&self) -> &DocumentRef {
        match self {
            Self::AddEntity { document, .. }
            | Self::RemoveEntityWithCascade { document, .. }
            | Self::AddRelation { document, .. }
            | Self::RemoveRelation { document, .. } => document,
        }
    }

    /// Kurzbeschreibung für Log und Statuszeile
    pub fn describe(&self) -> String {
        match self {
            Self::AddEntity { entity, .. } => format!("Entity {entity} hinzugefügt"),
            Self::RemoveEntityWithCascade {
                entity,
                cascaded_relations,
                ..
            } => format!(
                "Entity {entity} entfernt ({} Relationen)",
                cascaded_relations.len()
            ),
            Self::AddRelation { relation, .. } => format!("Relation {relation} hinzugefügt"),
            Self::RemoveRelation { relation, .. } => format!("Relation {relation} entfernt"),
        }
    }

    /// Wendet den Befehl vorwärts an und hält Positionen für Revert fest.
    ///
    /// Gibt `false` zurück, wenn das Modell unverändert blieb (Duplikat).
    pub fn apply(&mut self, document: &mut Document) -> Result<bool, AnnotationError> {
        match self {
            Self::AddEntity { entity, .. } => Ok(document.add_entity(entity.clone())?.is_some()),
            Self::RemoveEntityWithCascade {
                entity,
                position,
                cascaded_relations,
                ..
            } => {
                let removal = document.remove_entity(entity)?;
                *position = removal.position;
                *cascaded_relations = removal
                    .cascaded
                    .into_iter()
                    .map(|(position, relation)| CascadedRelation { position, relation })
                    .collect();
                Ok(true)
            }
            Self::AddRelation { relation, .. } => {
                Ok(document.add_relation(relation.clone())?.is_some())
            }
            Self::RemoveRelation {
                relation, position, ..
            } => {
                *position = document.remove_relation(relation)?;
                Ok(true)
            }
        }
    }

    /// Macht einen angewendeten Befehl rückgängig.
    pub fn revert(&self, document: &mut Document) -> Result<(), AnnotationError> {
        match self {
            Self::AddEntity { entity, .. } => {
                document.take_entity(entity)?;
            }
            Self::RemoveEntityWithCascade {
                entity,
                position,
                cascaded_relations,
                ..
            } => {
                document.insert_entity_at(*position, entity.clone())?;
                // aufsteigend einfügen, dann stimmen alle Positionen wieder
                for cascaded in cascaded_relations {
                    document.insert_relation_at(cascaded.position, cascaded.relation.clone())?;
                }
            }
            Self::AddRelation { relation, .. } => {
                document.remove_relation(relation)?;
            }
            Self::RemoveRelation {
                relation, position, ..
            } => {
                document.insert_relation_at(*position, relation.clone())?;
            }
        }
        Ok(())
    }
}
