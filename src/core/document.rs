//! Ein tokenisiertes Dokument mit seinen Entitäten und Relationen (Annotationsmodell).
//!
//! Tokens werden in einen globalen, 0-basierten Indexraum abgeflacht. Satzgrenzen
//! bleiben nur für Layout und die Satz-Gruppierung beim Speichern erhalten.
//!
//! Entitäten und Relationen liegen in `IndexSet`s: Mengen-Semantik (Duplikate sind
//! No-ops), aber stabile Reihenfolge, damit Laden→Speichern die Arrays unverändert
//! reproduziert und Undo exakt an die alte Position zurückschreibt.

use super::{AnnotationError, Entity, Relation, Span};
use indexmap::IndexSet;
use std::collections::HashMap;
use std::ops::Range;

/// Herkunft einer geladenen Annotationszeile im Austauschformat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowOrigin {
    /// Index der äußeren Gruppe (`ner[group]` bzw. `relations[group]`)
    pub group: usize,
    /// Laufende Nummer der Zeile über alle Gruppen des Feldes
    pub row: usize,
}

/// Ergebnis von `remove_entity`: alte Position und kaskadiert entfernte Relationen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRemoval {
    /// Index der Entity in der Entity-Menge vor dem Entfernen
    pub position: usize,
    /// Entfernte Relationen mit ihrem Index vor dem Entfernen (aufsteigend)
    pub cascaded: Vec<(usize, Relation)>,
}

/// Vollständiges Dokument inkl. Annotationen
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Dokument-Schlüssel (`doc_key`)
    pub key: String,
    /// `false` wenn der Schlüssel beim Laden fehlte und generiert wurde
    pub key_in_source: bool,
    sentences: Vec<Vec<String>>,
    /// Globaler Start-Index jedes Satzes
    sentence_starts: Vec<usize>,
    token_count: usize,
    entities: IndexSet<Entity>,
    relations: IndexSet<Relation>,
    /// Fundstellen geladener Entitäten (mehrere bei doppelten Zeilen)
    entity_origins: HashMap<Entity, Vec<RowOrigin>>,
    /// Fundstellen geladener Relationen
    relation_origins: HashMap<Relation, Vec<RowOrigin>>,
    /// Länge des äußeren `ner`-Arrays beim Laden (`None` wenn das Feld fehlte)
    pub ner_group_count: Option<usize>,
    /// Länge des äußeren `relations`-Arrays beim Laden
    pub relation_group_count: Option<usize>,
    /// Nicht erkannte Felder der Eingabezeile (werden beim Speichern angehängt)
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// Erstellt ein Dokument ohne Annotationen.
    pub fn new(key: impl Into<String>, sentences: Vec<Vec<String>>) -> Self {
        let mut sentence_starts = Vec::with_capacity(sentences.len());
        let mut token_count = 0;
        for sentence in &sentences {
            sentence_starts.push(token_count);
            token_count += sentence.len();
        }

        Self {
            key: key.into(),
            key_in_source: true,
            sentences,
            sentence_starts,
            token_count,
            entities: IndexSet::new(),
            relations: IndexSet::new(),
            entity_origins: HashMap::new(),
            relation_origins: HashMap::new(),
            ner_group_count: None,
            relation_group_count: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Gesamtzahl der Tokens über alle Sätze
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Sätze in Originalreihenfolge
    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    /// Anzahl der Sätze
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Globaler Token-Bereich eines Satzes.
    pub fn sentence_range(&self, sentence: usize) -> Option<Range<usize>> {
        let start = *self.sentence_starts.get(sentence)?;
        Some(start..start + self.sentences[sentence].len())
    }

    /// Satz, in dem ein globaler Token-Index liegt.
    pub fn sentence_of(&self, token: usize) -> Option<usize> {
        if token >= self.token_count {
            return None;
        }
        // partition_point liefert den ersten Satz mit Start > token
        let idx = self.sentence_starts.partition_point(|&start| start <= token);
        // Leere Sätze teilen sich den Start-Index mit dem Folgesatz
        let mut sentence = idx.checked_sub(1)?;
        while self.sentences[sentence].is_empty() {
            sentence = sentence.checked_sub(1)?;
        }
        Some(sentence)
    }

    /// Token-Text zu einem globalen Index.
    pub fn token(&self, index: usize) -> Option<&str> {
        let sentence = self.sentence_of(index)?;
        let local = index - self.sentence_starts[sentence];
        self.sentences[sentence].get(local).map(String::as_str)
    }

    /// Alle Tokens in globaler Reihenfolge
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().flatten().map(String::as_str)
    }

    /// Text eines Spans (Tokens mit Leerzeichen verbunden)
    pub fn span_text(&self, span: Span) -> String {
        (span.start..=span.end)
            .filter_map(|i| self.token(i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Entitäten in stabiler Reihenfolge
    pub fn entities(&self) -> &IndexSet<Entity> {
        &self.entities
    }

    /// Relationen in stabiler Reihenfolge
    pub fn relations(&self) -> &IndexSet<Relation> {
        &self.relations
    }

    /// Prüft ob die Entity existiert
    pub fn has_entity(&self, entity: &Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Prüft ob die Relation existiert
    pub fn has_relation(&self, relation: &Relation) -> bool {
        self.relations.contains(relation)
    }

    /// Alle Entitäten mit exakt diesem Span (verschiedene Typen möglich)
    pub fn entities_with_span(&self, span: Span) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.span == span)
    }

    /// Validiert einen Span gegen die Token-Anzahl.
    pub fn check_span(&self, span: Span) -> Result<(), AnnotationError> {
        if span.is_valid_for(self.token_count) {
            Ok(())
        } else {
            Err(AnnotationError::InvalidSpan {
                span,
                token_count: self.token_count,
            })
        }
    }

    /// Fügt eine Entity hinzu.
    ///
    /// Gibt `Some(position)` zurück wenn eingefügt, `None` wenn die Entity bereits existiert.
    pub fn add_entity(&mut self, entity: Entity) -> Result<Option<usize>, AnnotationError> {
        self.check_span(entity.span)?;
        let (position, inserted) = self.entities.insert_full(entity);
        Ok(inserted.then_some(position))
    }

    /// Entfernt eine Entity inklusive aller Relationen, deren Quell- oder Ziel-Span
    /// exakt dem Span der Entity entspricht.
    pub fn remove_entity(&mut self, entity: &Entity) -> Result<EntityRemoval, AnnotationError> {
        let Some((position, _)) = self.entities.shift_remove_full(entity) else {
            return Err(AnnotationError::NotFound(format!("Entity {entity}")));
        };

        let cascaded: Vec<(usize, Relation)> = self
            .relations
            .iter()
            .enumerate()
            .filter(|(_, r)| r.touches(entity.span))
            .map(|(i, r)| (i, r.clone()))
            .collect();
        for (_, relation) in &cascaded {
            self.relations.shift_remove(relation);
        }

        Ok(EntityRemoval { position, cascaded })
    }

    /// Fügt eine Relation hinzu. An den Endpunkten muss keine Entity existieren.
    ///
    /// Gibt `Some(position)` zurück wenn eingefügt, `None` wenn die Relation bereits existiert.
    pub fn add_relation(&mut self, relation: Relation) -> Result<Option<usize>, AnnotationError> {
        self.check_span(relation.source)?;
        self.check_span(relation.target)?;
        let (position, inserted) = self.relations.insert_full(relation);
        Ok(inserted.then_some(position))
    }

    /// Entfernt eine Relation und gibt ihre alte Position zurück.
    pub fn remove_relation(&mut self, relation: &Relation) -> Result<usize, AnnotationError> {
        self.relations
            .shift_remove_full(relation)
            .map(|(position, _)| position)
            .ok_or_else(|| AnnotationError::NotFound(format!("Relation {relation}")))
    }

    /// Fügt eine Entity an einer festen Position ein (Undo/Redo-Wiederherstellung).
    pub(crate) fn insert_entity_at(
        &mut self,
        position: usize,
        entity: Entity,
    ) -> Result<(), AnnotationError> {
        self.check_span(entity.span)?;
        let position = position.min(self.entities.len());
        self.entities.shift_insert(position, entity);
        Ok(())
    }

    /// Fügt eine Relation an einer festen Position ein (Undo/Redo-Wiederherstellung).
    pub(crate) fn insert_relation_at(
        &mut self,
        position: usize,
        relation: Relation,
    ) -> Result<(), AnnotationError> {
        self.check_span(relation.source)?;
        self.check_span(relation.target)?;
        let position = position.min(self.relations.len());
        self.relations.shift_insert(position, relation);
        Ok(())
    }

    /// Entfernt eine Entity ohne Kaskade (Rücknahme eines `add_entity`).
    pub(crate) fn take_entity(&mut self, entity: &Entity) -> Result<usize, AnnotationError> {
        self.entities
            .shift_remove_full(entity)
            .map(|(position, _)| position)
            .ok_or_else(|| AnnotationError::NotFound(format!("Entity {entity}")))
    }

    /// Merkt die Fundstelle einer geladenen Entity.
    ///
    /// Fundstellen bleiben auch nach dem Entfernen erhalten, damit ein Undo die
    /// Entity wieder in ihre ursprüngliche Gruppe schreibt.
    pub fn record_entity_origin(&mut self, entity: &Entity, origin: RowOrigin) {
        self.entity_origins
            .entry(entity.clone())
            .or_default()
            .push(origin);
    }

    /// Merkt die Fundstelle einer geladenen Relation.
    pub fn record_relation_origin(&mut self, relation: &Relation, origin: RowOrigin) {
        self.relation_origins
            .entry(relation.clone())
            .or_default()
            .push(origin);
    }

    /// Fundstellen einer Entity in der geladenen Datei (leer für neue Entitäten)
    pub fn entity_origins(&self, entity: &Entity) -> &[RowOrigin] {
        self.entity_origins.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fundstellen einer Relation in der geladenen Datei (leer für neue Relationen)
    pub fn relation_origins(&self, relation: &Relation) -> &[RowOrigin] {
        self.relation_origins.get(relation).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Anzahl der Entitäten
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Anzahl der Relationen
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}
