//! Writer für zeilenweises JSON.
//!
//! Geladene Annotationen landen wieder in ihrer ursprünglichen Gruppe und an
//! ihrer ursprünglichen Position, auch doppelte Zeilen. Neue Entitäten werden
//! nach dem Satz ihres Start-Tokens gruppiert, neue Relationen nach dem Satz
//! des Quell-Starts, jeweils hinter den geladenen Zeilen der Gruppe. Die Länge
//! des äußeren Arrays bleibt wie geladen, ohne Quelle gibt es eine Gruppe pro
//! Satz.

use super::parser::{FIELD_DOC_KEY, FIELD_NER, FIELD_RELATIONS, FIELD_SENTENCES};
use crate::core::{Document, RowOrigin};
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::path::Path;

/// Serialisiert alle Dokumente, eine Zeile pro Dokument (mit abschließendem Zeilenumbruch).
pub fn write_jsonl(documents: &[Document]) -> Result<String> {
    let mut output = String::new();
    for document in documents {
        let line = serde_json::to_string(&document_to_value(document))
            .with_context(|| format!("Dokument '{}' nicht serialisierbar", document.key))?;
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}

/// Schreibt alle Dokumente in eine Datei.
pub fn save_jsonl(path: &Path, documents: &[Document]) -> Result<()> {
    let content = write_jsonl(documents)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path.display()))?;
    log::info!("{} Dokumente gespeichert: {}", documents.len(), path.display());
    Ok(())
}

/// Baut das JSON-Objekt eines Dokuments.
///
/// Übernommene Zusatzfelder behalten ihre Reihenfolge; die Platzhalter für
/// `sentences`, `ner` und `relations` werden an Ort und Stelle überschrieben.
pub fn document_to_value(document: &Document) -> Value {
    let mut object = Map::with_capacity(document.extra.len() + 4);
    if document.key_in_source && !document.extra.contains_key(FIELD_DOC_KEY) {
        object.insert(FIELD_DOC_KEY.to_string(), Value::String(document.key.clone()));
    }
    for (name, value) in &document.extra {
        object.insert(name.clone(), value.clone());
    }

    object.insert(FIELD_SENTENCES.to_string(), json!(document.sentences()));
    object.insert(FIELD_NER.to_string(), Value::Array(entity_groups(document)));
    object.insert(
        FIELD_RELATIONS.to_string(),
        Value::Array(relation_groups(document)),
    );
    Value::Object(object)
}

fn entity_groups(document: &Document) -> Vec<Value> {
    let rows = document.entities().iter().map(|entity| PlacedRow {
        origins: document.entity_origins(entity),
        fallback_group: document.sentence_of(entity.span.start),
        value: json!([entity.span.start, entity.span.end, entity.label]),
    });
    arrange_groups(rows, document.ner_group_count, document.sentence_count())
}

fn relation_groups(document: &Document) -> Vec<Value> {
    let rows = document.relations().iter().map(|relation| PlacedRow {
        origins: document.relation_origins(relation),
        fallback_group: document.sentence_of(relation.source.start),
        value: json!([
            relation.source.start,
            relation.source.end,
            relation.target.start,
            relation.target.end,
            relation.label
        ]),
    });
    arrange_groups(
        rows,
        document.relation_group_count,
        document.sentence_count(),
    )
}

/// Eine zu schreibende Zeile mit ihren Fundstellen
struct PlacedRow<'a> {
    origins: &'a [RowOrigin],
    fallback_group: Option<usize>,
    value: Value,
}

/// Sortiert Zeilen in Gruppen: geladene nach Fundstelle, neue dahinter in Modellreihenfolge.
fn arrange_groups<'a>(
    rows: impl Iterator<Item = PlacedRow<'a>>,
    source_group_count: Option<usize>,
    sentence_count: usize,
) -> Vec<Value> {
    // (Gruppe, neu?, Reihenfolge, Zeile)
    let mut placed: Vec<(usize, bool, usize, Value)> = Vec::new();
    for (position, row) in rows.enumerate() {
        if row.origins.is_empty() {
            if let Some(group) = row.fallback_group {
                placed.push((group, true, position, row.value));
            }
            continue;
        }
        for origin in row.origins {
            placed.push((origin.group, false, origin.row, row.value.clone()));
        }
    }
    placed.sort_by_key(|(group, is_new, order, _)| (*group, *is_new, *order));

    let group_count = placed
        .iter()
        .map(|(group, ..)| group + 1)
        .max()
        .unwrap_or(0)
        .max(source_group_count.unwrap_or(sentence_count));
    let mut groups = vec![Vec::new(); group_count];
    for (group, _, _, value) in placed {
        groups[group].push(value);
    }
    groups.into_iter().map(Value::Array).collect()
}
