//! Parser für zeilenweises JSON (eine Dokument-Zeile pro Zeile).
//!
//! Fehlerhafte Zeilen brechen das Laden nie ab: sie werden übersprungen und als
//! Warnung im [`LoadReport`] vermerkt. Ungültige einzelne Entity-/Relations-Zeilen
//! werden verworfen, der Rest des Dokuments bleibt erhalten.

use crate::core::{Document, Entity, Relation, RowOrigin, Span};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Feldnamen des Austauschformats
pub(crate) const FIELD_DOC_KEY: &str = "doc_key";
pub(crate) const FIELD_SENTENCES: &str = "sentences";
pub(crate) const FIELD_NER: &str = "ner";
pub(crate) const FIELD_RELATIONS: &str = "relations";

/// Label für leere Listen-Labels
const UNKNOWN_LABEL: &str = "Unknown";

/// Eine Warnung beim Laden
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Zeilennummer in der Datei (1-basiert)
    pub line: usize,
    /// Beschreibung des Problems
    pub message: String,
}

/// Ergebnis eines Ladevorgangs
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Erfolgreich geparste Dokumente in Dateireihenfolge
    pub documents: Vec<Document>,
    /// Alle Warnungen (übersprungene Zeilen und verworfene Annotationen)
    pub warnings: Vec<LoadWarning>,
    /// Anzahl komplett übersprungener Zeilen
    pub skipped_lines: usize,
}

impl LoadReport {
    fn warn(&mut self, line: usize, message: String) {
        log::warn!("Zeile {}: {}", line, message);
        self.warnings.push(LoadWarning { line, message });
    }
}

/// Liest eine JSONL-Datei von der Platte.
///
/// Schlägt nur fehl, wenn die Datei nicht gelesen werden kann.
pub fn load_jsonl(path: &Path) -> Result<LoadReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path.display()))?;
    Ok(parse_jsonl(&content))
}

/// Parst den Inhalt einer JSONL-Datei. Leerzeilen werden still übersprungen.
pub fn parse_jsonl(content: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        match parse_document(idx, line, &mut report) {
            Ok(document) => report.documents.push(document),
            Err(message) => {
                report.skipped_lines += 1;
                report.warn(line_no, format!("Zeile übersprungen: {message}"));
            }
        }
    }

    log::info!(
        "{} Dokumente geladen, {} Zeilen übersprungen, {} Warnungen",
        report.documents.len(),
        report.skipped_lines,
        report.warnings.len()
    );
    report
}

/// Parst eine Zeile zu einem Dokument.
///
/// Die Felder `sentences`, `ner` und `relations` werden aus dem Objekt
/// herausgenommen und durch Platzhalter ersetzt, damit der Writer sie an
/// ihrer ursprünglichen Position wieder einsetzt.
fn parse_document(idx: usize, line: &str, report: &mut LoadReport) -> Result<Document, String> {
    let value: Value = serde_json::from_str(line).map_err(|e| format!("ungültiges JSON ({e})"))?;
    let Value::Object(mut fields) = value else {
        return Err("kein JSON-Objekt".to_string());
    };

    let sentences = match fields.get_mut(FIELD_SENTENCES) {
        Some(slot) => serde_json::from_value::<Vec<Vec<String>>>(slot.take())
            .map_err(|e| format!("'{FIELD_SENTENCES}' ist keine Liste von Token-Listen ({e})"))?,
        None => return Err(format!("Feld '{FIELD_SENTENCES}' fehlt")),
    };
    let ner = take_groups(&mut fields, FIELD_NER)?;
    let relations = take_groups(&mut fields, FIELD_RELATIONS)?;

    let (key, key_in_source) = match fields.get(FIELD_DOC_KEY) {
        Some(Value::String(key)) => (key.clone(), true),
        Some(other) => (other.to_string(), true),
        None => (format!("doc_{idx}"), false),
    };

    let line_no = idx + 1;
    let mut document = Document::new(key, sentences);
    document.key_in_source = key_in_source;

    document.ner_group_count = ner.as_ref().map(Vec::len);
    document.relation_group_count = relations.as_ref().map(Vec::len);

    for (origin, row) in rows_with_origin(ner.as_deref()) {
        match entity_from_row(row) {
            Ok(entity) => match document.add_entity(entity.clone()) {
                Ok(inserted) => {
                    if inserted.is_none() {
                        report.warn(line_no, format!("doppelte Entity {row} zusammengefasst"));
                    }
                    document.record_entity_origin(&entity, origin);
                }
                Err(e) => report.warn(line_no, format!("Entity {row} verworfen: {e}")),
            },
            Err(message) => report.warn(line_no, format!("Entity {row} verworfen: {message}")),
        }
    }

    for (origin, row) in rows_with_origin(relations.as_deref()) {
        match relation_from_row(row) {
            Ok(relation) => match document.add_relation(relation.clone()) {
                Ok(inserted) => {
                    if inserted.is_none() {
                        report.warn(line_no, format!("doppelte Relation {row} zusammengefasst"));
                    }
                    document.record_relation_origin(&relation, origin);
                }
                Err(e) => report.warn(line_no, format!("Relation {row} verworfen: {e}")),
            },
            Err(message) => report.warn(line_no, format!("Relation {row} verworfen: {message}")),
        }
    }

    document.extra = fields;
    Ok(document)
}

/// Nimmt ein optionales, pro Satz gruppiertes Array aus dem Objekt.
///
/// `None` wenn das Feld fehlt oder `null` ist.
fn take_groups(
    fields: &mut serde_json::Map<String, Value>,
    name: &str,
) -> Result<Option<Vec<Vec<Value>>>, String> {
    match fields.get_mut(name) {
        Some(slot) => match slot.take() {
            Value::Null => Ok(None),
            value => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| format!("'{name}' ist keine Liste von Gruppen ({e})")),
        },
        None => Ok(None),
    }
}

/// Alle Zeilen eines gruppierten Arrays mit ihrer Fundstelle.
fn rows_with_origin(groups: Option<&[Vec<Value>]>) -> impl Iterator<Item = (RowOrigin, &Value)> {
    groups
        .unwrap_or_default()
        .iter()
        .enumerate()
        .flat_map(|(group, rows)| rows.iter().map(move |row| (group, row)))
        .enumerate()
        .map(|(row, (group, value))| (RowOrigin { group, row }, value))
}

/// `[start, end, label]`, zusätzliche Elemente werden ignoriert.
fn entity_from_row(row: &Value) -> Result<Entity, String> {
    let items = row_items(row, 3)?;
    Ok(Entity {
        span: Span::new(index_at(items, 0)?, index_at(items, 1)?),
        label: normalize_label(&items[2]),
    })
}

/// `[srcStart, srcEnd, tgtStart, tgtEnd, label]`, zusätzliche Elemente werden ignoriert.
fn relation_from_row(row: &Value) -> Result<Relation, String> {
    let items = row_items(row, 5)?;
    Ok(Relation::new(
        Span::new(index_at(items, 0)?, index_at(items, 1)?),
        Span::new(index_at(items, 2)?, index_at(items, 3)?),
        normalize_label(&items[4]),
    ))
}

fn row_items(row: &Value, min_len: usize) -> Result<&[Value], String> {
    match row.as_array() {
        Some(items) if items.len() >= min_len => Ok(items),
        Some(items) => Err(format!(
            "{} Elemente, mindestens {min_len} erwartet",
            items.len()
        )),
        None => Err("kein Array".to_string()),
    }
}

fn index_at(items: &[Value], pos: usize) -> Result<usize, String> {
    items[pos]
        .as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| format!("Element {pos} ist kein Token-Index"))
}

/// Normalisiert ein Label: Listen liefern ihr erstes Element, leere Listen `"Unknown"`.
pub fn normalize_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .first()
            .map(normalize_label)
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        other => other.to_string(),
    }
}
