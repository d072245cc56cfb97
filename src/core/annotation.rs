//! Wertetypen der Annotation: Span, Entity, Relation.
//!
//! Entitäten und Relationen haben keine eigene Identität: zwei Werte mit
//! gleichen Feldern sind dieselbe Annotation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inklusiver Token-Bereich `[start, end]` im globalen Token-Indexraum eines Dokuments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Erster Token (inklusiv)
    pub start: usize,
    /// Letzter Token (inklusiv)
    pub end: usize,
}

impl Span {
    /// Erstellt einen Span ohne Validierung.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Erstellt einen Span aus zwei Token-Indizes in beliebiger Reihenfolge.
    pub fn normalized(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Prüft `start <= end < token_count`.
    pub fn is_valid_for(&self, token_count: usize) -> bool {
        self.start <= self.end && self.end < token_count
    }

    /// Anzahl der abgedeckten Tokens.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    /// Ein inklusiver Span ist nie leer.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Prüft ob ein Token-Index im Span liegt.
    pub fn contains(&self, token: usize) -> bool {
        self.start <= token && token <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Typ-Label einer Entity oder Relation (z.B. `"PERSON"`, `"Used-For"`).
pub type Label = String;

/// Ein gelabelter Token-Span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Abgedeckter Token-Bereich
    pub span: Span,
    /// Entity-Typ
    pub label: Label,
}

impl Entity {
    /// Erstellt eine neue Entity.
    pub fn new(start: usize, end: usize, label: impl Into<Label>) -> Self {
        Self {
            span: Span::new(start, end),
            label: label.into(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.span)
    }
}

/// Gerichtete, gelabelte Verbindung zwischen zwei Spans.
///
/// Referenziert Spans per Wert: eine Relation bleibt gültig, auch wenn an
/// einem Endpunkt aktuell keine Entity liegt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    /// Quell-Span
    pub source: Span,
    /// Ziel-Span
    pub target: Span,
    /// Relations-Typ
    pub label: Label,
}

impl Relation {
    /// Erstellt eine neue Relation aus zwei Spans.
    pub fn new(source: Span, target: Span, label: impl Into<Label>) -> Self {
        Self {
            source,
            target,
            label: label.into(),
        }
    }

    /// Prüft ob einer der beiden Endpunkte exakt dem Span entspricht.
    pub fn touches(&self, span: Span) -> bool {
        self.source == span || self.target == span
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} → {}", self.label, self.source, self.target)
    }
}
