//! Fehlertypen des Annotationsmodells.

use super::Span;
use thiserror::Error;

/// Abgelehnte Mutation am Annotationsmodell. Das Modell bleibt dabei unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// Span verletzt `0 <= start <= end < token_count`
    #[error("ungültiger Span {span} (Dokument hat {token_count} Tokens)")]
    InvalidSpan {
        /// Abgelehnter Span
        span: Span,
        /// Token-Anzahl des Zieldokuments
        token_count: usize,
    },
    /// Zu entfernende Annotation existiert nicht
    #[error("nicht gefunden: {0}")]
    NotFound(String),
    /// Dokument-Index außerhalb der geladenen Sammlung
    #[error("kein Dokument mit Index {0}")]
    NoDocument(usize),
}
