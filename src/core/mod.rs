//! Core-Domänentypen: Spans, Entitäten, Relationen, Dokumente und Token-Layout.

pub mod annotation;
/// Annotationsmodell eines Dokuments
///
/// Hält Sätze, Entitäten und Relationen und erzwingt die Span-Invarianten:
/// - Entity-Spans und beide Relations-Endpunkte liegen im Token-Bereich
/// - Entfernen einer Entity kaskadiert auf Relationen mit passendem Endpunkt
pub mod document;
pub mod document_store;
pub mod error;
pub mod layout;

pub use annotation::{Entity, Label, Relation, Span};
pub use document::{Document, EntityRemoval, RowOrigin};
pub use document_store::DocumentStore;
pub use error::AnnotationError;
pub use layout::{FontMetrics, LayoutLine, SpanSegment, TextMeasure, TokenBox, TokenLayout};
