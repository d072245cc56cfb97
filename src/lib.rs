//! Token-Span-Annotator Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod jsonl;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DocumentRef, EditHistory, HistoryCommand,
    UiState, ViewState,
};
pub use core::{
    AnnotationError, Document, DocumentStore, Entity, FontMetrics, Relation, Span, TokenLayout,
};
pub use jsonl::{load_jsonl, parse_jsonl, save_jsonl, write_jsonl};
pub use shared::{AnnotatorSettings, RenderScene, SessionPaths};
