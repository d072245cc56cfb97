//! JSONL Import/Export der Dokumentsammlung.
//!
//! Eine Zeile pro Dokument: `doc_key`, `sentences`, `ner`, `relations`.
//! `ner`/`relations` sind pro Satz gruppiert, enthalten aber globale Token-Indizes.

pub mod parser;
pub mod writer;

pub use parser::{load_jsonl, normalize_label, parse_jsonl, LoadReport, LoadWarning};
pub use writer::{document_to_value, save_jsonl, write_jsonl};
