//! Persistenter Snapshot der Undo-/Redo-Stacks (JSON).

use super::HistoryCommand;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serialisierte History, geladen beim Start und geschrieben beim Beenden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// Format-Version
    pub version: u32,
    /// Datei, zu der die Einträge gehören
    #[serde(default)]
    pub source_path: Option<PathBuf>,
    /// Undo-Einträge, ältester zuerst
    #[serde(default)]
    pub undo: Vec<HistoryCommand>,
    /// Redo-Einträge, ältester zuerst
    #[serde(default)]
    pub redo: Vec<HistoryCommand>,
}

impl HistorySnapshot {
    /// Aktuelle Format-Version
    pub const VERSION: u32 = 1;

    /// Lädt einen Snapshot. Fehlende oder defekte Dateien ergeben eine leere History.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("Kein History-Snapshot gefunden, starte mit leerer History");
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(snapshot) if snapshot.version == Self::VERSION => {
                log::info!(
                    "History geladen: {} Undo, {} Redo",
                    snapshot.undo.len(),
                    snapshot.redo.len()
                );
                snapshot
            }
            Ok(snapshot) => {
                log::warn!(
                    "History-Snapshot mit unbekannter Version {} verworfen",
                    snapshot.version
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("History-Snapshot fehlerhaft, wird verworfen: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert den Snapshot als JSON.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::debug!("History gespeichert nach: {}", path.display());
        Ok(())
    }
}
