//! Liste der zuletzt geöffneten Dateien (JSON).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximale Anzahl gemerkter Dateien.
pub const RECENT_FILES_MAX: usize = 10;

/// Zuletzt geöffnete Dateien, neueste zuerst
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFiles {
    paths: Vec<PathBuf>,
}

impl RecentFiles {
    /// Setzt einen Pfad an den Anfang. Duplikate werden verschoben, die Liste gekürzt.
    pub fn push(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
        self.paths.insert(0, path.to_path_buf());
        self.paths.truncate(RECENT_FILES_MAX);
    }

    /// Entfernt einen Pfad (z.B. wenn die Datei nicht mehr existiert)
    pub fn remove(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
    }

    /// Alle Pfade, neueste zuerst
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Zuletzt geöffnete Datei
    pub fn most_recent(&self) -> Option<&Path> {
        self.paths.first().map(PathBuf::as_path)
    }

    /// Lädt die Liste. Fehlende oder defekte Dateien ergeben eine leere Liste.
    pub fn load_from_file(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(mut recent) => {
                recent.paths.truncate(RECENT_FILES_MAX);
                recent
            }
            Err(e) => {
                log::warn!("Recent-Files-Datei fehlerhaft, wird ignoriert: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert die Liste als JSON.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
