//! Zentrale Konfiguration des Annotators.
//!
//! `AnnotatorSettings` enthält Label-Registry, Farben und Engine-Parameter.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Einträge pro Undo-/Redo-Stack.
pub const HISTORY_CAPACITY: usize = 25;
/// History-Snapshot nach so vielen aufgezeichneten Befehlen schreiben (0 = nur beim Beenden).
pub const HISTORY_AUTOSAVE_EVERY: usize = 10;

// ── Darstellung ─────────────────────────────────────────────────────

/// Schriftgröße der Tokens in Pixeln.
pub const FONT_SIZE: f32 = 16.0;
/// Scroll-Schritt (Mausrad / Pfeiltasten) in Pixeln.
pub const SCROLL_STEP: f32 = 40.0;
/// Sprungweite bei Ctrl+Pfeil in der Dokument-Navigation.
pub const NAVIGATION_JUMP: isize = 10;

/// RGB-Farbe eines Labels
pub type Rgb = [u8; 3];

/// Geltungsbereich der Undo-/Redo-History.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryScope {
    /// Eine History für die ganze Sitzung, über Dateiwechsel hinweg
    #[default]
    Session,
    /// History wird beim Öffnen einer anderen Datei geleert
    PerFile,
}

/// Abgelehntes Custom-Label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// Leeres oder nur aus Leerzeichen bestehendes Label
    #[error("Label darf nicht leer sein")]
    Empty,
    /// Label ist bereits bekannt
    #[error("Label '{0}' existiert bereits")]
    AlreadyKnown(String),
}

/// Alle persistenten Einstellungen.
/// Wird als `token_span_annotator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorSettings {
    // ── Engine ──────────────────────────────────────────────────
    /// Kapazität pro Undo-/Redo-Stack
    pub history_capacity: usize,
    /// Geltungsbereich der History
    pub history_scope: HistoryScope,
    /// Snapshot-Intervall in aufgezeichneten Befehlen (0 = nur beim Beenden)
    pub history_autosave_every: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Schriftgröße der Tokens
    pub font_size: f32,
    /// Scroll-Schritt in Pixeln
    pub scroll_step: f32,

    // ── Labels ──────────────────────────────────────────────────
    /// Bekannte Entity-Typen in Anzeige-Reihenfolge
    pub known_entities: Vec<String>,
    /// Bekannte Relations-Typen in Anzeige-Reihenfolge
    pub known_relations: Vec<String>,
    /// Vom Benutzer angelegte Entity-Typen
    pub custom_entities: Vec<String>,
    /// Vom Benutzer angelegte Relations-Typen
    pub custom_relations: Vec<String>,
    /// Farbe pro Entity-Typ
    pub entity_colors: BTreeMap<String, Rgb>,
    /// Farbe pro Relations-Typ
    pub relation_colors: BTreeMap<String, Rgb>,
}

/// Standard-Entity-Typen (SciERC) mit Farben
const DEFAULT_ENTITY_COLORS: [(&str, Rgb); 7] = [
    ("Dataset", [233, 30, 99]),
    ("Task", [33, 150, 243]),
    ("Method", [76, 175, 80]),
    ("Metric", [255, 152, 0]),
    ("Material", [156, 39, 176]),
    ("Generic", [96, 125, 139]),
    ("OtherScientificTerm", [255, 193, 7]),
];

/// Standard-Relations-Typen (SciERC) mit Farben
const DEFAULT_RELATION_COLORS: [(&str, Rgb); 7] = [
    ("Used-For", [33, 150, 243]),
    ("Feature-Of", [76, 175, 80]),
    ("Hyponym-Of", [156, 39, 176]),
    ("Part-Of", [255, 152, 0]),
    ("Compare", [244, 67, 54]),
    ("Conjunction", [96, 125, 139]),
    ("Evaluate-For", [0, 150, 136]),
];

impl Default for AnnotatorSettings {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            history_scope: HistoryScope::default(),
            history_autosave_every: HISTORY_AUTOSAVE_EVERY,
            font_size: FONT_SIZE,
            scroll_step: SCROLL_STEP,
            known_entities: DEFAULT_ENTITY_COLORS
                .iter()
                .map(|(l, _)| l.to_string())
                .collect(),
            known_relations: DEFAULT_RELATION_COLORS
                .iter()
                .map(|(l, _)| l.to_string())
                .collect(),
            custom_entities: Vec::new(),
            custom_relations: Vec::new(),
            entity_colors: DEFAULT_ENTITY_COLORS
                .iter()
                .map(|(l, c)| (l.to_string(), *c))
                .collect(),
            relation_colors: DEFAULT_RELATION_COLORS
                .iter()
                .map(|(l, c)| (l.to_string(), *c))
                .collect(),
        }
    }
}

impl AnnotatorSettings {
    /// Lädt Einstellungen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    log::info!("Einstellungen geladen aus: {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Einstellungs-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Einstellungs-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Einstellungen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Einstellungen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Nimmt einen Entity-Typ in die Registry auf (mit generierter Farbe falls nötig).
    ///
    /// Gibt `true` zurück, wenn sich die Einstellungen geändert haben.
    pub fn register_entity_label(&mut self, label: &str) -> bool {
        register(&mut self.known_entities, &mut self.entity_colors, label)
    }

    /// Nimmt einen Relations-Typ in die Registry auf (mit generierter Farbe falls nötig).
    pub fn register_relation_label(&mut self, label: &str) -> bool {
        register(&mut self.known_relations, &mut self.relation_colors, label)
    }

    /// Legt einen neuen benutzerdefinierten Entity-Typ an.
    pub fn add_custom_entity_label(&mut self, label: &str) -> Result<String, LabelError> {
        let label = check_new_label(&self.known_entities, label)?;
        self.register_entity_label(&label);
        self.custom_entities.push(label.clone());
        Ok(label)
    }

    /// Legt einen neuen benutzerdefinierten Relations-Typ an.
    pub fn add_custom_relation_label(&mut self, label: &str) -> Result<String, LabelError> {
        let label = check_new_label(&self.known_relations, label)?;
        self.register_relation_label(&label);
        self.custom_relations.push(label.clone());
        Ok(label)
    }

    /// Farbe eines Entity-Typs (generiert, falls nicht konfiguriert)
    pub fn entity_color(&self, label: &str) -> Rgb {
        self.entity_colors
            .get(label)
            .copied()
            .unwrap_or_else(|| label_color(label))
    }

    /// Farbe eines Relations-Typs (generiert, falls nicht konfiguriert)
    pub fn relation_color(&self, label: &str) -> Rgb {
        self.relation_colors
            .get(label)
            .copied()
            .unwrap_or_else(|| label_color(label))
    }
}

fn register(known: &mut Vec<String>, colors: &mut BTreeMap<String, Rgb>, label: &str) -> bool {
    let mut changed = false;
    if !known.iter().any(|k| k == label) {
        known.push(label.to_string());
        changed = true;
    }
    if !colors.contains_key(label) {
        colors.insert(label.to_string(), label_color(label));
        changed = true;
    }
    changed
}

fn check_new_label(known: &[String], label: &str) -> Result<String, LabelError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(LabelError::Empty);
    }
    if known.iter().any(|k| k == label) {
        return Err(LabelError::AlreadyKnown(label.to_string()));
    }
    Ok(label.to_string())
}

/// Deterministische Farbe aus dem Label-Namen, jeder Kanal in `50..250`.
///
/// FNV-1a, damit die Farbe über Programmläufe und Plattformen stabil bleibt.
pub fn label_color(label: &str) -> Rgb {
    let hash = label.bytes().fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    });
    let channel = |shift: u32| ((hash >> shift) % 200) as u8 + 50;
    [channel(0), channel(16), channel(32)]
}

/// Pfade aller Sitzungsdateien.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    /// Einstellungen (TOML)
    pub settings: PathBuf,
    /// Zuletzt geöffnete Dateien (JSON)
    pub recent_files: PathBuf,
    /// Undo-/Redo-Snapshot (JSON)
    pub history: PathBuf,
}

impl SessionPaths {
    /// Dateinamen der Sitzungsdateien
    pub const SETTINGS_FILE: &'static str = "token_span_annotator.toml";
    /// Dateiname der Recent-Files-Liste
    pub const RECENT_FILES_FILE: &'static str = "recent_files.json";
    /// Dateiname des History-Snapshots
    pub const HISTORY_FILE: &'static str = "history.json";

    /// Alle Sitzungsdateien in einem Verzeichnis.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            settings: dir.join(Self::SETTINGS_FILE),
            recent_files: dir.join(Self::RECENT_FILES_FILE),
            history: dir.join(Self::HISTORY_FILE),
        }
    }

    /// Sitzungsdateien neben der Binary.
    pub fn default_beside_binary() -> Self {
        let exe = std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("token-span-annotator"));
        Self::in_dir(exe.parent().unwrap_or_else(|| Path::new(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_color_is_deterministic_and_in_range() {
        let a = label_color("Method");
        assert_eq!(a, label_color("Method"));
        for channel in a.iter().chain(label_color("X").iter()) {
            assert!((50..250).contains(channel));
        }
    }

    #[test]
    fn register_adds_label_and_color_once() {
        let mut settings = AnnotatorSettings::default();
        assert!(settings.register_entity_label("PERSON"));
        assert!(!settings.register_entity_label("PERSON"));
        assert!(settings.known_entities.iter().any(|l| l == "PERSON"));
        assert_eq!(settings.entity_color("PERSON"), label_color("PERSON"));
        // konfigurierte Farben bleiben erhalten
        assert!(!settings.register_entity_label("Task"));
        assert_eq!(settings.entity_color("Task"), [33, 150, 243]);
    }

    #[test]
    fn custom_labels_reject_empty_and_known() {
        let mut settings = AnnotatorSettings::default();
        assert_eq!(settings.add_custom_entity_label("  "), Err(LabelError::Empty));
        assert_eq!(
            settings.add_custom_relation_label("Used-For"),
            Err(LabelError::AlreadyKnown("Used-For".to_string()))
        );
        assert_eq!(
            settings.add_custom_relation_label(" Causes "),
            Ok("Causes".to_string())
        );
        assert_eq!(settings.custom_relations, vec!["Causes".to_string()]);
        assert!(settings.known_relations.iter().any(|l| l == "Causes"));
    }

    #[test]
    fn toml_roundtrip_and_partial_file_defaults() {
        let mut settings = AnnotatorSettings::default();
        settings.history_scope = HistoryScope::PerFile;
        settings.register_relation_label("WORKS_AT");

        let text = toml::to_string_pretty(&settings).expect("TOML-Serialisierung fehlgeschlagen");
        let parsed: AnnotatorSettings = toml::from_str(&text).expect("TOML-Parsing fehlgeschlagen");
        assert_eq!(parsed, settings);

        let partial: AnnotatorSettings =
            toml::from_str("history_capacity = 5\n").expect("TOML-Parsing fehlgeschlagen");
        assert_eq!(partial.history_capacity, 5);
        assert_eq!(partial.history_scope, HistoryScope::Session);
        assert_eq!(partial.known_entities.len(), 7);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("token_span_annotator_missing_settings.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            AnnotatorSettings::load_from_file(&path),
            AnnotatorSettings::default()
        );
    }
}
