use crate::core::{Entity, FontMetrics, Relation, Span};
use glam::Vec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// JSONL-Datei laden
    LoadFile { path: PathBuf },
    /// Datei speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveFile { path: Option<PathBuf> },
    /// Anwendung beenden
    RequestExit,
    /// Einstellungen, Recent-Files und History schreiben
    PersistSession,

    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Schriftmetriken setzen
    SetFontMetrics { metrics: FontMetrics },
    /// Scroll-Offset relativ ändern
    ScrollBy { delta: f32 },

    /// Span-Auswahl starten
    BeginTokenSelection { pos: Vec2 },
    /// Span-Auswahl aktualisieren
    UpdateTokenSelection { pos: Vec2 },
    /// Span-Auswahl abschließen (Typ-Auswahl öffnen)
    FinishTokenSelection { pos: Vec2 },
    /// Relation-Geste starten
    BeginRelation { pos: Vec2 },
    /// Relation-Geste aktualisieren
    UpdateRelation { pos: Vec2 },
    /// Relation-Geste abschließen (Typ-Auswahl öffnen)
    FinishRelation { pos: Vec2 },
    /// Wartende Geste mit Label abschließen
    ConfirmLabel { label: String },
    /// Laufende Gesten abbrechen
    CancelGestures,

    /// Entity selektieren bzw. abwählen
    ToggleEntitySelection { entity: Entity },
    /// Entity-Selektion aufheben
    ClearSelection,

    /// Entity anlegen
    AddEntity { span: Span, label: String },
    /// Entity inkl. Kaskade entfernen
    RemoveEntity { entity: Entity },
    /// Relation anlegen
    AddRelation {
        source: Span,
        target: Span,
        label: String,
    },
    /// Relation entfernen
    RemoveRelation { relation: Relation },
    /// Selektierte Entity entfernen
    DeleteSelectedEntity,

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Aktives Dokument setzen
    GotoDocument { index: usize },
    /// Relativ springen (geklemmt)
    JumpDocuments { delta: isize },

    /// Entity-Typ zur Registry hinzufügen
    AddCustomEntityLabel { label: String },
    /// Relations-Typ zur Registry hinzufügen
    AddCustomRelationLabel { label: String },

    /// Sitzungsprotokoll ein-/ausblenden
    ToggleCommandLog,
}

impl AppCommand {
    /// Text für das Sitzungsprotokoll.
    ///
    /// `None` für Commands, die bei Zeiger-, Scroll- oder Fensteränderungen
    /// laufend anfallen, und für reine Dialog-Anforderungen.
    pub fn journal_text(&self) -> Option<String> {
        let text = match self {
            Self::LoadFile { path } => format!("Öffnen: {}", path.display()),
            Self::SaveFile { path: None } => "Speichern".to_string(),
            Self::SaveFile { path: Some(path) } => {
                format!("Speichern unter: {}", path.display())
            }
            Self::RequestExit => "Beenden".to_string(),
            Self::PersistSession => "Sitzung sichern".to_string(),
            Self::ConfirmLabel { label } => format!("Label gewählt: {label}"),
            Self::AddEntity { span, label } => format!("Entity anlegen: {label} {span}"),
            Self::RemoveEntity { entity } => format!("Entity entfernen: {entity}"),
            Self::AddRelation {
                source,
                target,
                label,
            } => format!("Relation anlegen: {label} {source} → {target}"),
            Self::RemoveRelation { relation } => format!("Relation entfernen: {relation}"),
            Self::DeleteSelectedEntity => "Selektierte Entity löschen".to_string(),
            Self::Undo => "Rückgängig".to_string(),
            Self::Redo => "Wiederholen".to_string(),
            Self::GotoDocument { index } => format!("Gehe zu Dokument {}", index + 1),
            Self::JumpDocuments { delta } => format!("Springe {delta:+} Dokumente"),
            Self::AddCustomEntityLabel { label } => format!("Entity-Typ hinzufügen: {label}"),
            Self::AddCustomRelationLabel { label } => {
                format!("Relations-Typ hinzufügen: {label}")
            }
            Self::RequestOpenFileDialog
            | Self::RequestSaveFileDialog
            | Self::SetViewportSize { .. }
            | Self::SetFontMetrics { .. }
            | Self::ScrollBy { .. }
            | Self::BeginTokenSelection { .. }
            | Self::UpdateTokenSelection { .. }
            | Self::FinishTokenSelection { .. }
            | Self::BeginRelation { .. }
            | Self::UpdateRelation { .. }
            | Self::FinishRelation { .. }
            | Self::CancelGestures
            | Self::ToggleEntitySelection { .. }
            | Self::ClearSelection
            | Self::ToggleCommandLog => return None,
        };
        Some(text)
    }
}
