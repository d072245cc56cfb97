use crate::core::{Entity, FontMetrics, Relation, Span};
use glam::Vec2;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Pointer-Positionen sind relativ zur linken oberen Ecke des Dokumentbereichs.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: PathBuf },
    /// Eintrag aus der Recent-Files-Liste gewählt
    RecentFileSelected { path: PathBuf },
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: PathBuf },
    /// Anwendung beenden
    ExitRequested,

    /// Größe des Dokumentbereichs hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Schriftmetriken des Hosts haben sich geändert
    FontMetricsChanged { metrics: FontMetrics },
    /// Vertikal scrollen (Pixel, positiv = nach unten)
    ScrollRequested { delta: f32 },
    /// Seitenweise scrollen (positiv = nach unten)
    PageScrollRequested { pages: f32 },

    /// Primäre Maustaste gedrückt
    PrimaryPressed { pos: Vec2 },
    /// Pointer bewegt (mit gedrückter Taste)
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PrimaryReleased { pos: Vec2 },
    /// Sekundäre Maustaste gedrückt
    SecondaryPressed { pos: Vec2 },
    /// Sekundäre Maustaste losgelassen
    SecondaryReleased { pos: Vec2 },

    /// Label im Auswahlfenster bestätigt
    LabelChosen { label: String },
    /// Escape: laufende Geste bzw. Selektion abbrechen
    CancelRequested,

    /// Entity direkt anlegen
    AddEntityRequested { span: Span, label: String },
    /// Entity entfernen (mit Kaskade)
    RemoveEntityRequested { entity: Entity },
    /// Relation direkt anlegen
    AddRelationRequested {
        source: Span,
        target: Span,
        label: String,
    },
    /// Relation entfernen
    RemoveRelationRequested { relation: Relation },
    /// Selektierte Entity löschen
    DeleteSelectedRequested,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Zu Dokument springen (0-basiert)
    GotoDocumentRequested { index: usize },
    /// Relativ springen (geklemmt)
    JumpDocumentsRequested { delta: isize },
    /// Erstes Dokument
    FirstDocumentRequested,
    /// Letztes Dokument
    LastDocumentRequested,

    /// Neuen Entity-Typ anlegen
    AddCustomEntityLabelRequested { label: String },
    /// Neuen Relations-Typ anlegen
    AddCustomRelationLabelRequested { label: String },

    /// Sitzungsprotokoll ein-/ausblenden
    CommandLogToggled,
}
