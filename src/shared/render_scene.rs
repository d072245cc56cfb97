//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Koordinaten sind Viewport-Koordinaten (Scroll bereits abgezogen).

use super::options::Rgb;
use glam::Vec2;

/// Sichtbarer Token mit Text und Rechteck.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenItem {
    /// Globaler Token-Index
    pub index: usize,
    /// Token-Text
    pub text: String,
    /// Linke obere Ecke
    pub min: Vec2,
    /// Rechte untere Ecke
    pub max: Vec2,
}

/// Hervorhebung einer Entity (ein Rechteck pro überdeckter Zeile).
#[derive(Debug, Clone, PartialEq)]
pub struct EntityItem {
    /// Entity-Typ
    pub label: String,
    /// Farbe des Typs
    pub color: Rgb,
    /// Rechtecke als (min, max)
    pub segments: Vec<(Vec2, Vec2)>,
    /// Per Klick selektiert
    pub selected: bool,
}

/// Pfeil einer Relation zwischen den Ankerpunkten zweier Spans.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationItem {
    /// Relations-Typ
    pub label: String,
    /// Farbe des Typs
    pub color: Rgb,
    /// Anker der Quelle
    pub from: Vec2,
    /// Anker des Ziels
    pub to: Vec2,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Zeilenhöhe inkl. Padding
    pub line_height: f32,
    /// Tokens der sichtbaren Zeilen
    pub tokens: Vec<TokenItem>,
    /// Entitäten mit mindestens einem sichtbaren Segment
    pub entities: Vec<EntityItem>,
    /// Relationen, deren Endpunkte im Layout liegen
    pub relations: Vec<RelationItem>,
    /// Kandidat der laufenden Span-Auswahl
    pub candidate: Vec<(Vec2, Vec2)>,
    /// Gummiband der laufenden Relation-Geste
    pub preview_line: Option<(Vec2, Vec2)>,
}

impl RenderScene {
    /// Gibt zurück, ob ein Dokument für Rendering vorhanden ist.
    pub fn has_document(&self) -> bool {
        !self.tokens.is_empty()
    }
}
