//! View-bezogener Zustand: Viewport, Scroll-Offset und gecachtes Token-Layout.

use crate::core::{DocumentStore, FontMetrics, TokenLayout};
use glam::Vec2;

/// Schlüssel, unter dem das Layout gültig bleibt.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutKey {
    generation: u64,
    document: usize,
    viewport: [f32; 2],
    scroll: f32,
    metrics: FontMetrics,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Größe des Dokumentbereichs in Pixeln
    pub viewport_size: [f32; 2],
    /// Vertikaler Scroll-Offset (nach jeder Layout-Aktualisierung geklemmt)
    pub scroll: f32,
    /// Schriftmetriken des Hosts
    pub metrics: FontMetrics,
    /// Wird bei jedem Laden erhöht, damit ein neuer Store das Layout invalidiert
    pub document_generation: u64,
    layout: TokenLayout,
    layout_key: Option<LayoutKey>,
    layout_builds: u64,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelles Layout (Stand der letzten Aktualisierung)
    pub fn layout(&self) -> &TokenLayout {
        &self.layout
    }

    /// Anzahl der bisherigen Layout-Berechnungen
    pub fn layout_builds(&self) -> u64 {
        self.layout_builds
    }

    /// Verwirft das gecachte Layout.
    pub fn invalidate_layout(&mut self) {
        self.layout_key = None;
    }

    /// Berechnet das Layout neu, wenn sich Viewport, Scroll, Metriken oder
    /// das aktive Dokument geändert haben. Klemmt danach den Scroll-Offset.
    pub fn refresh_layout(&mut self, store: &DocumentStore) -> &TokenLayout {
        let key = LayoutKey {
            generation: self.document_generation,
            document: store.active_index(),
            viewport: self.viewport_size,
            scroll: self.scroll,
            metrics: self.metrics,
        };
        if self.layout_key != Some(key) {
            let viewport = Vec2::from(self.viewport_size);
            self.layout = match store.active() {
                Some(document) => TokenLayout::compute(document, viewport, self.scroll, &self.metrics),
                None => TokenLayout::default(),
            };
            self.layout_builds += 1;
            self.scroll = self.layout.scroll();
            self.layout_key = Some(LayoutKey {
                scroll: self.scroll,
                ..key
            });
        }
        &self.layout
    }
}
