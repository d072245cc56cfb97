//! Umbruch-Layout der Tokens eines Dokuments und Abbildung Bildschirm ↔ Token-Index.
//!
//! Alle y-Werte der Boxen sind Inhalts-Koordinaten (relativ zur Oberkante des
//! Dokumentbereichs, ohne Scroll). Pointer-Koordinaten und zurückgegebene
//! Segmente sind Viewport-Koordinaten: der Scroll-Offset wird abgezogen.

use super::{Document, Entity, Span};
use glam::Vec2;

/// Linker Rand des Dokumentbereichs in Pixeln
pub const MARGIN_X: f32 = 10.0;
/// Oberer Rand des Dokumentbereichs in Pixeln
pub const MARGIN_TOP: f32 = 10.0;
/// Zusätzliche Höhe unter der letzten Zeile
pub const MARGIN_BOTTOM: f32 = 20.0;
/// Innenabstand: Token-Breite = Textbreite + Padding
pub const TOKEN_PADDING: f32 = 4.0;
/// Horizontaler Abstand zwischen zwei Tokens
pub const TOKEN_GAP: f32 = 2.0;
/// Zeilenhöhe = Font-Höhe + Padding
pub const LINE_PADDING: f32 = 8.0;
/// Vertikaler Abstand zwischen zwei Sätzen
pub const SENTENCE_GAP: f32 = 10.0;

/// Textvermessung, vom Host bereitgestellt.
pub trait TextMeasure {
    /// Breite eines Token-Texts in Pixeln
    fn text_width(&self, text: &str) -> f32;
    /// Höhe einer Textzeile in Pixeln
    fn line_height(&self) -> f32;
}

/// Metriken einer Monospace-Schrift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Vorschub pro Zeichen
    pub char_width: f32,
    /// Zeilenhöhe der Schrift
    pub font_height: f32,
}

impl FontMetrics {
    /// Näherung für eine Monospace-Schrift der gegebenen Größe.
    pub fn monospace(font_size: f32) -> Self {
        Self {
            char_width: font_size * 0.6,
            font_height: font_size * 1.25,
        }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::monospace(16.0)
    }
}

impl TextMeasure for FontMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.font_height
    }
}

/// Rechteck eines Tokens in Inhalts-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenBox {
    /// Anzeigezeile
    pub line: usize,
    /// Linke Kante
    pub x_start: f32,
    /// Rechte Kante (exklusiv)
    pub x_end: f32,
    /// Oberkante
    pub y_top: f32,
}

/// Eine Anzeigezeile mit dem zusammenhängenden Token-Bereich darauf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutLine {
    /// Oberkante in Inhalts-Koordinaten
    pub y_top: f32,
    /// Satz, zu dem die Zeile gehört
    pub sentence: usize,
    /// Erster Token der Zeile (global)
    pub first_token: usize,
    /// Letzter Token der Zeile (global, inklusiv)
    pub last_token: usize,
}

/// Ein Rechteck pro Anzeigezeile, die ein Span überdeckt (Viewport-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanSegment {
    /// Anzeigezeile
    pub line: usize,
    /// Linke Kante des ersten Tokens auf der Zeile
    pub x_start: f32,
    /// Rechte Kante des letzten Tokens auf der Zeile
    pub x_end: f32,
    /// Oberkante nach Abzug des Scroll-Offsets
    pub y_top: f32,
    /// Zeilenhöhe
    pub height: f32,
    /// Erster Token dieses Segments
    pub first_token: usize,
    /// Letzter Token dieses Segments (inklusiv)
    pub last_token: usize,
}

impl SpanSegment {
    /// Prüft ob ein Viewport-Punkt im Segment liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x_start
            && point.x < self.x_end
            && point.y >= self.y_top
            && point.y < self.y_top + self.height
    }

    /// Linke obere Ecke
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x_start, self.y_top)
    }

    /// Rechte untere Ecke
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x_end, self.y_top + self.height)
    }
}

/// Berechnetes Wrap-Layout eines Dokuments für eine Viewport-Größe und einen Scroll-Offset.
#[derive(Debug, Clone, Default)]
pub struct TokenLayout {
    boxes: Vec<TokenBox>,
    lines: Vec<LayoutLine>,
    line_height: f32,
    content_height: f32,
    viewport: Vec2,
    scroll: f32,
}

impl TokenLayout {
    /// Berechnet das Layout.
    ///
    /// Jeder Satz beginnt eine neue Zeile. Vor einem Token wird umgebrochen, wenn
    /// er die Zeile über die verfügbare Breite hinaus verlängern würde und die
    /// Zeile nicht leer ist. Ein einzelner überbreiter Token steht allein auf
    /// seiner Zeile.
    pub fn compute(
        document: &Document,
        viewport: Vec2,
        scroll: f32,
        measure: &impl TextMeasure,
    ) -> Self {
        let max_width = (viewport.x - 2.0 * MARGIN_X).max(0.0);
        let line_height = measure.line_height() + LINE_PADDING;

        let mut boxes = Vec::with_capacity(document.token_count());
        let mut lines: Vec<LayoutLine> = Vec::new();
        let mut y = MARGIN_TOP;
        let mut global = 0usize;

        for (sentence_idx, sentence) in document.sentences().iter().enumerate() {
            if sentence_idx > 0 {
                y += SENTENCE_GAP;
            }
            let mut x = MARGIN_X;
            let mut line_width = 0.0f32;
            let mut line_open = false;

            for token in sentence {
                let width = measure.text_width(token) + TOKEN_PADDING;

                if line_open && line_width + width > max_width {
                    y += line_height;
                    x = MARGIN_X;
                    line_width = 0.0;
                    line_open = false;
                }
                if !line_open {
                    lines.push(LayoutLine {
                        y_top: y,
                        sentence: sentence_idx,
                        first_token: global,
                        last_token: global,
                    });
                    line_open = true;
                }

                let line = lines.len() - 1;
                lines[line].last_token = global;
                boxes.push(TokenBox {
                    line,
                    x_start: x,
                    x_end: x + width,
                    y_top: y,
                });

                x += width + TOKEN_GAP;
                line_width += width + TOKEN_GAP;
                global += 1;
            }

            y += line_height;
        }

        let content_height = if document.sentence_count() == 0 {
            0.0
        } else {
            y + MARGIN_BOTTOM
        };
        let mut layout = Self {
            boxes,
            lines,
            line_height,
            content_height,
            viewport,
            scroll: 0.0,
        };
        layout.scroll = scroll.clamp(0.0, layout.max_scroll());
        layout
    }

    /// Anzahl der platzierten Tokens (entspricht der Token-Anzahl des Dokuments)
    pub fn token_count(&self) -> usize {
        self.boxes.len()
    }

    /// Alle Anzeigezeilen
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Box eines Tokens in Inhalts-Koordinaten
    pub fn token_box(&self, index: usize) -> Option<&TokenBox> {
        self.boxes.get(index)
    }

    /// Zeilenhöhe inkl. Padding
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Gesamthöhe des Inhalts
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Größter zulässiger Scroll-Offset
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.y).max(0.0)
    }

    /// Wirksamer (geklemmter) Scroll-Offset
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Viewport-Größe, für die das Layout berechnet wurde
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Token-Rechteck in Viewport-Koordinaten als (min, max).
    pub fn token_rect(&self, index: usize) -> Option<(Vec2, Vec2)> {
        let b = self.boxes.get(index)?;
        let min = Vec2::new(b.x_start, b.y_top - self.scroll);
        Some((min, Vec2::new(b.x_end, min.y + self.line_height)))
    }

    /// Bereich der Zeilen, die im Viewport (teilweise) sichtbar sind.
    pub fn visible_lines(&self) -> std::ops::Range<usize> {
        let top = self.scroll;
        let bottom = self.scroll + self.viewport.y;
        let first = self
            .lines
            .partition_point(|l| l.y_top + self.line_height <= top);
        let last = self.lines.partition_point(|l| l.y_top < bottom);
        first..last.max(first)
    }

    /// Liefert den Token unter einem Viewport-Punkt.
    ///
    /// `None` außerhalb des Viewports, zwischen Tokens und unterhalb des Inhalts.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        if point.x < 0.0 || point.y < 0.0 || point.x >= self.viewport.x || point.y >= self.viewport.y
        {
            return None;
        }
        let content_y = point.y + self.scroll;

        let line_idx = self
            .lines
            .partition_point(|l| l.y_top + self.line_height <= content_y);
        let line = self.lines.get(line_idx)?;
        if content_y < line.y_top {
            return None;
        }

        let tokens = &self.boxes[line.first_token..=line.last_token];
        let offset = tokens.partition_point(|b| b.x_end <= point.x);
        let hit = tokens.get(offset)?;
        (point.x >= hit.x_start).then_some(line.first_token + offset)
    }

    /// Zerlegt einen Span in ein Rechteck pro überdeckter Anzeigezeile.
    ///
    /// Spans außerhalb des Layouts werden auf die vorhandenen Tokens gekürzt.
    pub fn segments_for_span(&self, span: Span) -> Vec<SpanSegment> {
        let mut segments: Vec<SpanSegment> = Vec::new();
        if span.start > span.end || span.start >= self.boxes.len() {
            return segments;
        }
        let end = span.end.min(self.boxes.len() - 1);

        for index in span.start..=end {
            let b = &self.boxes[index];
            match segments.last_mut() {
                Some(seg) if seg.line == b.line => {
                    seg.x_end = b.x_end;
                    seg.last_token = index;
                }
                _ => segments.push(SpanSegment {
                    line: b.line,
                    x_start: b.x_start,
                    x_end: b.x_end,
                    y_top: b.y_top - self.scroll,
                    height: self.line_height,
                    first_token: index,
                    last_token: index,
                }),
            }
        }
        segments
    }

    /// Findet die Entity, deren gerendertes Segment den Punkt enthält.
    ///
    /// Bei Überlappung gewinnt der kürzeste Span, bei Gleichstand die zuerst
    /// angelegte Entity.
    pub fn entity_at<'a>(&self, document: &'a Document, point: Vec2) -> Option<&'a Entity> {
        let mut best: Option<&Entity> = None;
        for entity in document.entities() {
            if best.is_some_and(|b| b.span.len() <= entity.span.len()) {
                continue;
            }
            if self
                .segments_for_span(entity.span)
                .iter()
                .any(|seg| seg.contains(point))
            {
                best = Some(entity);
            }
        }
        best
    }

    /// Ankerpunkt für Relationspfeile: Mitte der Oberkante des ersten Segments.
    pub fn span_anchor(&self, span: Span) -> Option<Vec2> {
        let first = self.segments_for_span(span).into_iter().next()?;
        Some(Vec2::new((first.x_start + first.x_end) * 0.5, first.y_top))
    }
}

#[cfg(test)]
mod tests;
