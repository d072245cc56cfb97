//! Zeichnen der Render-Szene mit dem egui-Painter.
//!
//! Reihenfolge: Entity-Hervorhebungen, Kandidat, Token-Text, Relationen,
//! Gummiband. Alle Szenen-Koordinaten werden um `origin` verschoben.

pub mod arrow;

pub use crate::shared::RenderScene;

use crate::shared::Rgb;
use egui::{Color32, FontId, Painter, Pos2, Stroke};
use glam::Vec2;

/// Deckkraft der Entity-Hervorhebung
const ENTITY_ALPHA: u8 = 90;
/// Schriftgröße der Typ-Beschriftungen relativ zur Textschrift
const LABEL_SCALE: f32 = 0.6;

/// Stil-Parameter eines Frames.
#[derive(Debug, Clone)]
pub struct PaintStyle {
    /// Schrift der Tokens
    pub font: FontId,
    /// Textfarbe der Tokens
    pub text_color: Color32,
    /// Farbe des Auswahl-Kandidaten
    pub candidate_color: Color32,
    /// Rahmenfarbe der selektierten Entity
    pub selection_color: Color32,
}

impl PaintStyle {
    /// Stil passend zu den aktuellen egui-Visuals.
    pub fn from_visuals(visuals: &egui::Visuals, font_size: f32) -> Self {
        Self {
            font: FontId::monospace(font_size),
            text_color: visuals.text_color(),
            candidate_color: visuals.selection.bg_fill.gamma_multiply(0.6),
            selection_color: visuals.strong_text_color(),
        }
    }
}

/// Zeichnet eine komplette Szene.
pub fn paint_scene(painter: &Painter, origin: Pos2, scene: &RenderScene, style: &PaintStyle) {
    let to_pos = |v: Vec2| origin + egui::vec2(v.x, v.y);
    let label_font = FontId::proportional(style.font.size * LABEL_SCALE);

    for entity in &scene.entities {
        let fill = with_alpha(entity.color, ENTITY_ALPHA);
        for &(min, max) in &entity.segments {
            let rect = egui::Rect::from_min_max(to_pos(min), to_pos(max));
            painter.rect_filled(rect, egui::CornerRadius::same(3), fill);
            if entity.selected {
                painter.rect_stroke(
                    rect,
                    egui::CornerRadius::same(3),
                    Stroke::new(2.0, style.selection_color),
                    egui::StrokeKind::Outside,
                );
            }
        }
        if let Some(&(min, max)) = entity.segments.first() {
            painter.text(
                to_pos(Vec2::new(min.x, max.y)),
                egui::Align2::LEFT_TOP,
                &entity.label,
                label_font.clone(),
                rgb(entity.color),
            );
        }
    }

    for &(min, max) in &scene.candidate {
        let rect = egui::Rect::from_min_max(to_pos(min), to_pos(max));
        painter.rect_filled(rect, egui::CornerRadius::same(3), style.candidate_color);
    }

    for token in &scene.tokens {
        let center = to_pos((token.min + token.max) * 0.5);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &token.text,
            style.font.clone(),
            style.text_color,
        );
    }

    for relation in &scene.relations {
        let color = rgb(relation.color);
        paint_arrow(painter, &to_pos, relation.from, relation.to, color);
        painter.text(
            to_pos(arrow::label_anchor(relation.from, relation.to)),
            egui::Align2::CENTER_BOTTOM,
            &relation.label,
            label_font.clone(),
            color,
        );
    }

    if let Some((from, to)) = scene.preview_line {
        paint_arrow(painter, &to_pos, from, to, style.selection_color);
    }
}

fn paint_arrow(
    painter: &Painter,
    to_pos: &impl Fn(Vec2) -> Pos2,
    from: Vec2,
    to: Vec2,
    color: Color32,
) {
    let points = arrow::arc_points(from, to);
    if let Some(head) = arrow::arrow_head(&points) {
        painter.add(egui::Shape::convex_polygon(
            head.iter().map(|&p| to_pos(p)).collect(),
            color,
            Stroke::NONE,
        ));
    }
    painter.add(egui::Shape::line(
        points.into_iter().map(to_pos).collect(),
        Stroke::new(1.5, color),
    ));
}

fn rgb(color: Rgb) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}

fn with_alpha(color: Rgb, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color[0], color[1], color[2], alpha)
}
