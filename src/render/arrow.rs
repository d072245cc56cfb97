//! Geometrie der Relationspfeile: Bogen über der Textzeile plus Pfeilspitze.

use glam::Vec2;

/// Stützpunkte pro Bogen
const ARC_SEGMENTS: usize = 16;
/// Minimale Bogenhöhe in Pixeln
const MIN_LIFT: f32 = 14.0;
/// Maximale Bogenhöhe in Pixeln
const MAX_LIFT: f32 = 60.0;
/// Länge der Pfeilspitze
pub const HEAD_LENGTH: f32 = 8.0;
/// Halber Öffnungswinkel der Pfeilspitze (Radiant)
const HEAD_HALF_ANGLE: f32 = 0.45;

/// Kontrollpunkt des quadratischen Bogens (über der Verbindungslinie).
pub fn control_point(from: Vec2, to: Vec2) -> Vec2 {
    let lift = (from.distance(to) * 0.3).clamp(MIN_LIFT, MAX_LIFT);
    (from + to) * 0.5 - Vec2::new(0.0, lift)
}

/// Quadratische Bézier-Kurve von `from` nach `to`, inkl. beider Endpunkte.
pub fn arc_points(from: Vec2, to: Vec2) -> Vec<Vec2> {
    let control = control_point(from, to);
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = i as f32 / ARC_SEGMENTS as f32;
            let u = 1.0 - t;
            from * (u * u) + control * (2.0 * u * t) + to * (t * t)
        })
        .collect()
}

/// Pfeilspitze am Ende einer Polyline als Dreieck (Spitze zuerst).
///
/// `None` für Polylines ohne Richtung (weniger als zwei verschiedene Punkte).
pub fn arrow_head(points: &[Vec2]) -> Option<[Vec2; 3]> {
    let tip = *points.last()?;
    let before = points.iter().rev().skip(1).find(|p| p.distance(tip) > f32::EPSILON)?;
    let direction = (tip - *before).normalize_or_zero();
    if direction == Vec2::ZERO {
        return None;
    }
    let back = -direction * HEAD_LENGTH;
    let left = Vec2::from_angle(HEAD_HALF_ANGLE).rotate(back);
    let right = Vec2::from_angle(-HEAD_HALF_ANGLE).rotate(back);
    Some([tip, tip + left, tip + right])
}

/// Punkt in der Mitte des Bogens (Position der Beschriftung).
pub fn label_anchor(from: Vec2, to: Vec2) -> Vec2 {
    let control = control_point(from, to);
    from * 0.25 + control * 0.5 + to * 0.25
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arc_starts_and_ends_at_anchors() {
        let from = Vec2::new(30.0, 10.0);
        let to = Vec2::new(170.0, 10.0);

        let points = arc_points(from, to);

        assert_eq!(points.len(), ARC_SEGMENTS + 1);
        assert_relative_eq!(points[0].x, from.x);
        assert_relative_eq!(points[ARC_SEGMENTS].x, to.x);
        assert_relative_eq!(points[ARC_SEGMENTS].y, to.y);
    }

    #[test]
    fn arc_bulges_upwards_within_bounds() {
        let from = Vec2::new(0.0, 100.0);
        let to = Vec2::new(1000.0, 100.0);

        let control = control_point(from, to);

        assert_relative_eq!(control.y, 100.0 - MAX_LIFT);
        assert!(label_anchor(from, to).y < 100.0);
    }

    #[test]
    fn arrow_head_points_along_last_segment() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];

        let [tip, left, right] = arrow_head(&points).expect("Richtung vorhanden");

        assert_relative_eq!(tip.x, 10.0);
        assert!(left.x < tip.x && right.x < tip.x);
        assert_relative_eq!(left.y, -right.y, epsilon = 1e-4);
        assert_relative_eq!(tip.distance(left), HEAD_LENGTH, epsilon = 1e-4);
    }

    #[test]
    fn degenerate_polyline_has_no_head() {
        let p = Vec2::new(5.0, 5.0);

        assert!(arrow_head(&[p, p]).is_none());
        assert!(arrow_head(&[]).is_none());
    }
}
