use super::*;
use crate::core::{Document, Entity};
use approx::assert_relative_eq;

/// 10 px pro Zeichen, Zeilenhöhe 12 + 8 = 20
const METRICS: FontMetrics = FontMetrics {
    char_width: 10.0,
    font_height: 12.0,
};

fn doc(raw: &[&[&str]]) -> Document {
    Document::new(
        "t",
        raw.iter()
            .map(|s| s.iter().map(|t| t.to_string()).collect())
            .collect(),
    )
}

fn john() -> Document {
    doc(&[&["John", "works", "at", "Google"]])
}

#[test]
fn test_single_line_geometry() {
    let layout = TokenLayout::compute(&john(), Vec2::new(400.0, 400.0), 0.0, &METRICS);

    assert_eq!(layout.lines().len(), 1);
    let john = layout.token_box(0).expect("Token 0 fehlt");
    assert_relative_eq!(john.x_start, 10.0);
    assert_relative_eq!(john.x_end, 54.0);
    let works = layout.token_box(1).expect("Token 1 fehlt");
    assert_relative_eq!(works.x_start, 56.0);
    assert_relative_eq!(works.y_top, 10.0);
    assert_relative_eq!(layout.line_height(), 20.0);
    assert_relative_eq!(layout.content_height(), 50.0);
}

#[test]
fn test_wrap_breaks_before_overflowing_token() {
    // verfügbare Breite 140 - 20 = 120
    let layout = TokenLayout::compute(&john(), Vec2::new(140.0, 400.0), 0.0, &METRICS);

    let lines = layout.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].first_token, lines[0].last_token), (0, 1));
    assert_eq!((lines[1].first_token, lines[1].last_token), (2, 3));
    assert_relative_eq!(lines[1].y_top, 30.0);
    let at = layout.token_box(2).expect("Token 2 fehlt");
    assert_relative_eq!(at.x_start, 10.0);
}

#[test]
fn test_overwide_token_gets_its_own_line() {
    let document = doc(&[&["a", "extraordinarily", "b"]]);
    let layout = TokenLayout::compute(&document, Vec2::new(60.0, 400.0), 0.0, &METRICS);

    assert_eq!(layout.lines().len(), 3);
    assert_eq!(layout.token_box(1).map(|b| b.line), Some(1));
    assert_eq!(layout.token_box(2).map(|b| b.line), Some(2));
}

#[test]
fn test_each_sentence_starts_new_line_with_gap() {
    let document = doc(&[&["a", "b"], &["c"]]);
    let layout = TokenLayout::compute(&document, Vec2::new(400.0, 400.0), 0.0, &METRICS);

    let lines = layout.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].sentence, 1);
    assert_relative_eq!(lines[1].y_top, 40.0);
    assert_relative_eq!(layout.content_height(), 80.0);
}

#[test]
fn test_empty_token_still_gets_a_box() {
    let document = doc(&[&["x", "", "y"]]);
    let layout = TokenLayout::compute(&document, Vec2::new(400.0, 400.0), 0.0, &METRICS);

    assert_eq!(layout.token_count(), 3);
    let empty = layout.token_box(1).expect("leerer Token ohne Box");
    assert_relative_eq!(empty.x_end - empty.x_start, TOKEN_PADDING);
}

#[test]
fn test_hit_test_tokens_gaps_and_outside() {
    let layout = TokenLayout::compute(&john(), Vec2::new(140.0, 400.0), 0.0, &METRICS);

    assert_eq!(layout.hit_test(Vec2::new(60.0, 15.0)), Some(1));
    assert_eq!(layout.hit_test(Vec2::new(20.0, 35.0)), Some(2));
    // Lücke zwischen Token 0 und 1
    assert_eq!(layout.hit_test(Vec2::new(55.0, 15.0)), None);
    // rechts neben dem letzten Token der Zeile
    assert_eq!(layout.hit_test(Vec2::new(130.0, 15.0)), None);
    // unterhalb des Inhalts
    assert_eq!(layout.hit_test(Vec2::new(20.0, 300.0)), None);
    // außerhalb des Viewports
    assert_eq!(layout.hit_test(Vec2::new(-1.0, 15.0)), None);
    assert_eq!(layout.hit_test(Vec2::new(20.0, 500.0)), None);
}

#[test]
fn test_scroll_is_clamped_and_applied_to_hit_test() {
    // Inhalt 70 px hoch, Viewport 30 → max_scroll 40
    let layout = TokenLayout::compute(&john(), Vec2::new(140.0, 30.0), 100.0, &METRICS);

    assert_relative_eq!(layout.max_scroll(), 40.0);
    assert_relative_eq!(layout.scroll(), 40.0);
    assert_eq!(layout.hit_test(Vec2::new(20.0, 0.0)), Some(2));
    assert_eq!(layout.visible_lines(), 1..2);

    let (min, _) = layout.token_rect(2).expect("Token 2 fehlt");
    assert_relative_eq!(min.y, -10.0);
}

#[test]
fn test_segments_for_wrapped_span_one_per_line() {
    let layout = TokenLayout::compute(&john(), Vec2::new(140.0, 400.0), 0.0, &METRICS);

    let segments = layout.segments_for_span(Span::new(1, 2));
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].first_token, segments[0].last_token), (1, 1));
    assert_eq!((segments[1].first_token, segments[1].last_token), (2, 2));
    assert_relative_eq!(segments[0].x_start, 56.0);
    assert_relative_eq!(segments[0].x_end, 110.0);
    assert_relative_eq!(segments[1].y_top, 30.0);

    // Vereinigung der Token-Bereiche deckt den Span genau einmal ab
    let covered: Vec<usize> = segments
        .iter()
        .flat_map(|s| s.first_token..=s.last_token)
        .collect();
    assert_eq!(covered, vec![1, 2]);
}

#[test]
fn test_segments_for_span_on_one_line_is_single_rect() {
    let layout = TokenLayout::compute(&john(), Vec2::new(400.0, 400.0), 0.0, &METRICS);

    let segments = layout.segments_for_span(Span::new(0, 3));
    assert_eq!(segments.len(), 1);
    assert_relative_eq!(segments[0].x_start, 10.0);
    assert_relative_eq!(segments[0].x_end, 202.0);
    assert!(layout.segments_for_span(Span::new(4, 5)).is_empty());
}

#[test]
fn test_entity_at_prefers_narrowest_span() {
    let mut document = john();
    document
        .add_entity(Entity::new(0, 3, "SENTENCE"))
        .expect("gültiger Span");
    document
        .add_entity(Entity::new(1, 1, "VERB"))
        .expect("gültiger Span");
    let layout = TokenLayout::compute(&document, Vec2::new(400.0, 400.0), 0.0, &METRICS);

    let hit = layout.entity_at(&document, Vec2::new(60.0, 15.0));
    assert_eq!(hit.map(|e| e.label.as_str()), Some("VERB"));
    let hit = layout.entity_at(&document, Vec2::new(20.0, 15.0));
    assert_eq!(hit.map(|e| e.label.as_str()), Some("SENTENCE"));
    // Lücke innerhalb des Entity-Segments gehört zur Entity
    let hit = layout.entity_at(&document, Vec2::new(55.0, 15.0));
    assert_eq!(hit.map(|e| e.label.as_str()), Some("SENTENCE"));
    assert!(layout.entity_at(&document, Vec2::new(300.0, 15.0)).is_none());
}
