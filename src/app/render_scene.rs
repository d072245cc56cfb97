//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{EntityItem, RelationItem, RenderScene, TokenItem};
use glam::Vec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Verwendet das zuletzt berechnete Layout; der Controller aktualisiert es
/// bei jedem Intent.
pub fn build(state: &AppState) -> RenderScene {
    let layout = state.view.layout();
    let mut scene = RenderScene {
        viewport_size: state.view.viewport_size,
        line_height: layout.line_height(),
        ..RenderScene::default()
    };
    let Some(document) = state.active_document() else {
        return scene;
    };
    let height = state.view.viewport_size[1];
    let visible = |(min, max): &(Vec2, Vec2)| max.y > 0.0 && min.y < height;

    for line in &layout.lines()[layout.visible_lines()] {
        for index in line.first_token..=line.last_token {
            if let (Some(text), Some((min, max))) = (document.token(index), layout.token_rect(index)) {
                scene.tokens.push(TokenItem {
                    index,
                    text: text.to_string(),
                    min,
                    max,
                });
            }
        }
    }

    for entity in document.entities() {
        let segments: Vec<(Vec2, Vec2)> = layout
            .segments_for_span(entity.span)
            .iter()
            .map(|seg| (seg.min(), seg.max()))
            .collect();
        if !segments.iter().any(visible) {
            continue;
        }
        scene.entities.push(EntityItem {
            label: entity.label.clone(),
            color: state.settings.entity_color(&entity.label),
            segments,
            selected: state.selection.selected_entity.as_ref() == Some(entity),
        });
    }

    for relation in document.relations() {
        let (Some(from), Some(to)) = (
            layout.span_anchor(relation.source),
            layout.span_anchor(relation.target),
        ) else {
            continue;
        };
        scene.relations.push(RelationItem {
            label: relation.label.clone(),
            color: state.settings.relation_color(&relation.label),
            from,
            to,
        });
    }

    if let Some(span) = state.gestures.selection.candidate_span() {
        scene.candidate = layout
            .segments_for_span(span)
            .iter()
            .map(|seg| (seg.min(), seg.max()))
            .collect();
    }
    scene.preview_line = state.gestures.relation.preview_line(layout);
    scene
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Document, DocumentStore, Entity, FontMetrics, Relation, Span};

    fn state_with(doc: Document, viewport: [f32; 2]) -> AppState {
        let mut state = AppState::new();
        state.documents = DocumentStore::new(vec![doc], None);
        state.view.viewport_size = viewport;
        state.view.metrics = FontMetrics {
            char_width: 10.0,
            font_height: 12.0,
        };
        state.refresh_layout();
        state
    }

    fn john() -> Document {
        let mut doc = Document::new(
            "d1",
            vec![vec![
                "John".to_string(),
                "works".to_string(),
                "at".to_string(),
                "Google".to_string(),
            ]],
        );
        doc.add_entity(Entity::new(0, 0, "PERSON")).expect("gültig");
        doc.add_entity(Entity::new(3, 3, "ORG")).expect("gültig");
        doc.add_relation(Relation::new(Span::new(0, 0), Span::new(3, 3), "WORKS_AT"))
            .expect("gültig");
        doc
    }

    #[test]
    fn build_without_document_is_empty() {
        let state = AppState::new();

        let scene = build(&state);

        assert!(!scene.has_document());
        assert!(scene.entities.is_empty());
    }

    #[test]
    fn build_contains_tokens_entities_and_relations() {
        let mut state = state_with(john(), [400.0, 300.0]);
        state.selection.toggle(Entity::new(3, 3, "ORG"));

        let scene = build(&state);

        assert_eq!(scene.tokens.len(), 4);
        assert_eq!(scene.tokens[3].text, "Google");
        assert_eq!(scene.entities.len(), 2);
        assert!(!scene.entities[0].selected);
        assert!(scene.entities[1].selected);
        assert_eq!(scene.relations.len(), 1);
        assert_eq!(scene.relations[0].label, "WORKS_AT");
        assert!(scene.relations[0].from.x < scene.relations[0].to.x);
    }

    #[test]
    fn wrapped_entity_yields_one_segment_per_line() {
        let mut doc = Document::new(
            "wrap",
            vec![vec![
                "alpha".to_string(),
                "beta".to_string(),
                "gamma".to_string(),
            ]],
        );
        doc.add_entity(Entity::new(0, 2, "SPAN")).expect("gültig");
        // max_width = 120 - 20 = 100: "alpha" (54) + "beta" (44) passen, "gamma" bricht um
        let state = state_with(doc, [120.0, 300.0]);

        let scene = build(&state);

        assert_eq!(scene.entities.len(), 1);
        assert_eq!(scene.entities[0].segments.len(), 2);
    }

    #[test]
    fn candidate_follows_selection_gesture() {
        let mut state = state_with(john(), [400.0, 300.0]);
        let layout = state.view.layout().clone();
        state
            .gestures
            .selection
            .pointer_down(&layout, glam::Vec2::new(70.0, 15.0));
        state
            .gestures
            .selection
            .pointer_move(&layout, glam::Vec2::new(120.0, 15.0));

        let scene = build(&state);

        assert_eq!(scene.candidate.len(), 1);
        let (min, max) = scene.candidate[0];
        assert_eq!(min.x, 56.0);
        assert_eq!(max.x, 136.0);
    }
}
