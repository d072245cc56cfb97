use token_span_annotator::jsonl::normalize_label;
use token_span_annotator::{parse_jsonl, write_jsonl, Entity, Relation, Span};

fn fixture() -> &'static str {
    include_str!("fixtures/scierc_sample.jsonl")
}

#[test]
fn unmodified_documents_are_written_byte_identical() {
    let report = parse_jsonl(fixture());

    let written = write_jsonl(&report.documents).expect("Schreiben sollte gelingen");

    let original: Vec<&str> = fixture().lines().collect();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], original[0]);
    assert_eq!(lines[1], original[1], "Zusatzfelder bleiben an ihrer Position");
}

#[test]
fn missing_arrays_are_written_as_empty_groups() {
    let report = parse_jsonl(fixture());

    let written = write_jsonl(&report.documents[2..]).expect("Schreiben sollte gelingen");

    assert_eq!(
        written,
        "{\"sentences\":[[\"no\",\"key\",\"here\"]],\"ner\":[[]],\"relations\":[[]]}\n"
    );
}

#[test]
fn cross_sentence_relation_uses_global_indices() {
    let report = parse_jsonl(fixture());
    let document = &report.documents[1];

    assert_eq!(document.token_count(), 9);
    assert_eq!(document.span_text(Span::new(7, 7)), "CRFs");
    assert!(document.has_relation(&Relation::new(
        Span::new(7, 7),
        Span::new(3, 3),
        "Used-For"
    )));
}

#[test]
fn broken_line_is_skipped_with_warning() {
    let report = parse_jsonl(fixture());

    assert_eq!(report.documents.len(), 3);
    assert_eq!(report.skipped_lines, 1);
    assert!(report.warnings.iter().any(|w| w.line == 3));
}

#[test]
fn invalid_rows_are_dropped_but_document_survives() {
    let line = r#"{"doc_key":"x","sentences":[["a","b"]],"ner":[[[0,0,"A"],[1,5,"B"],[1,1]]],"relations":[[[0,0,1,1,["R","S"]],[0,0,9,9,"Q"]]]}"#;

    let report = parse_jsonl(line);

    assert_eq!(report.skipped_lines, 0);
    assert_eq!(report.warnings.len(), 3);
    let document = &report.documents[0];
    assert_eq!(document.entity_count(), 1);
    assert!(document.has_entity(&Entity::new(0, 0, "A")));
    assert!(document.has_relation(&Relation::new(Span::new(0, 0), Span::new(1, 1), "R")));
}

#[test]
fn list_labels_are_normalized() {
    assert_eq!(normalize_label(&serde_json::json!(["Task", "Method"])), "Task");
    assert_eq!(normalize_label(&serde_json::json!([])), "Unknown");
    assert_eq!(normalize_label(&serde_json::json!("Metric")), "Metric");
}

#[test]
fn edits_change_only_the_touched_group() {
    let mut report = parse_jsonl(fixture());
    let document = &mut report.documents[1];
    document
        .add_entity(Entity::new(5, 5, "Generic"))
        .expect("Span liegt im Dokument");

    let written = write_jsonl(&report.documents[1..2]).expect("Schreiben sollte gelingen");

    assert!(written.contains(r#""ner":[[[3,3,"Method"]],[[7,7,"Method"],[5,5,"Generic"]]]"#));
    assert!(written.contains(r#""relations":[[],[[7,7,3,3,"Used-For"]]]"#));
}

#[test]
fn annotations_collected_in_first_group_stay_there() {
    let line = r#"{"doc_key":"g","sentences":[["a","b","c"],["d"]],"ner":[[[0,0,"X"],[3,3,"Y"]],[]],"relations":[[[3,3,0,0,"R"]],[]]}"#;

    let report = parse_jsonl(line);
    let written = write_jsonl(&report.documents).expect("Schreiben sollte gelingen");

    assert_eq!(written, format!("{line}\n"));
}

#[test]
fn outer_arrays_shorter_than_sentences_keep_their_length() {
    let line = r#"{"doc_key":"s","sentences":[["a"],["b"]],"ner":[],"relations":[]}"#;

    let report = parse_jsonl(line);
    let written = write_jsonl(&report.documents).expect("Schreiben sollte gelingen");

    assert_eq!(written, format!("{line}\n"));
}

#[test]
fn duplicate_rows_survive_a_round_trip() {
    let line = r#"{"doc_key":"d","sentences":[["a","b"]],"ner":[[[1,1,"A"],[0,0,"B"],[1,1,"A"]]],"relations":[[[0,0,1,1,"R"]],[[0,0,1,1,"R"]]]}"#;

    let report = parse_jsonl(line);
    let written = write_jsonl(&report.documents).expect("Schreiben sollte gelingen");

    assert_eq!(report.documents[0].entity_count(), 2);
    assert_eq!(written, format!("{line}\n"));
}

#[test]
fn removed_and_restored_entity_returns_to_its_source_group() {
    let line = r#"{"doc_key":"g","sentences":[["a","b","c"],["d"]],"ner":[[[0,0,"X"],[3,3,"Y"]],[]],"relations":[[[3,3,0,0,"R"]],[]]}"#;
    let mut report = parse_jsonl(line);
    let document = &mut report.documents[0];
    let entity = Entity::new(3, 3, "Y");
    let removal = document
        .remove_entity(&entity)
        .expect("Entity sollte existieren");
    document
        .add_entity(entity)
        .expect("Span liegt im Dokument");
    for (_, relation) in removal.cascaded {
        document
            .add_relation(relation)
            .expect("Spans liegen im Dokument");
    }

    let written = write_jsonl(&report.documents).expect("Schreiben sollte gelingen");

    assert_eq!(written, format!("{line}\n"));
}
