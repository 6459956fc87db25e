// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use windstep_test_utils::{
    load_graph, modern::modern_graph, parse_line, FixtureError, VertexAttribute,
};

#[test]
fn test_modern_graph_loads_all_elements() -> anyhow::Result<()> {
    let graph = modern_graph()?;

    assert_eq!(graph.vertices.len(), 6);
    assert_eq!(graph.edges.len(), 6);
    Ok(())
}

#[test]
fn test_person_extra_is_age_and_software_extra_is_lang() -> anyhow::Result<()> {
    let graph = modern_graph()?;

    let marko = graph.vertex(1).expect("marko");
    let lop = graph.vertex(3).expect("lop");

    assert_eq!(marko.name, "marko");
    assert_eq!(marko.attribute, VertexAttribute::Age(29));
    assert_eq!(lop.attribute, VertexAttribute::Lang("java".to_string()));
    Ok(())
}

#[test]
fn test_edges_are_attached_to_the_line_vertex() -> anyhow::Result<()> {
    let graph = modern_graph()?;

    let targets: Vec<(String, u64)> = graph
        .out_edges(1)
        .map(|e| (e.label.clone(), e.in_id))
        .collect();

    assert_eq!(
        targets,
        vec![
            ("knows".to_string(), 2),
            ("knows".to_string(), 4),
            ("created".to_string(), 3)
        ]
    );
    assert!(graph.out_edges(2).next().is_none());
    Ok(())
}

#[test]
fn test_blank_lines_are_skipped() -> anyhow::Result<()> {
    assert_eq!(parse_line(1, "   ")?, None);

    let graph = load_graph("\n2:person:vadas:27\n\n")?;
    assert_eq!(graph.vertices.len(), 1);
    Ok(())
}

#[test]
fn test_malformed_vertex_reports_line() {
    let err = load_graph("2:person:vadas:27\n3:software:lop").unwrap_err();

    assert!(matches!(err, FixtureError::FieldCount { line: 2, expected: 4, .. }));
}

#[test]
fn test_non_numeric_age_is_rejected() {
    let err = load_graph("2:person:vadas:old").unwrap_err();

    assert_eq!(
        err,
        FixtureError::InvalidField {
            line: 1,
            field: "age",
            value: "old".to_string(),
        }
    );
}

#[test]
fn test_bad_weight_is_rejected() {
    let err = load_graph("1:person:marko:29 knows:2:heavy").unwrap_err();

    assert!(matches!(err, FixtureError::InvalidField { field: "weight", .. }));
}

#[test]
fn test_extra_section_is_rejected() {
    let err = load_graph("1:person:marko:29 knows:2:0.5 trailing").unwrap_err();

    assert_eq!(err, FixtureError::TooManySections { line: 1 });
}
