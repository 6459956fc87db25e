// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Line-format graph loader for fixtures.
//!
//! One vertex per line, optionally followed by its outgoing edges:
//!
//! ```text
//! id:label:name:extra edgeLabel:targetId:weight,edgeLabel2:targetId2:weight2
//! ```
//!
//! `extra` is the numeric `age` for `person` vertices and the `lang` of any
//! other label.

use crate::graph::{Edge, Graph, Vertex, VertexAttribute};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("line {line}: expected a vertex section and at most one edge list")]
    TooManySections { line: usize },

    #[error("line {line}: expected {expected} colon-separated fields in `{text}`")]
    FieldCount {
        line: usize,
        expected: usize,
        text: String,
    },

    #[error("line {line}: invalid {field} `{value}`")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Loads every non-blank line of `text`; line numbers in errors start at 1.
pub fn load_graph(text: &str) -> Result<Graph, FixtureError> {
    let mut graph = Graph::default();
    for (index, line) in text.lines().enumerate() {
        if let Some((vertex, edges)) = parse_line(index + 1, line)? {
            graph.vertices.push(vertex);
            graph.edges.extend(edges);
        }
    }
    Ok(graph)
}

/// Parses a single line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<(Vertex, Vec<Edge>)>, FixtureError> {
    let mut sections = text.split_whitespace();
    let Some(vertex_text) = sections.next() else {
        return Ok(None);
    };
    let edge_text = sections.next();
    if sections.next().is_some() {
        return Err(FixtureError::TooManySections { line });
    }

    let vertex = parse_vertex(line, vertex_text)?;
    let edges = match edge_text {
        Some(text) => text
            .split(',')
            .filter(|edge| !edge.is_empty())
            .map(|edge| parse_edge(line, vertex.id, edge))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };
    Ok(Some((vertex, edges)))
}

fn parse_vertex(line: usize, text: &str) -> Result<Vertex, FixtureError> {
    let fields = split_fields(line, text, 4)?;
    let id = parse_id(line, fields[0])?;
    let label = fields[1].to_string();
    let attribute = if label == "person" {
        VertexAttribute::Age(fields[3].parse().map_err(|_| FixtureError::InvalidField {
            line,
            field: "age",
            value: fields[3].to_string(),
        })?)
    } else {
        VertexAttribute::Lang(fields[3].to_string())
    };

    Ok(Vertex {
        id,
        label,
        name: fields[2].to_string(),
        attribute,
    })
}

fn parse_edge(line: usize, out_id: u64, text: &str) -> Result<Edge, FixtureError> {
    let fields = split_fields(line, text, 3)?;
    let weight = fields[2]
        .parse()
        .map_err(|_| FixtureError::InvalidField {
            line,
            field: "weight",
            value: fields[2].to_string(),
        })?;

    Ok(Edge {
        label: fields[0].to_string(),
        out_id,
        in_id: parse_id(line, fields[1])?,
        weight,
    })
}

fn split_fields(line: usize, text: &str, expected: usize) -> Result<Vec<&str>, FixtureError> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != expected {
        return Err(FixtureError::FieldCount {
            line,
            expected,
            text: text.to_string(),
        });
    }
    Ok(fields)
}

fn parse_id(line: usize, value: &str) -> Result<u64, FixtureError> {
    value.parse().map_err(|_| FixtureError::InvalidField {
        line,
        field: "id",
        value: value.to_string(),
    })
}
