// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// The label-dependent attribute a fixture vertex carries besides its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum VertexAttribute {
    Age(u32),
    Lang(String),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vertex {
    pub id: u64,
    pub label: String,
    pub name: String,
    pub attribute: VertexAttribute,
}

impl Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v[{}]", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub label: String,
    pub out_id: u64,
    pub in_id: u64,
    pub weight: f64,
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e[{}-{}->{}]", self.out_id, self.label, self.in_id)
    }
}

/// Vertices and edges in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn vertex(&self, id: u64) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn out_edges(&self, id: u64) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.out_id == id)
    }
}
