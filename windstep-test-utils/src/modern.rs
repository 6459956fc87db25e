// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::graph::Graph;
use crate::loader::{load_graph, FixtureError};

/// The six-vertex "modern" toy graph in loader line format.
pub const MODERN: &str = "\
1:person:marko:29 knows:2:0.5,knows:4:1.0,created:3:0.4
2:person:vadas:27
3:software:lop:java
4:person:josh:32 created:5:1.0,created:3:0.4
5:software:ripple:java
6:person:peter:35 created:3:0.2
";

pub fn modern_graph() -> Result<Graph, FixtureError> {
    load_graph(MODERN)
}

/// Vertex names of the modern graph in id order.
pub fn modern_names() -> Result<Vec<String>, FixtureError> {
    Ok(modern_graph()?
        .vertices
        .into_iter()
        .map(|vertex| vertex.name)
        .collect())
}
