// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the windstep workspace.
//!
//! For development and testing only, not for production code.
//!
//! # Key Items
//!
//! - [`traversers`] / [`bulked`]: build upstream inputs
//! - [`values`] / [`pairs`]: flatten step output for assertions
//! - [`PullCounter`]: observe how far a step pulled its upstream
//! - [`load_graph`] and [`MODERN`]: the line-format graph fixture
//!
//! ```rust
//! use windstep_test_utils::{modern::modern_graph, traversers, values};
//!
//! let graph = modern_graph().unwrap();
//! let names = values(traversers(graph.vertices.into_iter().map(|v| v.name)));
//! assert_eq!(names[0], "marko");
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod graph;
pub mod helpers;
pub mod loader;
pub mod modern;

pub use graph::{Edge, Graph, Vertex, VertexAttribute};
pub use helpers::{
    assert_no_dead_traversers, bulked, pairs, set_of, traversers, values, PullCounter,
};
pub use loader::{load_graph, parse_line, FixtureError};
pub use modern::MODERN;
