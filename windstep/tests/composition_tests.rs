// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::BTreeMap;
use windstep::prelude::*;
use windstep::WindstepError;
use windstep_test_utils::{assert_no_dead_traversers, modern::modern_graph, pairs, values};

/// Software vertices reached over `created` edges, bulked by how often each is reached.
fn created_software() -> anyhow::Result<Vec<Traverser<String>>> {
    let graph = modern_graph()?;
    let mut reached: BTreeMap<u64, u64> = BTreeMap::new();
    for edge in graph.edges.iter().filter(|edge| edge.label == "created") {
        *reached.entry(edge.in_id).or_default() += 1;
    }

    Ok(reached
        .into_iter()
        .filter_map(|(id, bulk)| {
            graph
                .vertex(id)
                .map(|vertex| Traverser::with_bulk(vertex.name.clone(), bulk))
        })
        .collect())
}

#[test]
fn test_created_software_is_bulked() -> anyhow::Result<()> {
    let input = created_software()?;

    assert_eq!(
        pairs(input),
        vec![("lop".to_string(), 3), ("ripple".to_string(), 1)]
    );
    Ok(())
}

#[test]
fn test_tail_over_bulked_pipeline() -> anyhow::Result<()> {
    // Act
    let output: Vec<_> = created_software()?.into_iter().tail_window(2).collect();

    // Assert - the older lop entry is trimmed down to what the limit still needs
    assert_no_dead_traversers(&output);
    assert_eq!(
        pairs(output),
        vec![("lop".to_string(), 1), ("ripple".to_string(), 1)]
    );
    Ok(())
}

#[test]
fn test_range_then_tail_compose() -> anyhow::Result<()> {
    // Act
    let output = pairs(
        created_software()?
            .into_iter()
            .range_window(1, 3)?
            .tail_window(1),
    );

    // Assert - range keeps lop x2 and never reaches ripple
    assert_eq!(output, vec![("lop".to_string(), 1)]);
    Ok(())
}

#[test]
fn test_bypassed_windows_compose_to_identity() -> anyhow::Result<()> {
    // Arrange
    let input = created_software()?;
    let mut range = RangeWindowStep::new(2, 3)?;
    let mut tail = TailWindowStep::new(1);
    range.set_bypass(true);
    tail.set_bypass(true);

    // Act
    let output: Vec<_> = input.clone().into_iter().through(range).through(tail).collect();

    // Assert
    assert_eq!(output, input);
    Ok(())
}

#[test]
fn test_illegal_range_reports_bounds() {
    let err = RangeWindowStep::<String>::new(4, 1).unwrap_err();

    assert_eq!(err, WindstepError::InvalidRange { low: 4, high: 1 });
    assert_eq!(err.to_string(), "Not a legal range: [4, 1]");
}

#[tokio::test]
async fn test_partitioned_tail_over_modern_names() -> anyhow::Result<()> {
    // Arrange - partitions [marko, lop, ripple] and [vadas, josh, peter]
    let graph = modern_graph()?;
    let names = graph.vertices.into_iter().map(|vertex| Traverser::new(vertex.name));
    let executor = PartitionedExecutor::new(ExecutorConfig::default());

    // Act
    let result = executor.run(TailWindowStep::new(2), round_robin(names, 2)).await?;

    // Assert - the first partition's tail fills the cap before the second is folded
    assert_eq!(values(result), vec!["lop", "ripple"]);
    Ok(())
}
