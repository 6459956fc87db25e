// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Windstep
//!
//! Bulk-aware windowing steps for pull-driven traversal pipelines.
//!
//! ## Overview
//!
//! A pipeline moves [`Traverser`]s: a value plus a *bulk*, the number of
//! identical tokens it stands for. Windstep provides two global windows that
//! count in bulk rather than in traversers:
//!
//! - [`RangeWindowStep`] emits tokens `low..high` of the stream, splitting
//!   bulked traversers at the boundaries and pulling nothing past `high`
//! - [`TailWindowStep`] is a barrier that emits the last `limit` tokens
//!
//! Both can run over independent partitions: [`PartitionedExecutor`] runs one
//! fresh clone per partition, reduces their partial outputs with the step's
//! merge operator, and finalizes the gathered set back through the step.
//!
//! ## Quick Start
//!
//! ```rust
//! use windstep::prelude::*;
//!
//! # fn main() -> windstep::Result<()> {
//! let input = vec![Traverser::with_bulk("marko", 10), Traverser::new("josh")];
//!
//! let window: Vec<(&str, u64)> = input
//!     .into_iter()
//!     .range_window(3, 7)?
//!     .map(Traverser::into_parts)
//!     .collect();
//!
//! assert_eq!(window, vec![("marko", 4)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Partitioned execution
//!
//! ```rust
//! use windstep::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> windstep::Result<()> {
//! let partitions = round_robin((1..=10).map(Traverser::new), 2);
//! let executor = PartitionedExecutor::new(ExecutorConfig::default());
//!
//! let last = executor.run(TailWindowStep::new(3), partitions).await?;
//!
//! assert_eq!(last.total_bulk(), 3);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use windstep_core::{
    BypassMode, Bypassing, DistributedMergeable, MemoryComputeKey, MergeOperator, Result, Step,
    StepId, Traverser, TraverserRequirement, TraverserSet, WindstepError,
};

// Re-export the window steps
pub use windstep_ops::{
    Admission, RangeMergeOperator, RangeWindowStep, TailMergeOperator, TailWindowStep, WindowStep,
    WindowStepExt, Windowed,
};

// Re-export partitioned execution
pub use windstep_exec::{round_robin, ExecutorConfig, Memory, Partition, PartitionedExecutor};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        round_robin, Bypassing, DistributedMergeable, ExecutorConfig, Partition,
        PartitionedExecutor, RangeWindowStep, Step, TailWindowStep, Traverser, TraverserSet,
        WindowStep, WindowStepExt,
    };
}
