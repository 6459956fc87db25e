// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Partitioned execution for mergeable windowing steps.
//!
//! A [`PartitionedExecutor`] runs independent clones of one step over
//! [`Partition`]s in supersteps, reduces their partial outputs in a
//! [`Memory`] with the step's merge operator, and finalizes the gathered set
//! back through the step.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod config;
pub mod executor;
pub mod memory;
pub mod partition;

pub use self::config::ExecutorConfig;
pub use self::executor::PartitionedExecutor;
pub use self::memory::Memory;
pub use self::partition::{round_robin, Partition};
