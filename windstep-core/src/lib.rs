// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for bulk-aware windowing steps.
//!
//! A [`Traverser`] carries a payload and a *bulk*: how many logically
//! identical tokens it stands for. Steps implement the pull-driven [`Step`]
//! contract and, when they can run across partitions, the
//! [`DistributedMergeable`] contract whose [`MergeOperator`] reduces partial
//! outputs gathered as [`TraverserSet`]s.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod bypass;
pub mod error;
#[doc(hidden)]
pub mod logging;
pub mod merge;
pub mod step;
pub mod step_id;
pub mod traverser;
pub mod traverser_set;

pub use self::bypass::{BypassMode, Bypassing};
pub use self::error::{Result, WindstepError};
pub use self::merge::{MemoryComputeKey, MergeOperator};
pub use self::step::{DistributedMergeable, Step, TraverserRequirement};
pub use self::step_id::StepId;
pub use self::traverser::Traverser;
pub use self::traverser_set::TraverserSet;
