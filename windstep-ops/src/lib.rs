// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Order-sensitive windowing steps over bulked traversers.
//!
//! - [`RangeWindowStep`]: streaming skip/limit over bulk positions `[low, high)`
//! - [`TailWindowStep`]: barrier keeping the last `limit` bulk
//!
//! Both run unchanged as one sequential pull stream or as per-partition
//! clones whose partial outputs are reduced with [`RangeMergeOperator`] /
//! [`TailMergeOperator`] and finalized through the step itself.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod merge;
pub mod range;
pub mod tail;
pub mod window_step;
pub mod windowed;

pub use merge::{RangeMergeOperator, TailMergeOperator};
pub use range::{Admission, RangeWindowStep};
pub use tail::TailWindowStep;
pub use window_step::WindowStep;
pub use windowed::{WindowStepExt, Windowed};
