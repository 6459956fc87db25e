// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for windstep
//!
//! Stream exhaustion is never an error: a step signals it by returning `None`
//! from [`Step::process_next`](crate::Step::process_next). The variants below
//! are genuine faults, raised either at construction time or while a
//! partitioned computation is merging partial results.
//!
//! # Examples
//!
//! ```
//! use windstep_core::{Result, WindstepError};
//!
//! fn check(low: i64, high: i64) -> Result<()> {
//!     if high != -1 && low > high {
//!         return Err(WindstepError::invalid_range(low, high));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(5, 2).is_err());
//! ```

use crate::step_id::StepId;

/// Root error type for all windstep operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindstepError {
    /// A range window was configured with bounds that describe no legal window
    ///
    /// Raised at construction, before any progress state exists.
    #[error("Not a legal range: [{low}, {high}]")]
    InvalidRange {
        /// Configured lower bound
        low: i64,
        /// Configured upper bound (`-1` for unbounded)
        high: i64,
    },

    /// Partial results were reported under a key that was never registered
    ///
    /// This indicates an inconsistent merge state; the partition that
    /// reported it must not keep running.
    #[error("No memory compute key registered for step {step_id}")]
    UnknownMemoryKey {
        /// Step whose partial output could not be reduced
        step_id: StepId,
    },

    /// A step without a merge operator was handed to a partitioned executor
    #[error("Step {step} cannot be merged across partitions")]
    NotMergeable {
        /// Display form of the offending step
        step: String,
    },

    /// A partition's task failed before reporting its partial output
    #[error("Partition {partition} failed: {context}")]
    PartitionFailed {
        /// Index of the failed partition
        partition: usize,
        /// What went wrong
        context: String,
    },

    /// The computation did not converge within the configured superstep budget
    #[error("Computation did not converge within {limit} supersteps")]
    SuperstepLimitExceeded {
        /// The configured maximum
        limit: usize,
    },
}

impl WindstepError {
    /// Create an invalid range error for the given bounds
    pub const fn invalid_range(low: i64, high: i64) -> Self {
        Self::InvalidRange { low, high }
    }

    /// Create a partition failure with the given context
    pub fn partition_failed(partition: usize, context: impl Into<String>) -> Self {
        Self::PartitionFailed {
            partition,
            context: context.into(),
        }
    }

    /// Check if this error was raised while building a step
    ///
    /// Configuration errors prevent instantiation; every other variant aborts
    /// a running computation.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}

/// Specialized Result type for windstep operations
pub type Result<T> = std::result::Result<T, WindstepError>;
