// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Runtime settings of a [`PartitionedExecutor`](crate::PartitionedExecutor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    max_supersteps: usize,
}

impl ExecutorConfig {
    pub const DEFAULT_MAX_SUPERSTEPS: usize = 64;

    pub const fn new() -> Self {
        Self {
            max_supersteps: Self::DEFAULT_MAX_SUPERSTEPS,
        }
    }

    /// Upper bound on supersteps before the run is abandoned as non-converging.
    #[must_use]
    pub const fn with_max_supersteps(mut self, max_supersteps: usize) -> Self {
        self.max_supersteps = max_supersteps;
        self
    }

    pub const fn max_supersteps(&self) -> usize {
        self.max_supersteps
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self::new()
    }
}
