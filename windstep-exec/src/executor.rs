// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Superstep execution of one mergeable step across partitions.
//!
//! # Runtime Requirements
//!
//! Partition work runs on `tokio::task::spawn_blocking`, so [`PartitionedExecutor::run`]
//! must be awaited inside a tokio runtime. A current-thread runtime is enough.

use crate::config::ExecutorConfig;
use crate::memory::Memory;
use crate::partition::Partition;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::Display;
use futures::future::join_all;
use windstep_core::{DistributedMergeable, Result, Traverser, TraverserSet, WindstepError};

/// Runs a step over independent partitions and reduces their partial outputs.
///
/// Every partition gets its own
/// [`partition_clone`](DistributedMergeable::partition_clone) of the step,
/// which it keeps for the whole run. In each superstep, every partition that
/// still has a batch runs its clone over that batch on a blocking task. A
/// barrier step only sees its partition's input once the last batch has
/// arrived; earlier batches are held back and it reports nothing until then.
/// Once all tasks of a superstep have joined, their partial outputs are
/// folded into [`Memory`] in partition order, so the reduction never depends
/// on which task finished first. When no partition has input left the
/// gathered set is handed to the step's
/// [`finalize`](DistributedMergeable::finalize).
///
/// # Examples
///
/// ```
/// use windstep_core::Traverser;
/// use windstep_exec::{round_robin, ExecutorConfig, PartitionedExecutor};
/// use windstep_ops::RangeWindowStep;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> windstep_core::Result<()> {
/// let executor = PartitionedExecutor::new(ExecutorConfig::default());
/// let step = RangeWindowStep::<u32>::new(0, 100)?;
/// let partitions = round_robin((1..=6).map(Traverser::new), 3);
///
/// let result = executor.run(step, partitions).await?;
///
/// assert_eq!(result.total_bulk(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionedExecutor {
    config: ExecutorConfig,
}

impl PartitionedExecutor {
    pub const fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Runs `step` over `partitions` and returns the finalized result.
    ///
    /// # Errors
    ///
    /// - [`WindstepError::NotMergeable`] if `step` exposes no merge operator
    /// - [`WindstepError::PartitionFailed`] if a partition task panics or is cancelled
    /// - [`WindstepError::SuperstepLimitExceeded`] if partitions still hold
    ///   batches after the configured number of supersteps
    pub async fn run<S, T>(
        &self,
        mut step: S,
        partitions: Vec<Partition<T>>,
    ) -> Result<TraverserSet<T>>
    where
        S: DistributedMergeable<T> + Display + Send + 'static,
        T: Send + 'static,
    {
        let key = step
            .merge_operator()
            .ok_or_else(|| WindstepError::NotMergeable {
                step: step.to_string(),
            })?;
        let step_id = key.step_id();

        let memory = Memory::new();
        memory.register(key);

        let mut workers: Vec<Option<Worker<S, T>>> = partitions
            .into_iter()
            .map(|partition| Some(Worker::new(step.partition_clone(), partition)))
            .collect();

        let mut superstep = 0;
        loop {
            let mut pending = Vec::new();
            for (index, slot) in workers.iter_mut().enumerate() {
                let has_batch = slot.as_ref().is_some_and(Worker::has_batch);
                if has_batch {
                    if let Some(worker) = slot.take() {
                        pending.push((index, worker));
                    }
                }
            }

            if pending.is_empty() {
                break;
            }
            if superstep == self.config.max_supersteps() {
                windstep_core::error!(
                    "{} still has {} active partitions after {} supersteps",
                    step,
                    pending.len(),
                    superstep
                );
                return Err(WindstepError::SuperstepLimitExceeded {
                    limit: self.config.max_supersteps(),
                });
            }
            superstep += 1;
            windstep_core::debug!(
                "{} superstep {} running {} partitions",
                step,
                superstep,
                pending.len()
            );

            let (indices, handles): (Vec<_>, Vec<_>) = pending
                .into_iter()
                .map(|(index, worker)| {
                    let handle = tokio::task::spawn_blocking(move || worker.run_batch());
                    (index, handle)
                })
                .unzip();

            for (index, outcome) in indices.into_iter().zip(join_all(handles).await) {
                let (worker, partial) = outcome.map_err(|join_error| {
                    windstep_core::error!("partition {} failed: {}", index, join_error);
                    WindstepError::partition_failed(index, join_error.to_string())
                })?;

                memory.add(step_id, partial)?;
                workers[index] = Some(worker);
            }

            windstep_core::info!(
                "{} superstep {} merged into {} entries",
                step,
                superstep,
                memory.len_of(step_id).unwrap_or(0)
            );
        }

        let gathered = memory.take(step_id)?;
        windstep_core::debug!("{} finalizing {} gathered entries", step, gathered.len());
        Ok(step.finalize(gathered))
    }
}

/// One partition's clone, its remaining input and any batches held back for a barrier.
struct Worker<S, T> {
    step: S,
    partition: Partition<T>,
    held: Vec<Traverser<T>>,
}

impl<S, T> Worker<S, T>
where
    S: DistributedMergeable<T>,
{
    fn new(step: S, partition: Partition<T>) -> Self {
        Self {
            step,
            partition,
            held: Vec::new(),
        }
    }

    fn has_batch(&self) -> bool {
        self.partition.pending_batches() > 0
    }

    /// Pulls the clone dry over the next batch.
    ///
    /// A barrier must not emit before its local stream is exhausted, so until
    /// the partition's last batch the batch is only held and the partial
    /// output is empty.
    fn run_batch(mut self) -> (Self, TraverserSet<T>) {
        let batch = self.partition.next_batch().unwrap_or_default();
        if self.step.is_barrier() && self.has_batch() {
            self.held.extend(batch);
            return (self, TraverserSet::new());
        }

        let mut upstream = core::mem::take(&mut self.held).into_iter().chain(batch);
        let mut partial = TraverserSet::new();
        while let Some(traverser) = self.step.process_next(&mut upstream) {
            partial.push(traverser);
        }
        (self, partial)
    }
}
