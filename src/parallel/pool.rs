//! Rayon thread pool configuration for batch solving.
//!
//! Build the pool once with [WorkerPool::build] and reuse the handle for every chunk of a run.

use std::fmt;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Configures how many worker threads are used for parallel batch execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

#[derive(Debug)]
pub struct PoolError(ThreadPoolBuildError);

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to start worker pool: {}", self.0)
    }
}

impl std::error::Error for PoolError {}

/// A started pool. `Global` runs on Rayon's shared pool.
#[derive(Debug)]
pub enum PoolHandle {
    Global,
    Dedicated(ThreadPool),
}

impl PoolHandle {
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self {
            Self::Global => f(),
            Self::Dedicated(pool) => pool.install(f),
        }
    }
}

impl WorkerPool {
    /// Use exactly `n` worker threads; 0 means all cores.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Start the threads for this configuration. Only a non-zero worker count spawns a pool.
    pub fn build(&self) -> Result<PoolHandle, PoolError> {
        if self.workers == 0 {
            return Ok(PoolHandle::Global);
        }
        ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("prize-path-worker-{i}"))
            .build()
            .map(PoolHandle::Dedicated)
            .map_err(PoolError)
    }
}
