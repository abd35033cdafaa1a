//! Executor implementations for the sheetwright batch driver.
//!
//! ## Available Executors
//!
//! - [`RayonExecutor`]: Fixed-size work-stealing pool (feature: `rayon`)
//! - [`SyncExecutor`]: Sequential execution (re-exported from sheetwright-traits)
//!
//! ## Usage
//!
//! ```ignore
//! use sheetwright_executor::{ExecutorImpl, RayonExecutor};
//! use sheetwright_traits::Executor;
//!
//! let executor = ExecutorImpl::Rayon(RayonExecutor::with_threads(4)?);
//! let results = executor.execute_all(files, build_one);
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use sheetwright_traits::{Executor, ExecutorError, SyncExecutor};

/// A type-erased executor that wraps concrete executor implementations.
///
/// Since the `Executor` trait has generic methods, it cannot be used as a trait object
/// (`dyn Executor`). This enum holds the concrete executor types and delegates to them.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    /// Sequential executor (no parallelism)
    Sync(SyncExecutor),

    /// Rayon work-stealing thread pool executor
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// Picks a pool of `workers` threads, or the sequential executor for a
    /// single worker.
    pub fn for_workers(workers: usize) -> Result<Self, ExecutorError> {
        #[cfg(feature = "rayon")]
        {
            if workers > 1 {
                return Ok(ExecutorImpl::Rayon(RayonExecutor::with_threads(workers)?));
            }
        }
        let _ = workers;
        Ok(ExecutorImpl::Sync(SyncExecutor::new()))
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_worker_is_sequential() {
        let executor = ExecutorImpl::for_workers(1).unwrap();
        assert_eq!(executor.name(), "SyncExecutor");
        assert_eq!(executor.parallelism(), 1);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn many_workers_use_a_pool() {
        let executor = ExecutorImpl::for_workers(3).unwrap();
        assert_eq!(executor.name(), "RayonExecutor");
        assert_eq!(executor.parallelism(), 3);
    }
}
