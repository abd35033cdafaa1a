//! Executor trait for abstracting batch execution.
//!
//! The batch driver fans one sheet build out per input file. This trait keeps
//! the driver independent of the threading implementation used to do so.

use std::fmt::Debug;
use thiserror::Error;

/// Error raised when an executor cannot be constructed.
#[derive(Error, Debug, Clone)]
#[error("Executor error: {message}")]
pub struct ExecutorError {
    pub message: String,
}

impl ExecutorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A trait for executing work items, potentially in parallel.
///
/// # Implementations
///
/// - `SyncExecutor`: Sequential execution, no threading (always available)
/// - `RayonExecutor`: Fixed-size work-stealing pool (sheetwright-executor)
///
/// # Example
///
/// ```ignore
/// let executor = SyncExecutor::new();
/// let results = executor.execute_all(files, |file| build(file));
/// ```
pub trait Executor: Send + Sync + Debug {
    /// Execute a batch of work items, potentially in parallel.
    ///
    /// Results are returned in the same order as the input items, even when
    /// the items themselves complete out of order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Execute a batch of work items that may fail.
    ///
    /// A failing item never prevents the remaining items from running.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// Returns the number of items this executor can process at once.
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A synchronous executor that processes items sequentially, in order.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_executor_keeps_input_order() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(vec!["a", "b", "c"], |s| s.to_uppercase());
        assert_eq!(results, vec!["A", "B", "C"]);
    }

    #[test]
    fn sync_executor_runs_past_failures() {
        let executor = SyncExecutor::new();
        let results: Vec<Result<u8, String>> = executor.execute_all_fallible(vec![1, 0, 3], |x| {
            if x == 0 {
                Err("zero".to_string())
            } else {
                Ok(x)
            }
        });
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok(3));
    }

    #[test]
    fn sync_executor_empty_input() {
        let executor = SyncExecutor::new();
        let results: Vec<i32> = executor.execute_all(Vec::<i32>::new(), |x| x);
        assert!(results.is_empty());
    }

    #[test]
    fn sync_executor_reports_single_slot() {
        let executor = SyncExecutor::new();
        assert_eq!(executor.parallelism(), 1);
        assert_eq!(executor.name(), "SyncExecutor");
    }

    #[test]
    fn executor_error_display() {
        let err = ExecutorError::new("pool refused");
        assert_eq!(err.to_string(), "Executor error: pool refused");
    }
}
