//! Rayon-based parallel executor.
//!
//! Unlike rayon's global pool, each `RayonExecutor` owns a pool of a fixed
//! size so a batch can be sized to the machine independently of anything
//! else in the process.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use sheetwright_traits::{Executor, ExecutorError};
use std::fmt;
use std::sync::Arc;

/// A parallel executor backed by a dedicated rayon thread pool.
#[derive(Clone)]
pub struct RayonExecutor {
    pool: Arc<ThreadPool>,
    num_threads: usize,
}

impl RayonExecutor {
    /// Creates an executor with exactly `num_threads` worker threads.
    pub fn with_threads(num_threads: usize) -> Result<Self, ExecutorError> {
        let num_threads = num_threads.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("sheetwright-worker-{i}"))
            .build()
            .map_err(|e| ExecutorError::new(e.to_string()))?;
        log::debug!("Started rayon pool with {} threads", num_threads);
        Ok(Self {
            pool: Arc::new(pool),
            num_threads,
        })
    }
}

impl fmt::Debug for RayonExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RayonExecutor")
            .field("num_threads", &self.num_threads)
            .finish()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        self.pool.install(|| items.into_par_iter().map(f).collect())
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.pool.install(|| items.into_par_iter().map(f).collect())
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_rayon_executor_processes_items() {
        let executor = RayonExecutor::with_threads(2).unwrap();
        let results = executor.execute_all(vec![1, 2, 3, 4, 5], |x| x * 2);
        // Indexed parallel iterators collect in input order.
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_rayon_executor_isolates_failures() {
        let executor = RayonExecutor::with_threads(4).unwrap();
        let results: Vec<Result<i32, &str>> =
            executor.execute_all_fallible(vec![1, 2, 0, 4], |x| {
                if x == 0 { Err("division by zero") } else { Ok(10 / x) }
            });

        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
    }

    #[test]
    fn test_rayon_executor_pool_size() {
        let executor = RayonExecutor::with_threads(3).unwrap();
        assert_eq!(executor.parallelism(), 3);
        let zero = RayonExecutor::with_threads(0).unwrap();
        assert_eq!(zero.parallelism(), 1);
    }

    #[test]
    fn test_rayon_executor_runs_every_item() {
        let executor = RayonExecutor::with_threads(4).unwrap();
        let counter = Arc::new(AtomicUsize::new(0));
        let items: Vec<usize> = (0..100).collect();

        let _ = executor.execute_all(items, {
            let counter = counter.clone();
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }
}
