//! Execution engines for controlling computation strategy
//!
//! Bootstrap iterations are independent of one another, so the estimator
//! hands them to an engine that decides whether they run one after another
//! or across a Rayon thread pool.
//!
//! # Design Philosophy
//!
//! - **Zero-Cost**: Engine choice is a type parameter, resolved at compile time
//! - **Ordered Results**: `execute_batch` always returns results in index order
//! - **Thread Pool Integration**: The parallel engine can run on a dedicated pool

#[cfg(feature = "parallel")]
use crate::Result;
use tracing::debug;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Trait for execution engines that control how batches are processed
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Execute `f` for every index in `0..count`
    ///
    /// The returned vector holds `f(i)` at position `i`.
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl ExecutionEngine for SequentialEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        debug!("Sequential batch of {} items", count);
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's global thread pool, or a
/// dedicated one when constructed with [`ParallelEngine::with_num_threads`].
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine with default thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;
        debug!("Created dedicated pool with {} threads", pool.current_num_threads());

        Ok(Self {
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        debug!(
            "Parallel batch of {} items on {} threads",
            count,
            self.num_threads()
        );
        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine
}

/// Create a parallel engine on Rayon's global pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

/// Create an auto-selected engine based on available features
#[cfg(feature = "parallel")]
pub fn auto_engine() -> ParallelEngine {
    ParallelEngine::new()
}

/// Create an auto-selected engine based on available features
#[cfg(not(feature = "parallel"))]
pub fn auto_engine() -> SequentialEngine {
    SequentialEngine
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_debug_logs<F: FnOnce()>(f: F) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn test_sequential_engine() {
        let engine = sequential();

        let squares = engine.execute_batch(5, |i| i * i);
        assert_eq!(squares, vec![0, 1, 4, 9, 16]);

        assert!(engine.execute_batch(0, |i| i).is_empty());
        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert!(!engine.is_parallel());
        assert_eq!(engine.num_threads(), 1);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_preserves_order() {
        let engine = parallel();

        let values = engine.execute_batch(1000, |i| i as u64 * 3);
        let expected: Vec<u64> = (0..1000).map(|i| i * 3).collect();
        assert_eq!(values, expected);

        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.num_threads() > 0);
    }

    #[test]
    fn test_sequential_engine_logs_batches() {
        let logs = with_debug_logs(|| {
            sequential().execute_batch(3, |i| i);
        });
        assert!(logs.contains("Sequential batch of 3 items"), "{logs}");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_dedicated_pool() {
        let engine = ParallelEngine::with_num_threads(2).unwrap();
        assert_eq!(engine.num_threads(), 2);
        assert_eq!(engine.execute_batch(4, |i| i + 1), vec![1, 2, 3, 4]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine_logs_pool_size() {
        let logs = with_debug_logs(|| {
            let engine = ParallelEngine::with_num_threads(2).unwrap();
            engine.execute_batch(8, |i| i);
        });
        assert!(logs.contains("Created dedicated pool with 2 threads"), "{logs}");
        assert!(logs.contains("Parallel batch of 8 items on 2 threads"), "{logs}");
    }

    #[test]
    fn test_auto_engine() {
        let engine = auto_engine();
        assert!(engine.num_threads() > 0);
        assert_eq!(engine.execute_batch(3, |i| i), vec![0, 1, 2]);
    }
}
