/// Parallel file processing module for mdsimplify
///
/// Every file is transformed with its own fence, list and block state, so the
/// files of one directory pair can be processed on rayon's pool without any
/// coordination. Results always come back in input order.
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable/disable parallel execution
    pub enabled: bool,
    /// Number of threads to use (None = auto-detect)
    pub thread_count: Option<usize>,
    /// Minimum number of files to enable parallel execution
    pub min_file_count: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thread_count: None, // Auto-detect based on CPU cores
            min_file_count: 2,  // At least 2 files to benefit from parallelization
        }
    }
}

/// File-level parallel processing for multiple files
pub struct FileParallelProcessor {
    config: ParallelConfig,
}

impl FileParallelProcessor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(ParallelConfig::default())
    }

    /// Run `job` on every file, in parallel when worthwhile.
    ///
    /// A failing job never affects the others.
    pub fn process_files<T, E, F>(&self, files: &[PathBuf], job: F) -> Vec<(PathBuf, Result<T, E>)>
    where
        T: Send,
        E: Send,
        F: Fn(&Path) -> Result<T, E> + Sync + Send,
    {
        let run = |path: &PathBuf| {
            let start = Instant::now();
            let result = job(path);
            let duration = start.elapsed();

            if duration.as_millis() > 1000 {
                log::debug!("[mdsimplify-parallel] File {} took {:?}", path.display(), duration);
            }

            (path.clone(), result)
        };

        if !self.should_use_parallel(files.len()) {
            // Fall back to sequential processing
            return files.iter().map(run).collect();
        }

        self.run_parallel(files, run)
    }

    #[cfg(feature = "parallel")]
    fn run_parallel<R, G>(&self, files: &[PathBuf], run: G) -> Vec<R>
    where
        R: Send,
        G: Fn(&PathBuf) -> R + Sync + Send,
    {
        if let Some(thread_count) = self.config.thread_count {
            match rayon::ThreadPoolBuilder::new().num_threads(thread_count).build() {
                Ok(pool) => return pool.install(|| files.par_iter().map(&run).collect()),
                Err(e) => log::warn!("[mdsimplify-parallel] Failed to set thread pool size to {thread_count}: {e}"),
            }
        }
        files.par_iter().map(run).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel<R, G>(&self, files: &[PathBuf], run: G) -> Vec<R>
    where
        G: Fn(&PathBuf) -> R,
    {
        files.iter().map(run).collect()
    }

    /// Determine if file-level parallel processing should be used
    pub fn should_use_parallel(&self, file_count: usize) -> bool {
        if !cfg!(feature = "parallel") || !self.config.enabled {
            return false;
        }

        // Need at least minimum files to benefit from parallelization
        if file_count < self.config.min_file_count {
            return false;
        }

        if self.config.thread_count == Some(1) {
            return false;
        }

        // Check if we have enough CPU cores
        let cpu_cores = std::thread::available_parallelism().map_or(1, |n| n.get());
        cpu_cores >= 2 || self.config.thread_count.is_some_and(|n| n >= 2)
    }
}
