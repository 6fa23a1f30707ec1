// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

pub mod classify;
pub mod config;
pub mod counter;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod tally;

use crate::classify::FileRecord;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::tally::{Summary, Tally};

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub summary: Summary,
    /// Files found by the walker.
    pub discovered: u64,
    /// Files that could not be read and were left out.
    pub skipped: u64,
}

/// Scan `config.walk.root`, counting every file on a worker pool.
///
/// The walker runs on its own thread and feeds a bounded queue; a pool of
/// `config.threads` workers drains it. The call returns once the walker and
/// every worker have finished.
///
/// # Errors
///
/// Returns an error only for failures that prevent the scan from starting:
/// an unusable root or a worker pool that cannot be built. Unreadable files
/// and directories are skipped.
pub fn run(config: &Config) -> Result<RunResult> {
    if config.threads == 0 {
        return Err(EngineError::Config("threads must be at least 1".into()));
    }
    if config.walk.queue_capacity == 0 {
        return Err(EngineError::Config("queue capacity must be at least 1".into()));
    }
    filesystem::validate_root(&config.walk.root)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .thread_name(|i| format!("linetally-worker-{i}"))
        .build()?;

    info!(
        root = %config.walk.root.display(),
        threads = config.threads,
        "starting scan"
    );

    let tally = Tally::new();
    let skipped = AtomicU64::new(0);
    let (tx, rx) = crossbeam_channel::bounded::<FileRecord>(config.walk.queue_capacity);

    let discovered = std::thread::scope(|s| {
        let walker = s.spawn(move || filesystem::walk_files(&config.walk.root, &tx));

        pool.install(|| {
            rx.into_iter().par_bridge().for_each(|record| {
                if let Err(e) = processor::process_file(&record, &tally) {
                    debug!(error = %e, "skipping file");
                    skipped.fetch_add(1, Ordering::Relaxed);
                }
            });
        });

        walker
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    });

    let result = RunResult {
        summary: tally.into_summary(),
        discovered,
        skipped: skipped.into_inner(),
    };
    info!(
        files = result.discovered,
        skipped = result.skipped,
        total = result.summary.total,
        "scan finished"
    );
    Ok(result)
}
