//! Bounded background batch translation.
//!
//! Jobs run on a dedicated rayon pool. Workers check a shared
//! [`CancellationToken`] before picking up each job and push
//! [`ProgressEvent`]s down a channel that the owner drains without blocking.

use std::{
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread::{self, JoinHandle},
};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    backend::TranslationBackend,
    orchestrator::{Translator, is_error_sentinel},
};
use crate::core::TranslationStore;

pub const DEFAULT_MAX_WORKERS: usize = 5;

/// Shared flag asking workers to stop taking new jobs.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// One entry to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub key: String,
    pub text: String,
    pub context: String,
}

/// Outcome counts for a finished or cancelled batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub translated: usize,
    pub failed: usize,
    pub cancelled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Progress {
        done: usize,
        total: usize,
        key: String,
        translated: String,
    },
    Finished(BatchSummary),
}

/// Parameters shared by every job of a batch.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub target_language: String,
    pub style: String,
    pub max_workers: usize,
}

/// Owner's side of a running batch.
#[derive(Debug)]
pub struct BatchHandle {
    token: CancellationToken,
    events: Receiver<ProgressEvent>,
    thread: JoinHandle<Result<BatchSummary>>,
}

impl BatchHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Every event queued since the last call. Never blocks.
    pub fn drain(&self) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        events
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the batch to finish.
    pub fn join(self) -> Result<BatchSummary> {
        self.thread
            .join()
            .map_err(|_| anyhow!("Batch translation thread panicked"))?
    }
}

/// Start translating `jobs` in the background.
///
/// Every result is written into `store` under the job's key and the target
/// language. Error sentinels are stored too, so failures stay visible in the
/// export, and are counted as failures.
pub fn spawn_batch<B>(
    translator: Arc<Translator<B>>,
    jobs: Vec<BatchJob>,
    options: BatchOptions,
    store: Arc<Mutex<TranslationStore>>,
) -> Result<BatchHandle>
where
    B: TranslationBackend + Send + Sync + 'static,
{
    let token = CancellationToken::new();
    let (sender, events) = mpsc::channel();
    let worker_token = token.clone();
    let thread = thread::Builder::new()
        .name("chatloc-batch".into())
        .spawn(move || run_batch(&translator, &jobs, &options, &store, &worker_token, &sender))
        .context("Failed to start batch translation thread")?;

    Ok(BatchHandle {
        token,
        events,
        thread,
    })
}

/// Translate `jobs` on a bounded pool, blocking until done or cancelled.
pub fn run_batch<B>(
    translator: &Translator<B>,
    jobs: &[BatchJob],
    options: &BatchOptions,
    store: &Mutex<TranslationStore>,
    token: &CancellationToken,
    events: &Sender<ProgressEvent>,
) -> Result<BatchSummary>
where
    B: TranslationBackend + Sync,
{
    let total = jobs.len();
    let workers = options.max_workers.min(total).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("chatloc-worker-{}", i))
        .build()
        .context("Failed to build translation worker pool")?;

    info!(total, workers, language = %options.target_language, "Starting batch translation");

    let done = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    pool.install(|| {
        jobs.par_iter().with_max_len(1).for_each(|job| {
            if token.is_cancelled() {
                return;
            }
            let translated = translator.translate(
                &job.text,
                &options.target_language,
                &options.style,
                &job.context,
            );
            if is_error_sentinel(&translated) {
                failed.fetch_add(1, Ordering::SeqCst);
            }
            store
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .set(&job.key, &options.target_language, &translated);
            let done = done.fetch_add(1, Ordering::SeqCst) + 1;
            // The receiver may already be gone; the batch still completes.
            let _ = events.send(ProgressEvent::Progress {
                done,
                total,
                key: job.key.clone(),
                translated,
            });
        });
    });

    let done = done.into_inner();
    let failed = failed.into_inner();
    let summary = BatchSummary {
        total,
        translated: done - failed,
        failed,
        cancelled: token.is_cancelled() && done < total,
    };
    debug!(?summary, "Batch translation finished");
    let _ = events.send(ProgressEvent::Finished(summary));
    Ok(summary)
}
