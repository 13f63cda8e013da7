use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
        mpsc::{self, Receiver, SyncSender},
    },
    thread,
};

use tilesearch_core::{AStar, SearchConfig, SearchOutcome};

use crate::{
    Board, BenchmarkConfig, BenchmarkReport, EightPuzzle, Heuristic, IdentityScheme, PuzzleError,
    PuzzleGenerator,
};

/// One unit of work: a start board solved with one heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    /// Index of the start board within the batch.
    pub puzzle: usize,
    pub start: Board,
    pub heuristic: Heuristic,
}

/// Message on the work queue. `Shutdown` tells exactly one worker to exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkItem {
    Solve(Job),
    Shutdown,
}

/// Outcome of one job, tagged with the job that produced it.
#[derive(Debug, Clone)]
pub struct JobResult {
    pub job: Job,
    pub outcome: SearchOutcome,
}

type ResultSender = SyncSender<Result<JobResult, PuzzleError>>;

/// Count of jobs still waiting on the work queue, shared by all workers.
#[derive(Debug)]
pub(crate) struct QueueDepth(AtomicUsize);

impl QueueDepth {
    pub(crate) fn new(jobs: usize) -> Self {
        QueueDepth(AtomicUsize::new(jobs))
    }

    /// Record that one job left the queue and return how many remain.
    pub(crate) fn take(&self) -> usize {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| {
                Some(left.saturating_sub(1))
            })
            .map_or(0, |left| left.saturating_sub(1))
    }

    pub(crate) fn remaining(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }
}

/// Benchmark harness: generates starts, fans `(start, heuristic)` jobs out to
/// isolated workers over a bounded queue, and aggregates the results.
///
/// Workers share nothing but the two queues; every search owns its own open
/// and closed sets.
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
    domain: EightPuzzle,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_goal(config, Board::GOAL)
    }

    pub fn with_goal(config: BenchmarkConfig, goal: Board) -> Self {
        Benchmark {
            config,
            domain: EightPuzzle::new(goal),
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Generate `config.puzzles` solvable starts from `config.seed` and benchmark them.
    pub fn run(&self) -> Result<BenchmarkReport, PuzzleError> {
        self.config.validate()?;
        let mut generator = PuzzleGenerator::new(self.config.seed);
        let starts = generator.random_solvable_batch(self.config.puzzles, self.domain.goal());
        self.run_on(&starts)
    }

    /// Benchmark the given starts against every configured heuristic.
    /// Returns once exactly one result per job has arrived.
    pub fn run_on(&self, starts: &[Board]) -> Result<BenchmarkReport, PuzzleError> {
        let jobs: Vec<Job> = starts
            .iter()
            .enumerate()
            .flat_map(|(puzzle, &start)| {
                self.config.heuristics.iter().map(move |&heuristic| Job {
                    puzzle,
                    start,
                    heuristic,
                })
            })
            .collect();
        let expected = jobs.len();
        let workers = self.config.workers;
        let capacity = self.config.queue_capacity_for(expected);

        let (work_tx, work_rx) = mpsc::sync_channel::<WorkItem>(capacity);
        let (result_tx, result_rx) = mpsc::sync_channel(capacity);

        for job in jobs {
            work_tx
                .send(WorkItem::Solve(job))
                .map_err(|_| PuzzleError::QueueClosed)?;
        }
        for _ in 0..workers.max(1) {
            work_tx
                .send(WorkItem::Shutdown)
                .map_err(|_| PuzzleError::QueueClosed)?;
        }
        drop(work_tx);
        let depth = QueueDepth::new(expected);
        log::info!("queued {} jobs for {workers} workers", depth.remaining());

        let work_rx = Mutex::new(work_rx);
        let mut report = BenchmarkReport::new(starts.len(), &self.config.heuristics);

        if workers == 0 {
            work_loop(
                0,
                &work_rx,
                &depth,
                &result_tx,
                &self.domain,
                self.config.identity,
                &self.config.search,
            );
            drop(result_tx);
            collect(&result_rx, expected, &mut report)?;
            return Ok(report);
        }

        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    let work_rx = &work_rx;
                    let depth = &depth;
                    let result_tx = result_tx.clone();
                    let domain = &self.domain;
                    let identity = self.config.identity;
                    let search = &self.config.search;
                    scope.spawn(move || {
                        work_loop(worker, work_rx, depth, &result_tx, domain, identity, search)
                    })
                })
                .collect();
            drop(result_tx);

            let collected = collect(&result_rx, expected, &mut report);

            let mut panicked = false;
            for handle in handles {
                panicked |= handle.join().is_err();
            }
            if panicked {
                return Err(PuzzleError::WorkerPanicked);
            }
            collected
        })?;

        Ok(report)
    }
}

/// Pull jobs until a `Shutdown` arrives or the queue is gone.
fn work_loop(
    worker: usize,
    queue: &Mutex<Receiver<WorkItem>>,
    depth: &QueueDepth,
    results: &ResultSender,
    domain: &EightPuzzle,
    identity: IdentityScheme,
    search: &SearchConfig,
) {
    log::info!("worker {worker} started");
    let mut astar = AStar::new(search.clone());

    loop {
        let item = match queue.lock() {
            Ok(receiver) => receiver.recv(),
            Err(_) => break,
        };
        let job = match item {
            Ok(WorkItem::Solve(job)) => job,
            Ok(WorkItem::Shutdown) | Err(_) => break,
        };

        log::info!("{} puzzles left in the queue", depth.take());
        log::debug!(
            "worker {worker} took puzzle {} with {}",
            job.puzzle,
            job.heuristic
        );
        let result = domain
            .solve_with(&mut astar, job.start, job.heuristic, identity)
            .map(|outcome| JobResult { job, outcome });
        if results.send(result).is_err() {
            break;
        }
    }

    log::info!("worker {worker} exiting");
}

/// Receive exactly `expected` results; the first failed search aborts the benchmark.
fn collect(
    results: &Receiver<Result<JobResult, PuzzleError>>,
    expected: usize,
    report: &mut BenchmarkReport,
) -> Result<(), PuzzleError> {
    for _ in 0..expected {
        let result = results.recv().map_err(|_| PuzzleError::QueueClosed)??;
        report.record(&result);
    }
    Ok(())
}
