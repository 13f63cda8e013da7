use std::{fmt, fs, path::Path, time::Instant};

use serde::{Deserialize, Serialize};

use crate::search::{
    closed::ClosedSet, domain::SearchDomain, error::SearchError, heap::IndexedHeap, ids::StateId,
};

const DEFAULT_SEARCH_CONFIG_YAML: &str = include_str!("../../config/search.default.yaml");

/// Search configuration for a single A* run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop with `LimitReached` after this many expansions. `None` searches to completion.
    pub max_expansions: Option<u64>,
    /// Emit a trace progress line every `log_every` expansions; 0 disables it.
    pub log_every: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_expansions: None,
            log_every: 10_000,
        }
    }
}

impl SearchConfig {
    /// Parse a search config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SearchConfigError> {
        let config: SearchConfig = serde_yaml::from_str(yaml).map_err(SearchConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a search config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SearchConfigError> {
        let yaml = fs::read_to_string(path).map_err(SearchConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SEARCH_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SearchConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), SearchConfigError> {
        if self.max_expansions == Some(0) {
            return Err(SearchConfigError::Invalid(
                "max_expansions must be greater than 0 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for loading and validating `SearchConfig`.
#[derive(Debug)]
pub enum SearchConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for SearchConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            SearchConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            SearchConfigError::Invalid(err) => write!(f, "invalid search config: {err}"),
        }
    }
}

impl std::error::Error for SearchConfigError {}

/// Where the driver currently is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    Expanding,
    GoalFound,
    /// The open set ran dry without reaching the goal.
    Exhausted,
    LimitReached,
}

/// Counters collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchMetrics {
    /// States popped from the open set, including the goal itself.
    pub nodes_explored: u64,
    /// Successors produced by the domain.
    pub nodes_generated: u64,
    /// Successors pushed because their identity was unknown.
    pub nodes_inserted: u64,
    /// Open entries replaced by a cheaper copy (remove + push).
    pub open_decreased: u64,
    /// Closed entries moved back to the open set by a cheaper copy.
    pub closed_reopened: u64,
    /// Equal-or-worse rediscoveries that were dropped.
    pub discarded: u64,
    pub max_open_len: usize,
    pub elapsed_secs: f64,
}

/// Result of a run that reached the goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub nodes_explored: u64,
    /// Path cost `g` of the goal state when it was popped.
    pub path_length: u32,
    pub elapsed_secs: f64,
    pub metrics: SearchMetrics,
}

/// Terminal result of one A* run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Solved(SolveReport),
    /// No goal is reachable from the start; the open set was exhausted.
    Exhausted(SearchMetrics),
    /// `SearchConfig::max_expansions` was hit before the goal was found.
    LimitReached(SearchMetrics),
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    /// Return the goal's path length if the goal was reached.
    pub fn path_length(&self) -> Option<u32> {
        match self {
            SearchOutcome::Solved(report) => Some(report.path_length),
            SearchOutcome::Exhausted(_) | SearchOutcome::LimitReached(_) => None,
        }
    }

    pub fn metrics(&self) -> &SearchMetrics {
        match self {
            SearchOutcome::Solved(report) => &report.metrics,
            SearchOutcome::Exhausted(metrics) | SearchOutcome::LimitReached(metrics) => metrics,
        }
    }

    pub fn nodes_explored(&self) -> u64 {
        self.metrics().nodes_explored
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.metrics().elapsed_secs
    }

    /// The phase the driver ended in.
    pub fn phase(&self) -> SearchPhase {
        match self {
            SearchOutcome::Solved(_) => SearchPhase::GoalFound,
            SearchOutcome::Exhausted(_) => SearchPhase::Exhausted,
            SearchOutcome::LimitReached(_) => SearchPhase::LimitReached,
        }
    }
}

/// Snapshot handed to the expansion hook each time a state is popped.
#[derive(Debug)]
pub struct ExpansionEvent<'a, S> {
    pub state: &'a S,
    /// 1-based index of this expansion.
    pub expansion: u64,
    pub open_len: usize,
    pub closed_len: usize,
}

/// A* driver. Each run builds a fresh open heap and closed set, so one driver
/// can be reused for many independent searches.
#[derive(Debug, Clone)]
pub struct AStar {
    config: SearchConfig,
    phase: SearchPhase,
}

impl Default for AStar {
    fn default() -> Self {
        AStar::new(SearchConfig::default())
    }
}

impl AStar {
    pub fn new(config: SearchConfig) -> Self {
        AStar {
            config,
            phase: SearchPhase::Idle,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Phase of the most recent run, `Idle` before the first one.
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Search from `start` until the goal is popped or the open set runs dry.
    ///
    /// `score` must return `f = g + h` for a state; the driver adds nothing to it.
    /// `identity` keys both the open heap and the closed set.
    pub fn run<D, P, FScore, FId>(
        &mut self,
        domain: &D,
        start: D::State,
        score: FScore,
        identity: FId,
    ) -> Result<SearchOutcome, SearchError>
    where
        D: SearchDomain,
        P: Ord + Copy,
        FScore: Fn(&D::State) -> P,
        FId: Fn(&D::State) -> StateId,
    {
        self.run_with_hook(domain, start, score, identity, |_| {})
    }

    /// Run a search and invoke a callback after each state is popped.
    pub fn run_with_hook<D, P, FScore, FId, FHook>(
        &mut self,
        domain: &D,
        start: D::State,
        score: FScore,
        identity: FId,
        mut on_expand: FHook,
    ) -> Result<SearchOutcome, SearchError>
    where
        D: SearchDomain,
        P: Ord + Copy,
        FScore: Fn(&D::State) -> P,
        FId: Fn(&D::State) -> StateId,
        FHook: FnMut(&ExpansionEvent<'_, D::State>),
    {
        let started = Instant::now();
        let mut metrics = SearchMetrics::default();
        let mut open = IndexedHeap::new(score, identity);
        let mut closed: ClosedSet<D::State> = ClosedSet::new();

        open.push(start)?;
        metrics.max_open_len = open.len();
        self.phase = SearchPhase::Expanding;
        log::debug!("search started");

        loop {
            if self
                .config
                .max_expansions
                .is_some_and(|limit| metrics.nodes_explored >= limit)
            {
                self.phase = SearchPhase::LimitReached;
                metrics.elapsed_secs = started.elapsed().as_secs_f64();
                log::debug!(
                    "search stopped at expansion limit after {} expansions",
                    metrics.nodes_explored
                );
                return Ok(SearchOutcome::LimitReached(metrics));
            }

            let Some(current) = open.pop() else {
                break;
            };
            metrics.nodes_explored += 1;

            on_expand(&ExpansionEvent {
                state: &current,
                expansion: metrics.nodes_explored,
                open_len: open.len(),
                closed_len: closed.len(),
            });

            if domain.is_goal(&current) {
                self.phase = SearchPhase::GoalFound;
                metrics.elapsed_secs = started.elapsed().as_secs_f64();
                let path_length = domain.path_cost(&current);
                log::debug!(
                    "goal found after {} expansions with path length {}",
                    metrics.nodes_explored,
                    path_length
                );
                return Ok(SearchOutcome::Solved(SolveReport {
                    nodes_explored: metrics.nodes_explored,
                    path_length,
                    elapsed_secs: metrics.elapsed_secs,
                    metrics,
                }));
            }

            for child in domain.successors(&current) {
                metrics.nodes_generated += 1;
                let child_id = open.identity_of(&child);
                let child_cost = domain.path_cost(&child);

                let open_cost = open.get(child_id).map(|state| domain.path_cost(state));
                let closed_cost = closed.get(child_id).map(|state| domain.path_cost(state));

                match (open_cost, closed_cost) {
                    (None, None) => {
                        open.push(child)?;
                        metrics.nodes_inserted += 1;
                    }
                    (Some(known), _) if known > child_cost => {
                        open.remove(child_id)?;
                        open.push(child)?;
                        metrics.open_decreased += 1;
                    }
                    (None, Some(known)) if known > child_cost => {
                        closed.remove(child_id);
                        open.push(child)?;
                        metrics.closed_reopened += 1;
                    }
                    _ => metrics.discarded += 1,
                }
            }
            metrics.max_open_len = metrics.max_open_len.max(open.len());

            let current_id = open.identity_of(&current);
            closed.insert(current_id, current);

            if self.config.log_every > 0 && metrics.nodes_explored % self.config.log_every == 0 {
                log::trace!(
                    "{} expansions, open={} closed={}",
                    metrics.nodes_explored,
                    open.len(),
                    closed.len()
                );
            }
        }

        self.phase = SearchPhase::Exhausted;
        metrics.elapsed_secs = started.elapsed().as_secs_f64();
        log::debug!(
            "open set exhausted after {} expansions without reaching the goal",
            metrics.nodes_explored
        );
        Ok(SearchOutcome::Exhausted(metrics))
    }
}
