//! The step-driven search loop.
//!
//! A [`SearchEngine`] moves through `Idle → Running → {Found, Unreachable}`.
//! Each call to [`step`](SearchEngine::step) performs at most one genuine
//! expansion, so the caller controls pacing and can stop at any time by not
//! stepping again or by calling [`reset`](SearchEngine::reset).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::{Duration, Instant};

use pathviz_core::Cell;

use crate::error::{InvalidRun, SearchError};
use crate::frontier::{Candidate, Frontier};
use crate::path::{CameFrom, path_cost, reconstruct};
use crate::sink::EventSink;
use crate::strategy::Strategy;
use crate::traits::WeightedPather;

/// Classification of a run once it has been started.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// Still exploring.
    Running,
    /// The end cell was reached.
    Found,
    /// The frontier ran dry before reaching the end cell.
    Unreachable,
}

impl SearchOutcome {
    /// Whether the run is over.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Found => "found",
            Self::Unreachable => "unreachable",
        })
    }
}

/// Counters collected over one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// `step` calls made while running.
    pub steps: usize,
    /// Cells whose neighbours were examined.
    pub expanded: usize,
    /// Cells discovered for the first time, start excluded.
    pub discovered: usize,
    /// Outdated priority entries thrown away without expansion.
    pub stale: usize,
    /// Wall time from `start` to the terminal transition. Zero until then.
    pub elapsed: Duration,
}

/// Per-run mutable state. Rebuilt by every `start`, dropped by `reset`.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Cells already expanded or enqueued.
    pub visited: HashSet<Cell>,
    pub came_from: CameFrom,
    /// Best known accumulated cost; filled by weighted strategies only.
    pub cost_so_far: HashMap<Cell, u32>,
    pub frontier: Frontier,
}

impl SearchState {
    fn new(strategy: Strategy) -> Self {
        Self {
            visited: HashSet::new(),
            came_from: CameFrom::new(),
            cost_so_far: HashMap::new(),
            frontier: Frontier::for_strategy(strategy),
        }
    }

    /// A priority entry is stale when a cheaper route to its cell was found
    /// after it was pushed.
    fn is_stale(&self, c: Candidate) -> bool {
        self.cost_so_far
            .get(&c.cell)
            .is_some_and(|&best| c.cost > best)
    }
}

#[derive(Debug, Clone, Copy)]
struct Run {
    strategy: Strategy,
    start: Cell,
    end: Cell,
    started_at: Instant,
}

/// Drives one search at a time over any [`WeightedPather`] grid.
///
/// The grid is borrowed per call rather than stored, so it can be edited
/// between runs; it must not change while a run is in progress.
#[derive(Debug, Default)]
pub struct SearchEngine {
    run: Option<Run>,
    outcome: Option<SearchOutcome>,
    state: Option<SearchState>,
    path: Vec<Cell>,
    path_cost: u32,
    stats: SearchStats,
    // scratch buffer for neighbour queries
    nbuf: Vec<Cell>,
}

impl SearchEngine {
    /// An idle engine.
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
            ..Self::default()
        }
    }

    /// Begin a run from `start` to `end` with the given strategy.
    ///
    /// Any previous run is discarded first. Fails with
    /// [`SearchError::InvalidRun`] when an endpoint is unset, outside the
    /// grid or impassable; the engine is then left idle.
    pub fn start<P: WeightedPather>(
        &mut self,
        grid: &P,
        strategy: Strategy,
        start: Option<Cell>,
        end: Option<Cell>,
    ) -> Result<(), SearchError> {
        self.reset();

        let start = start.ok_or(InvalidRun::MissingStart)?;
        let end = end.ok_or(InvalidRun::MissingEnd)?;
        if !grid.contains(start) {
            return Err(InvalidRun::StartOutOfBounds(start).into());
        }
        if !grid.contains(end) {
            return Err(InvalidRun::EndOutOfBounds(end).into());
        }
        if !grid.passable(start) {
            return Err(InvalidRun::StartBlocked(start).into());
        }
        if !grid.passable(end) {
            return Err(InvalidRun::EndBlocked(end).into());
        }

        let mut state = SearchState::new(strategy);
        state.visited.insert(start);
        state.came_from.insert_root(start);
        if strategy.is_weighted() {
            state.cost_so_far.insert(start, 0);
        }
        state
            .frontier
            .push(start, 0, strategy.priority(0, start, end));

        log::debug!("{strategy} search started: {start} -> {end}");
        self.state = Some(state);
        self.run = Some(Run {
            strategy,
            start,
            end,
            started_at: Instant::now(),
        });
        self.outcome = Some(SearchOutcome::Running);
        Ok(())
    }

    /// Advance the run by one expansion.
    ///
    /// Stale priority entries are skipped within the same call. Returns the
    /// outcome after the step; when the engine is idle or the run is already
    /// over nothing changes and the current outcome is returned.
    pub fn step<P: WeightedPather, S: EventSink>(
        &mut self,
        grid: &P,
        sink: &mut S,
    ) -> Option<SearchOutcome> {
        if self.outcome != Some(SearchOutcome::Running) {
            return self.outcome;
        }
        let (Some(run), Some(state)) = (self.run, self.state.as_mut()) else {
            return self.outcome;
        };
        self.stats.steps += 1;

        let current = loop {
            let Some(candidate) = state.frontier.pop() else {
                return Some(self.finish(grid, SearchOutcome::Unreachable, sink));
            };
            if candidate.cell == run.end {
                break candidate.cell;
            }
            if state.is_stale(candidate) {
                self.stats.stale += 1;
                log::trace!("discarding stale entry {} (cost {})", candidate.cell, candidate.cost);
                continue;
            }
            break candidate.cell;
        };

        if current == run.end {
            return Some(self.finish(grid, SearchOutcome::Found, sink));
        }

        self.expand(grid, run, current, sink);
        self.outcome
    }

    /// Step until the run reaches a terminal outcome.
    ///
    /// Returns `None` if the engine is idle.
    pub fn run_to_completion<P: WeightedPather, S: EventSink>(
        &mut self,
        grid: &P,
        sink: &mut S,
    ) -> Option<SearchOutcome> {
        while self.outcome == Some(SearchOutcome::Running) {
            self.step(grid, sink);
        }
        self.outcome
    }

    /// Discard the current run, if any, and return to idle.
    pub fn reset(&mut self) {
        if let Some(run) = self.run.take() {
            log::debug!("{} search reset", run.strategy);
        }
        self.outcome = None;
        self.state = None;
        self.path.clear();
        self.path_cost = 0;
        self.stats = SearchStats::default();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// `None` while idle, otherwise the state of the current run.
    #[inline]
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// Strategy of the current run.
    pub fn strategy(&self) -> Option<Strategy> {
        self.run.map(|r| r.strategy)
    }

    /// `(start, end)` of the current run.
    pub fn endpoints(&self) -> Option<(Cell, Cell)> {
        self.run.map(|r| (r.start, r.end))
    }

    /// The path found by the finished run; empty otherwise.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Cost of [`path`](Self::path): the weights of every cell entered after
    /// the start.
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Counters of the current run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The run's search state; `None` while idle.
    pub fn state(&self) -> Option<&SearchState> {
        self.state.as_ref()
    }

    /// The predecessor map of the current run.
    pub fn came_from(&self) -> Option<&CameFrom> {
        self.state.as_ref().map(|s| &s.came_from)
    }

    /// Best known accumulated costs of the current run.
    pub fn cost_so_far(&self) -> Option<&HashMap<Cell, u32>> {
        self.state.as_ref().map(|s| &s.cost_so_far)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn expand<P: WeightedPather, S: EventSink>(
        &mut self,
        grid: &P,
        run: Run,
        current: Cell,
        sink: &mut S,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        self.stats.expanded += 1;
        log::trace!("expanding {current}");

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        grid.neighbors(current, &mut nbuf);

        let current_cost = state.cost_so_far.get(&current).copied().unwrap_or(0);

        for &n in nbuf.iter() {
            if !grid.passable(n) {
                continue;
            }

            if run.strategy.is_weighted() {
                let tentative = current_cost + grid.cost(current, n);
                if state
                    .cost_so_far
                    .get(&n)
                    .is_some_and(|&best| tentative >= best)
                {
                    continue;
                }
                state.cost_so_far.insert(n, tentative);
                state.came_from.link(n, current);
                state
                    .frontier
                    .push(n, tentative, run.strategy.priority(tentative, n, run.end));
            } else {
                if state.came_from.contains(n) {
                    continue;
                }
                state.came_from.link(n, current);
                state.frontier.push(n, 0, 0);
            }

            if state.visited.insert(n) {
                self.stats.discovered += 1;
                if n != run.start && n != run.end {
                    sink.on_visited(n);
                }
            }
        }

        self.nbuf = nbuf;
    }

    fn finish<P: WeightedPather, S: EventSink>(
        &mut self,
        grid: &P,
        outcome: SearchOutcome,
        sink: &mut S,
    ) -> SearchOutcome {
        let (Some(run), Some(state)) = (self.run, self.state.as_ref()) else {
            return outcome;
        };

        self.path = match outcome {
            SearchOutcome::Found => reconstruct(&state.came_from, run.start, run.end),
            _ => Vec::new(),
        };
        self.path_cost = path_cost(grid, &self.path);
        self.stats.elapsed = run.started_at.elapsed();
        self.outcome = Some(outcome);

        log::debug!(
            "{} search {outcome}: {} cells on path (cost {}), {} expanded, {} stale, {:?}",
            run.strategy,
            self.path.len(),
            self.path_cost,
            self.stats.expanded,
            self.stats.stale,
            self.stats.elapsed
        );
        sink.on_completed(outcome, &self.path);
        outcome
    }
}
