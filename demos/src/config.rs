//! Command-line configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use pathviz_search::{ParseStrategyError, Strategy};

/// Animate grid searches in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "pathviz-demo", version, about)]
pub struct DemoConfig {
    /// ASCII map to search (`.` open, `#` wall, `S` start, `E` end, `1`-`9` weights).
    /// A random grid is generated when omitted.
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Columns of the random grid.
    #[arg(long, default_value_t = 30)]
    pub cols: i32,

    /// Rows of the random grid.
    #[arg(long, default_value_t = 28)]
    pub rows: i32,

    /// Probability that a random cell is a wall.
    #[arg(long, default_value_t = 0.25)]
    pub density: f64,

    /// Probability that a random open cell gets a weight above 1.
    #[arg(long, default_value_t = 0.1)]
    pub weighted: f64,

    /// Seed for the random grid; a fresh one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// `bfs`, `dfs`, `dijkstra`, `astar`, a comma-separated list, or `all`.
    #[arg(long, default_value = "all")]
    pub strategy: StrategySet,

    /// Pause between two search steps, in milliseconds.
    #[arg(long, default_value_t = 5)]
    pub delay_ms: u64,

    /// Print only the finished frames instead of animating each step.
    #[arg(long)]
    pub no_animate: bool,
}

impl DemoConfig {
    /// Pause between two animated steps.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// The strategies selected on the command line, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySet(pub Vec<Strategy>);

impl FromStr for StrategySet {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self(Strategy::ALL.to_vec()));
        }
        let strategies = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Strategy>, _>>()?;
        Ok(Self(strategies))
    }
}
