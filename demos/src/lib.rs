//! Terminal front end for the pathviz search engine.

pub mod config;
pub mod mapgen;
pub mod render;

use pathviz_search::{SearchEngine, Strategy};

pub use config::{DemoConfig, StrategySet};
pub use mapgen::random_grid;
pub use render::{Tile, TraceView};

/// One-line report of a finished run, in the spirit of "A* Time: 0.0123
/// seconds" with the search counters added.
pub fn summary(strategy: Strategy, engine: &SearchEngine) -> String {
    let stats = engine.stats();
    let outcome = engine
        .outcome()
        .map_or_else(|| "idle".to_string(), |o| o.to_string());
    format!(
        "{:<8} {:<11} path {:>3} cells, cost {:>4}, {:>4} expanded, {:>4} discovered, time {:.4} s",
        strategy.name(),
        outcome,
        engine.path().len(),
        engine.path_cost(),
        stats.expanded,
        stats.discovered,
        stats.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::GridModel;
    use pathviz_search::NullSink;

    #[test]
    fn summary_reports_path_and_counters() {
        let g = GridModel::parse("S..\n..E\n").unwrap();
        let mut engine = SearchEngine::new();
        engine
            .start(&g, Strategy::AStar, g.start(), g.end())
            .unwrap();
        engine.run_to_completion(&g, &mut NullSink);
        let line = summary(Strategy::AStar, &engine);
        assert!(line.starts_with("A*       found"), "{line}");
        assert!(line.contains("path   4 cells, cost    3"), "{line}");

        engine.reset();
        assert!(summary(Strategy::AStar, &engine).contains("idle"));
    }
}
