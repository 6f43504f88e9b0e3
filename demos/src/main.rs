//! Animate BFS, DFS, Dijkstra and A* on a terminal grid.
//!
//! Run: cargo run --bin pathviz-demo -- --strategy all --seed 7

use std::fs;
use std::io;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathviz_core::GridModel;
use pathviz_demo::{DemoConfig, TraceView, random_grid, summary};
use pathviz_search::{SearchEngine, SearchOutcome};

/// How long a finished frame stays up before the next strategy starts.
const HOLD: Duration = Duration::from_millis(750);

fn load_grid(cfg: &DemoConfig) -> Result<GridModel, Box<dyn std::error::Error>> {
    if let Some(path) = &cfg.map {
        let text = fs::read_to_string(path)?;
        return Ok(GridModel::parse(&text)?);
    }
    let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("random {}x{} grid, seed {seed}", cfg.cols, cfg.rows);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(random_grid(
        cfg.cols,
        cfg.rows,
        cfg.density,
        cfg.weighted,
        &mut rng,
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = DemoConfig::parse();
    let grid = load_grid(&cfg)?;
    let mut stdout = io::stdout();
    let mut engine = SearchEngine::new();
    let mut report = Vec::new();

    for &strategy in &cfg.strategy.0 {
        let mut view = TraceView::new(&grid);
        engine.start(&grid, strategy, grid.start(), grid.end())?;

        if cfg.no_animate {
            engine.run_to_completion(&grid, &mut view);
            println!("{}", view.to_ascii());
        } else {
            view.draw_all(&mut stdout)?;
            while engine.step(&grid, &mut view) == Some(SearchOutcome::Running) {
                view.flush(&mut stdout)?;
                thread::sleep(cfg.delay());
            }
            view.flush(&mut stdout)?;
            thread::sleep(HOLD);
        }

        let line = summary(strategy, &engine);
        if cfg.no_animate {
            println!("{line}\n");
        }
        report.push(line);
    }

    if !cfg.no_animate {
        println!();
        for line in &report {
            println!("{line}");
        }
    }
    Ok(())
}
