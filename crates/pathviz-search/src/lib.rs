//! Step-driven grid search for the pathviz visualizer.
//!
//! This crate explores a [`GridModel`](pathviz_core::GridModel) (or any
//! [`WeightedPather`]) with one of four interchangeable strategies:
//!
//! - **Breadth-first**: FIFO frontier, shortest in number of moves
//! - **Depth-first**: LIFO frontier, some path
//! - **Dijkstra**: cheapest accumulated weight first
//! - **A\***: Dijkstra plus the Manhattan distance to the end
//!
//! A [`SearchEngine`] advances one expansion per [`step`](SearchEngine::step)
//! and reports discoveries and the final path through an [`EventSink`], so a
//! front end can animate the search at whatever pace it likes.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds, passability, neighbours |
//! | [`WeightedPather`] : [`Pather`] | step cost |

mod distance;
mod engine;
mod error;
mod frontier;
mod path;
mod sink;
mod strategy;
mod traits;


pub use distance::manhattan;
pub use engine::{SearchEngine, SearchOutcome, SearchState, SearchStats};
pub use error::{InvalidRun, SearchError};
pub use frontier::{Candidate, Frontier};
pub use path::{CameFrom, path_cost, reconstruct};
pub use sink::{EventSink, NullSink, RecordingSink, SearchEvent};
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::{Pather, WeightedPather};
