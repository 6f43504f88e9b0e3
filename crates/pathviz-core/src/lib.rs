//! **pathviz-core**: the grid side of the pathviz search visualizer.
//!
//! This crate provides the plain data the search engine runs over: integer
//! [`Cell`] coordinates, the [`Bounds`] of a grid, and the editable
//! [`GridModel`] holding obstacles, traversal weights and the start/end cells.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::MapError;
pub use geom::{Bounds, BoundsIter, Cell};
pub use grid::{GridModel, MAX_WEIGHT, MIN_WEIGHT};
