//! **pathbox-core** — core types for the pathbox search sandbox.
//!
//! This crate provides the searchable spaces the algorithms in
//! `pathbox-paths` operate over, plus shared primitives:
//!
//! - [`Point`] — integer grid coordinates (x = column, y = row);
//! - [`GridSpace`] — an N×N lattice of [`CellState`] cells with barrier
//!   topology and cached passable-neighbour lists;
//! - [`GraphSpace`] — an incrementally built node/edge graph with
//!   toggle-on-duplicate edge insertion;
//! - [`Context`] — a cooperative cancellation token checked between
//!   search steps.

pub mod context;
pub mod geom;
pub mod graph;
pub mod grid;

pub use context::Context;
pub use geom::Point;
pub use graph::{GraphSpace, NodeRole};
pub use grid::{CellState, GridSpace};
