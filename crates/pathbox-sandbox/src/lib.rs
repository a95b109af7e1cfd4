//! **pathbox-sandbox** — the interactive editing layer of the pathbox
//! search sandbox.
//!
//! Two editors translate already-decoded user input into space
//! mutations and drive the algorithms from `pathbox-paths`:
//!
//! - [`GridEditor`] — paint barriers and endpoints on a grid, then run
//!   A* with a per-expansion step callback for the renderer;
//! - [`GraphEditor`] — place nodes and toggle edges, then run BFS.
//!
//! [`cell_at`] maps pixel positions to lattice cells; it is the only
//! resolution-dependent piece, everything else works on row/column
//! indices. Rendering and event polling live outside this workspace.

mod graph_editor;
mod grid_editor;
mod mapping;

pub use graph_editor::GraphEditor;
pub use grid_editor::GridEditor;
pub use mapping::{GRID_ROWS, LATTICE_ROWS, WINDOW_WIDTH, cell_at};
