//! **pathbox-paths** — search algorithms for the pathbox sandbox.
//!
//! Two traversals over the spaces defined in `pathbox-core`:
//!
//! - **A\*** shortest-path search over a grid ([`astar`]), with a
//!   Euclidean heuristic, unit edge cost, and a deterministic
//!   `(f_score, insertion_seq)` frontier order;
//! - **BFS** level-order search over a node/edge graph ([`bfs`]), with
//!   parent links stored on the nodes and [`parent_chain`] to extract
//!   the discovered path.
//!
//! Both run to completion on the calling thread, report a two-valued
//! [`SearchOutcome`], and honour cooperative cancellation between
//! iterations. Path reconstruction is shared ([`reconstruct`]): a
//! backward walk over a predecessor relation, parameterised over the
//! node type.

mod astar;
mod bfs;
mod distance;
mod outcome;
mod path;

pub use astar::astar;
pub use bfs::{bfs, parent_chain};
pub use distance::{euclidean, manhattan};
pub use outcome::SearchOutcome;
pub use path::reconstruct;
