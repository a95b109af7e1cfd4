//! Click-driven editing of a [`GraphSpace`] and BFS runs over it.

use pathbox_core::{Context, GraphSpace, NodeRole, Point};
use pathbox_paths::{SearchOutcome, bfs, parent_chain};

/// The BFS graph sandbox.
///
/// In placement mode, primary clicks add the start node, then the end
/// node, then plain nodes. In edge mode, two successive picks of
/// existing nodes toggle the edge between them (an existing edge is
/// removed, a missing one added — [`GraphSpace::add_edge`] semantics).
pub struct GraphEditor {
    graph: GraphSpace,
    edge_mode: bool,
    /// First endpoint of an edge being built, if one has been picked.
    pending: Option<Point>,
}

impl GraphEditor {
    /// Create an editor over an empty graph.
    pub fn new() -> Self {
        Self {
            graph: GraphSpace::new(),
            edge_mode: false,
            pending: None,
        }
    }

    /// The graph being edited.
    pub fn graph(&self) -> &GraphSpace {
        &self.graph
    }

    /// Whether the editor is currently in edge mode.
    pub fn edge_mode(&self) -> bool {
        self.edge_mode
    }

    /// The picked-but-unpaired edge endpoint, if any.
    pub fn pending(&self) -> Option<Point> {
        self.pending
    }

    /// Switch between node placement and edge building. Any half-built
    /// edge is discarded.
    pub fn toggle_edge_mode(&mut self) {
        self.edge_mode = !self.edge_mode;
        self.pending = None;
    }

    /// Handle a primary click on `cell`.
    pub fn primary(&mut self, cell: Point) {
        if self.edge_mode {
            self.pick_endpoint(cell);
        } else {
            self.place_node(cell);
        }
    }

    fn place_node(&mut self, cell: Point) {
        if self.graph.start().is_none() {
            self.graph.add_node(cell, NodeRole::Start);
        } else if self.graph.end().is_none() && !self.graph.contains(cell) {
            self.graph.add_node(cell, NodeRole::End);
        } else {
            // add_node rejects duplicates, so re-clicking a node is a no-op.
            self.graph.add_node(cell, NodeRole::Plain);
        }
    }

    fn pick_endpoint(&mut self, cell: Point) {
        if !self.graph.contains(cell) || self.pending == Some(cell) {
            return;
        }
        match self.pending.take() {
            None => self.pending = Some(cell),
            Some(first) => self.graph.add_edge(first, cell),
        }
    }

    /// Full restart: drop all nodes, edges and editing state.
    pub fn clear(&mut self) {
        self.graph.reset_all();
        self.edge_mode = false;
        self.pending = None;
    }

    /// Whether both start and end nodes exist, the precondition for a run.
    pub fn ready(&self) -> bool {
        self.graph.start().is_some() && self.graph.end().is_some()
    }

    /// Run BFS from the start node to the end node. Returns `None`
    /// without searching if either role is unassigned.
    pub fn run(&mut self, ctx: &Context) -> Option<SearchOutcome> {
        let (start, end) = match (self.graph.start(), self.graph.end()) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                log::warn!("run requested without start and end nodes");
                return None;
            }
        };
        Some(bfs(&mut self.graph, start, end, ctx))
    }

    /// The path discovered by the last successful run, from start to
    /// end. The rendering collaborator draws this chain.
    pub fn path(&self) -> Option<Vec<Point>> {
        let start = self.graph.start()?;
        let end = self.graph.end()?;
        parent_chain(&self.graph, start, end)
    }
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new()
    }
}
