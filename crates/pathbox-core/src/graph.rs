//! The user-built node/edge graph: [`GraphSpace`] and [`NodeRole`].
//!
//! Nodes are identified by their originating grid coordinate. Edges are
//! unordered pairs of existing nodes with toggle semantics: inserting an
//! already-present edge removes it instead of erroring. The edge list is
//! the source of truth for insertion order; an adjacency index keyed by
//! node mirrors it so BFS expansion avoids a full edge scan per node.

use std::collections::HashMap;

use crate::geom::Point;

/// The role a graph node plays in a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeRole {
    #[default]
    Plain,
    Start,
    End,
}

/// Per-node record. Search state (`visited`, `parent`) lives directly on
/// the node: BFS edges are unit-cost, so no score maps are needed.
struct Node {
    id: Point,
    role: NodeRole,
    visited: bool,
    parent: Option<Point>,
}

const EMPTY: &[Point] = &[];

/// An incrementally built graph of nodes and undirected edges.
#[derive(Default)]
pub struct GraphSpace {
    nodes: Vec<Node>,
    index: HashMap<Point, usize>,
    edges: Vec<(Point, Point)>,
    adj: HashMap<Point, Vec<Point>>,
}

impl GraphSpace {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns `false` without modifying the graph if a
    /// node with this identity already exists.
    pub fn add_node(&mut self, id: Point, role: NodeRole) -> bool {
        if let Some(&i) = self.index.get(&id) {
            if self.nodes[i].role != role {
                log::warn!("node {id} already exists with role {:?}", self.nodes[i].role);
            }
            return false;
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(Node {
            id,
            role,
            visited: false,
            parent: None,
        });
        true
    }

    /// Whether a node with this identity exists.
    #[inline]
    pub fn contains(&self, id: Point) -> bool {
        self.index.contains_key(&id)
    }

    /// The role of the given node, or `None` if unknown.
    pub fn role(&self, id: Point) -> Option<NodeRole> {
        self.index.get(&id).map(|&i| self.nodes[i].role)
    }

    /// The node holding the `Start` role, if any.
    pub fn start(&self) -> Option<Point> {
        self.nodes
            .iter()
            .find(|n| n.role == NodeRole::Start)
            .map(|n| n.id)
    }

    /// The node holding the `End` role, if any.
    pub fn end(&self) -> Option<Point> {
        self.nodes
            .iter()
            .find(|n| n.role == NodeRole::End)
            .map(|n| n.id)
    }

    /// Toggle the undirected edge `(a, b)`.
    ///
    /// Inserts the edge if absent; removes it if present (in either
    /// orientation). No-op if `a == b` or either endpoint is not a known
    /// node.
    pub fn add_edge(&mut self, a: Point, b: Point) {
        if a == b {
            return;
        }
        if !self.contains(a) || !self.contains(b) {
            log::warn!("ignoring edge ({a}, {b}): unknown endpoint");
            return;
        }
        let existing = self
            .edges
            .iter()
            .position(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a));
        match existing {
            Some(pos) => {
                self.edges.remove(pos);
                if let Some(v) = self.adj.get_mut(&a) {
                    v.retain(|&n| n != b);
                }
                if let Some(v) = self.adj.get_mut(&b) {
                    v.retain(|&n| n != a);
                }
            }
            None => {
                self.edges.push((a, b));
                self.adj.entry(a).or_default().push(b);
                self.adj.entry(b).or_default().push(a);
            }
        }
    }

    /// Whether the undirected edge `(a, b)` is currently present.
    pub fn has_edge(&self, a: Point, b: Point) -> bool {
        self.edges
            .iter()
            .any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
    }

    /// Nodes connected to `id` by a current edge, in edge insertion order.
    pub fn neighbors(&self, id: Point) -> &[Point] {
        match self.adj.get(&id) {
            Some(v) => v,
            None => EMPTY,
        }
    }

    /// Number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over `(identity, role)` pairs in node insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (Point, NodeRole)> + '_ {
        self.nodes.iter().map(|n| (n.id, n.role))
    }

    /// The edge list in insertion order.
    pub fn edges(&self) -> &[(Point, Point)] {
        &self.edges
    }

    /// Empty the node and edge sets.
    pub fn reset_all(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
        self.adj.clear();
    }

    // -----------------------------------------------------------------------
    // Search state, driven by the BFS run
    // -----------------------------------------------------------------------

    /// Clear every node's `visited` flag and parent link.
    pub fn reset_search(&mut self) {
        for n in self.nodes.iter_mut() {
            n.visited = false;
            n.parent = None;
        }
    }

    /// Whether the node has been visited by the current run. Unknown
    /// nodes report `false`.
    pub fn is_visited(&self, id: Point) -> bool {
        self.index.get(&id).is_some_and(|&i| self.nodes[i].visited)
    }

    /// Mark the node visited. No-op for unknown nodes.
    pub fn mark_visited(&mut self, id: Point) {
        if let Some(&i) = self.index.get(&id) {
            self.nodes[i].visited = true;
        }
    }

    /// Record the predecessor discovered for `id`. No-op for unknown nodes.
    pub fn set_parent(&mut self, id: Point, parent: Point) {
        if let Some(&i) = self.index.get(&id) {
            self.nodes[i].parent = Some(parent);
        }
    }

    /// The predecessor recorded for `id` by the current run, if any.
    pub fn parent_of(&self, id: Point) -> Option<Point> {
        self.index.get(&id).and_then(|&i| self.nodes[i].parent)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_role_round_trip() {
        let json = serde_json::to_string(&NodeRole::End).unwrap();
        let back: NodeRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeRole::End);
    }
}
