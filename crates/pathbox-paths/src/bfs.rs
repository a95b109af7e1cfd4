//! Breadth-first search over a [`GraphSpace`].

use std::collections::VecDeque;

use pathbox_core::{Context, GraphSpace, Point};

use crate::outcome::SearchOutcome;
use crate::path::reconstruct;

/// Run BFS from `start` to `end` over the graph's edges.
///
/// Any search state left by a previous run is cleared first. Expansion
/// is level-order with a FIFO frontier and unit edge cost, so the
/// parent chain recorded on the nodes is a shortest path by edge count.
/// Success is detected when `end` is popped from the frontier, which
/// makes `start == end` succeed immediately with no expansion. Neighbour
/// order is edge insertion order, so the traversal is deterministic for
/// a fixed build sequence.
///
/// Cancellation through `ctx` is checked once per iteration; a
/// cancelled run reports [`SearchOutcome::NoPathFound`].
pub fn bfs(graph: &mut GraphSpace, start: Point, end: Point, ctx: &Context) -> SearchOutcome {
    if !graph.contains(start) || !graph.contains(end) {
        return SearchOutcome::NoPathFound;
    }
    graph.reset_search();
    graph.mark_visited(start);

    let mut frontier: VecDeque<Point> = VecDeque::new();
    frontier.push_back(start);
    let mut expansions: u64 = 0;

    while let Some(node) = frontier.pop_front() {
        if ctx.is_done() {
            log::debug!("bfs: cancelled after {expansions} expansions");
            return SearchOutcome::NoPathFound;
        }
        if node == end {
            log::debug!("bfs: goal reached after {expansions} expansions");
            return SearchOutcome::PathFound;
        }
        let neighbors: Vec<Point> = graph.neighbors(node).to_vec();
        for n in neighbors {
            if !graph.is_visited(n) {
                graph.set_parent(n, node);
                graph.mark_visited(n);
                frontier.push_back(n);
            }
        }
        expansions += 1;
    }

    log::debug!("bfs: frontier exhausted after {expansions} expansions");
    SearchOutcome::NoPathFound
}

/// Extract the path discovered by the last successful [`bfs`] run,
/// ordered from `start` to `end`. Returns `None` if `end` was never
/// reached.
pub fn parent_chain(graph: &GraphSpace, start: Point, end: Point) -> Option<Vec<Point>> {
    if !graph.is_visited(end) {
        return None;
    }
    Some(reconstruct(start, end, |n| graph.parent_of(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathbox_core::NodeRole;

    fn chain() -> (GraphSpace, Point, Point, Point) {
        let mut g = GraphSpace::new();
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(2, 0);
        g.add_node(a, NodeRole::Start);
        g.add_node(b, NodeRole::Plain);
        g.add_node(c, NodeRole::End);
        g.add_edge(a, b);
        g.add_edge(b, c);
        (g, a, b, c)
    }

    #[test]
    fn chain_parent_links() {
        let (mut g, a, b, c) = chain();
        assert_eq!(bfs(&mut g, a, c, &Context::new()), SearchOutcome::PathFound);
        assert_eq!(g.parent_of(c), Some(b));
        assert_eq!(g.parent_of(b), Some(a));
        assert_eq!(g.parent_of(a), None);
        assert_eq!(parent_chain(&g, a, c), Some(vec![a, b, c]));
    }

    #[test]
    fn isolated_node_stays_unvisited() {
        let (mut g, a, _, c) = chain();
        let d = Point::new(5, 5);
        g.add_node(d, NodeRole::Plain);
        assert_eq!(bfs(&mut g, a, c, &Context::new()), SearchOutcome::PathFound);
        assert!(!g.is_visited(d));
    }

    #[test]
    fn unreachable_end_reports_no_path() {
        let (mut g, a, b, c) = chain();
        // Toggle the second edge away, disconnecting the end.
        g.add_edge(b, c);
        assert_eq!(bfs(&mut g, a, c, &Context::new()), SearchOutcome::NoPathFound);
        assert_eq!(parent_chain(&g, a, c), None);
    }

    #[test]
    fn start_equals_end_succeeds_without_expansion() {
        let mut g = GraphSpace::new();
        let s = Point::new(3, 3);
        let other = Point::new(4, 3);
        g.add_node(s, NodeRole::Start);
        g.add_node(other, NodeRole::Plain);
        g.add_edge(s, other);
        assert_eq!(bfs(&mut g, s, s, &Context::new()), SearchOutcome::PathFound);
        // The goal is popped before any neighbour expansion happens.
        assert!(!g.is_visited(other));
        assert_eq!(parent_chain(&g, s, s), Some(vec![s]));
    }

    #[test]
    fn shortest_path_by_edge_count_wins() {
        let mut g = GraphSpace::new();
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(2, 0);
        let d = Point::new(3, 0);
        g.add_node(a, NodeRole::Start);
        g.add_node(b, NodeRole::Plain);
        g.add_node(c, NodeRole::Plain);
        g.add_node(d, NodeRole::End);
        // Long route a-b-c-d and shortcut a-d.
        g.add_edge(a, b);
        g.add_edge(b, c);
        g.add_edge(c, d);
        g.add_edge(a, d);
        assert_eq!(bfs(&mut g, a, d, &Context::new()), SearchOutcome::PathFound);
        assert_eq!(parent_chain(&g, a, d), Some(vec![a, d]));
    }

    #[test]
    fn rerun_clears_previous_state() {
        let (mut g, a, b, c) = chain();
        assert_eq!(bfs(&mut g, a, c, &Context::new()), SearchOutcome::PathFound);
        // Disconnect and run again: stale visited flags must not leak.
        g.add_edge(b, c);
        assert_eq!(bfs(&mut g, a, c, &Context::new()), SearchOutcome::NoPathFound);
        assert!(!g.is_visited(c));
    }

    #[test]
    fn cancelled_run_reports_no_path() {
        let (mut g, a, _, c) = chain();
        let ctx = Context::new();
        ctx.cancel();
        assert_eq!(bfs(&mut g, a, c, &ctx), SearchOutcome::NoPathFound);
    }

    #[test]
    fn unknown_endpoints_report_no_path() {
        let (mut g, a, _, _) = chain();
        let ghost = Point::new(9, 9);
        assert_eq!(bfs(&mut g, a, ghost, &Context::new()), SearchOutcome::NoPathFound);
    }
}
