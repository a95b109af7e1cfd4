//! A* shortest-path search over a [`GridSpace`].

use std::collections::{BinaryHeap, HashMap, HashSet};

use pathbox_core::{CellState, Context, GridSpace, Point};

use crate::distance::euclidean;
use crate::outcome::SearchOutcome;
use crate::path::reconstruct;

/// Frontier entry ordered by `(f, seq)`.
///
/// `seq` is a strictly increasing insertion counter: the heap has no
/// intrinsic secondary ordering and cells are not compared, so ties on
/// `f` break deterministically in favour of earlier-enqueued cells.
#[derive(Clone, Copy)]
struct OpenEntry {
    f: f64,
    seq: u64,
    cell: Point,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (f, seq)
        // first. Scores are finite, so total_cmp agrees with <.
        other
            .f
            .total_cmp(&self.f)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Run A* from `start` to `end` over the grid's cached neighbour lists.
///
/// The grid must have both endpoints inside bounds and its neighbour
/// caches freshly recomputed (see [`GridSpace::update_neighbors`]);
/// checking that start and end are actually set is the caller's
/// precondition. Edge cost is always 1 (moves are axis-aligned), the
/// heuristic is Euclidean distance, and relaxation requires a strict
/// improvement, so equal-cost alternate paths never replace an existing
/// predecessor. Combined with the insertion-sequence tie-break this
/// makes the visited order and the final path fully deterministic for a
/// fixed input.
///
/// `on_step` is invoked once per expansion, after the neighbours of the
/// popped cell have been processed, with the grid and the cell just
/// expanded; the rendering collaborator redraws from it and must not
/// mutate the grid. Cells are marked [`CellState::Frontier`] when
/// enqueued, [`CellState::Visited`] when expanded (the start cell keeps
/// its role), and the interior of the discovered path is marked
/// [`CellState::Path`].
///
/// Cancellation through `ctx` is checked once per iteration; a
/// cancelled run reports [`SearchOutcome::NoPathFound`].
pub fn astar<F>(
    grid: &mut GridSpace,
    start: Point,
    end: Point,
    ctx: &Context,
    mut on_step: F,
) -> SearchOutcome
where
    F: FnMut(&GridSpace, Point),
{
    if !grid.contains(start) || !grid.contains(end) {
        return SearchOutcome::NoPathFound;
    }
    if start == end {
        return SearchOutcome::PathFound;
    }

    let mut g_score: HashMap<Point, f64> = HashMap::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    // Frontier membership, kept in lockstep with the heap for an O(1)
    // "already pending" check. At most one heap entry per cell.
    let mut open_set: HashSet<Point> = HashSet::new();
    let mut seq: u64 = 0;
    let mut expansions: u64 = 0;

    g_score.insert(start, 0.0);
    open.push(OpenEntry {
        f: euclidean(start, end),
        seq,
        cell: start,
    });
    open_set.insert(start);

    while let Some(entry) = open.pop() {
        if ctx.is_done() {
            log::debug!("astar: cancelled after {expansions} expansions");
            return SearchOutcome::NoPathFound;
        }
        let current = entry.cell;
        open_set.remove(&current);

        if current == end {
            let path = reconstruct(start, end, |p| came_from.get(&p).copied());
            for &p in &path {
                grid.mark(p, CellState::Path);
            }
            log::debug!(
                "astar: path of {} cells found after {expansions} expansions",
                path.len()
            );
            return SearchOutcome::PathFound;
        }

        let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
        let neighbors: Vec<Point> = grid.neighbors(current).to_vec();
        for &n in &neighbors {
            let tentative = current_g + 1.0;
            let best = g_score.get(&n).copied().unwrap_or(f64::INFINITY);
            if tentative < best {
                came_from.insert(n, current);
                g_score.insert(n, tentative);
                if !open_set.contains(&n) {
                    seq += 1;
                    open.push(OpenEntry {
                        f: tentative + euclidean(n, end),
                        seq,
                        cell: n,
                    });
                    open_set.insert(n);
                    grid.mark(n, CellState::Frontier);
                }
            }
        }

        expansions += 1;
        on_step(grid, current);
        if current != start {
            grid.mark(current, CellState::Visited);
        }
    }

    log::debug!("astar: frontier exhausted after {expansions} expansions");
    SearchOutcome::NoPathFound
}
