//! The searchable lattice: [`GridSpace`] and [`CellState`].
//!
//! A `GridSpace` is a square N×N grid of cells stored in a flat buffer.
//! Each cell carries a display/search state and a cached list of passable
//! neighbours. The caches are recomputed by [`GridSpace::update_neighbors`]
//! and must be refreshed after any barrier change and before a search run:
//! the algorithms only ever walk the cached lists, so a stale cache is a
//! correctness bug, not a performance one.

use crate::geom::Point;

/// The state of a single grid cell.
///
/// `Start` and `End` are roles held by at most one cell each; the
/// remaining states are set by the user (`Barrier`) or by a search run
/// (`Frontier`, `Visited`, `Path`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Barrier,
    Start,
    End,
    Visited,
    Frontier,
    Path,
}

const EMPTY: &[Point] = &[];

/// A square lattice of cells with barrier topology.
pub struct GridSpace {
    rows: i32,
    cells: Vec<CellState>,
    /// Cached passable neighbours per cell, in the fixed order
    /// down, up, right, left.
    neighbors: Vec<Vec<Point>>,
    start: Option<Point>,
    end: Option<Point>,
}

impl GridSpace {
    /// Create a new grid with `rows` rows and columns, all cells open.
    pub fn new(rows: i32) -> Self {
        let n = rows.max(0) as usize;
        Self {
            rows: rows.max(0),
            cells: vec![CellState::Open; n * n],
            neighbors: vec![Vec::new(); n * n],
            start: None,
            end: None,
        }
    }

    /// Number of rows (and columns) in the grid.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Whether `p` lies within grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.rows && p.y < self.rows
    }

    /// Convert a point to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.rows + p.x) as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.rows, idx as i32 / self.rows)
    }

    /// The state of the cell at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// The current start cell, if one is set.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The current end cell, if one is set.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Make the cell at `p` a barrier. No-op if `p` is out of bounds or
    /// currently holds the start or end role.
    pub fn set_barrier(&mut self, p: Point) {
        let Some(i) = self.idx(p) else { return };
        match self.cells[i] {
            CellState::Start | CellState::End => {
                log::warn!("refusing to overwrite {:?} with a barrier at {p}", self.cells[i]);
            }
            _ => self.cells[i] = CellState::Barrier,
        }
    }

    /// Reset the cell at `p` to open, vacating the start or end role if
    /// the cell held it.
    pub fn clear_cell(&mut self, p: Point) {
        let Some(i) = self.idx(p) else { return };
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        self.cells[i] = CellState::Open;
    }

    /// Make `p` the start cell, clearing any previous holder of the role.
    /// No-op if `p` is out of bounds or is the current end cell: a cell
    /// may not be both start and end.
    pub fn set_start(&mut self, p: Point) {
        let Some(i) = self.idx(p) else { return };
        if self.end == Some(p) {
            return;
        }
        if let Some(prev) = self.start.take() {
            if let Some(j) = self.idx(prev) {
                self.cells[j] = CellState::Open;
            }
        }
        self.cells[i] = CellState::Start;
        self.start = Some(p);
    }

    /// Make `p` the end cell, clearing any previous holder of the role.
    /// No-op if `p` is out of bounds or is the current start cell.
    pub fn set_end(&mut self, p: Point) {
        let Some(i) = self.idx(p) else { return };
        if self.start == Some(p) {
            return;
        }
        if let Some(prev) = self.end.take() {
            if let Some(j) = self.idx(prev) {
                self.cells[j] = CellState::Open;
            }
        }
        self.cells[i] = CellState::End;
        self.end = Some(p);
    }

    /// Apply a search mark (`Frontier`, `Visited` or `Path`) to the cell
    /// at `p`. Cells holding a role or a barrier keep their state, so the
    /// start/end uniqueness invariant survives a search run.
    pub fn mark(&mut self, p: Point, mark: CellState) {
        let Some(i) = self.idx(p) else { return };
        match self.cells[i] {
            CellState::Start | CellState::End | CellState::Barrier => {}
            _ => self.cells[i] = mark,
        }
    }

    /// Recompute every cell's passable-neighbour cache.
    ///
    /// Call after barrier edits and immediately before a search run.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.point(i);
            self.neighbors[i].clear();
            for n in p.neighbors_4() {
                if let Some(j) = self.idx(n) {
                    if self.cells[j] != CellState::Barrier {
                        self.neighbors[i].push(n);
                    }
                }
            }
        }
    }

    /// The cached passable neighbours of `p`, in down, up, right, left
    /// order. Empty for out-of-bounds points and before the first
    /// [`update_neighbors`](Self::update_neighbors) call.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.idx(p) {
            Some(i) => &self.neighbors[i],
            None => EMPTY,
        }
    }

    /// Restore cells marked by a previous search run (`Visited`,
    /// `Frontier`, `Path`) to open, keeping barriers and roles.
    pub fn clear_search(&mut self) {
        for c in self.cells.iter_mut() {
            if matches!(c, CellState::Visited | CellState::Frontier | CellState::Path) {
                *c = CellState::Open;
            }
        }
    }

    /// Reset every cell to open, dropping start, end and barrier state.
    pub fn reset_all(&mut self) {
        for c in self.cells.iter_mut() {
            *c = CellState::Open;
        }
        for n in self.neighbors.iter_mut() {
            n.clear();
        }
        self.start = None;
        self.end = None;
    }

    /// Count the cells currently in the given state.
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| (self.point(i), c))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_state_round_trip() {
        let json = serde_json::to_string(&CellState::Barrier).unwrap();
        let back: CellState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CellState::Barrier);
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
