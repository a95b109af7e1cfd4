//! Click-driven editing of a [`GridSpace`] and A* runs over it.

use pathbox_core::{Context, GridSpace, Point};
use pathbox_paths::{SearchOutcome, astar};

/// The A* grid sandbox: primary clicks place the start cell, then the
/// end cell, then barriers; secondary clicks reset a cell (vacating its
/// role if it held one).
pub struct GridEditor {
    grid: GridSpace,
}

impl GridEditor {
    /// Create an editor over a fresh `rows`×`rows` grid.
    pub fn new(rows: i32) -> Self {
        Self {
            grid: GridSpace::new(rows),
        }
    }

    /// The grid being edited. The rendering collaborator draws from this.
    pub fn grid(&self) -> &GridSpace {
        &self.grid
    }

    /// Handle a primary (left) click on `cell`.
    pub fn primary(&mut self, cell: Point) {
        if !self.grid.contains(cell) {
            return;
        }
        if self.grid.start().is_none() {
            self.grid.set_start(cell);
        } else if self.grid.end().is_none() && Some(cell) != self.grid.start() {
            self.grid.set_end(cell);
        } else if Some(cell) != self.grid.start() && Some(cell) != self.grid.end() {
            self.grid.set_barrier(cell);
        }
    }

    /// Handle a secondary (right) click on `cell`: reset it to open.
    pub fn secondary(&mut self, cell: Point) {
        self.grid.clear_cell(cell);
    }

    /// Full restart: every cell back to open, roles dropped.
    pub fn clear(&mut self) {
        self.grid.reset_all();
    }

    /// Whether both endpoints are set, the precondition for a run.
    pub fn ready(&self) -> bool {
        self.grid.start().is_some() && self.grid.end().is_some()
    }

    /// Run A* over the current grid, driving `on_step` once per
    /// expansion. Marks from a previous run are cleared and the
    /// neighbour caches recomputed first. Returns `None` without
    /// searching if either endpoint is missing.
    pub fn run<F>(&mut self, ctx: &Context, on_step: F) -> Option<SearchOutcome>
    where
        F: FnMut(&GridSpace, Point),
    {
        let (start, end) = match (self.grid.start(), self.grid.end()) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                log::warn!("run requested without both endpoints set");
                return None;
            }
        };
        self.grid.clear_search();
        self.grid.update_neighbors();
        Some(astar(&mut self.grid, start, end, ctx, on_step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathbox_core::CellState;

    #[test]
    fn click_progression_start_end_barrier() {
        let mut ed = GridEditor::new(5);
        ed.primary(Point::new(0, 0));
        ed.primary(Point::new(4, 4));
        ed.primary(Point::new(2, 2));
        let g = ed.grid();
        assert_eq!(g.state(Point::new(0, 0)), Some(CellState::Start));
        assert_eq!(g.state(Point::new(4, 4)), Some(CellState::End));
        assert_eq!(g.state(Point::new(2, 2)), Some(CellState::Barrier));
    }

    #[test]
    fn clicking_start_again_does_not_make_it_the_end() {
        let mut ed = GridEditor::new(5);
        ed.primary(Point::new(1, 1));
        ed.primary(Point::new(1, 1));
        assert_eq!(ed.grid().end(), None);
        assert_eq!(ed.grid().state(Point::new(1, 1)), Some(CellState::Start));
    }

    #[test]
    fn secondary_click_vacates_role() {
        let mut ed = GridEditor::new(5);
        ed.primary(Point::new(0, 0));
        ed.primary(Point::new(4, 4));
        ed.secondary(Point::new(0, 0));
        assert_eq!(ed.grid().start(), None);
        // The next primary click takes the vacated role.
        ed.primary(Point::new(2, 2));
        assert_eq!(ed.grid().start(), Some(Point::new(2, 2)));
    }

    #[test]
    fn run_requires_both_endpoints() {
        let mut ed = GridEditor::new(5);
        ed.primary(Point::new(0, 0));
        assert!(!ed.ready());
        assert!(ed.run(&Context::new(), |_, _| {}).is_none());
    }

    #[test]
    fn full_pipeline_finds_path() {
        let mut ed = GridEditor::new(5);
        ed.primary(Point::new(0, 0));
        ed.primary(Point::new(4, 4));
        ed.primary(Point::new(1, 0)); // a barrier to route around
        assert!(ed.ready());
        let outcome = ed.run(&Context::new(), |_, _| {});
        assert_eq!(outcome, Some(SearchOutcome::PathFound));
        assert!(ed.grid().count_state(CellState::Path) > 0);
    }

    #[test]
    fn rerun_after_edit_starts_clean() {
        let mut ed = GridEditor::new(5);
        ed.primary(Point::new(0, 0));
        ed.primary(Point::new(4, 4));
        assert_eq!(ed.run(&Context::new(), |_, _| {}), Some(SearchOutcome::PathFound));

        // Seal the goal off and run again: old marks must not survive.
        ed.primary(Point::new(3, 4));
        ed.primary(Point::new(4, 3));
        ed.primary(Point::new(3, 3));
        assert_eq!(ed.run(&Context::new(), |_, _| {}), Some(SearchOutcome::NoPathFound));
        assert_eq!(ed.grid().count_state(CellState::Path), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut ed = GridEditor::new(5);
        ed.primary(Point::new(0, 0));
        ed.primary(Point::new(4, 4));
        ed.primary(Point::new(2, 2));
        ed.clear();
        assert_eq!(ed.grid().start(), None);
        assert_eq!(ed.grid().end(), None);
        assert_eq!(ed.grid().count_state(CellState::Open), 25);
    }
}
