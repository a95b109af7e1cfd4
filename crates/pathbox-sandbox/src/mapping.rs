//! Pixel-to-cell coordinate mapping.
//!
//! The only resolution-dependent code in the sandbox: everything past
//! this point operates purely on row/column indices.

use pathbox_core::Point;

/// Default window width in pixels.
pub const WINDOW_WIDTH: i32 = 500;

/// Default row/column count for the A* grid sandbox.
pub const GRID_ROWS: i32 = 50;

/// Default row/column count for the graph editor's underlying lattice.
pub const LATTICE_ROWS: i32 = 20;

/// Map a pixel position to the cell under it, for a square `rows`×`rows`
/// lattice rendered at `width` pixels. Returns `None` for positions
/// outside the lattice or degenerate dimensions.
pub fn cell_at(pos: Point, rows: i32, width: i32) -> Option<Point> {
    if rows <= 0 || width <= 0 {
        return None;
    }
    let gap = width / rows;
    if gap <= 0 || pos.x < 0 || pos.y < 0 {
        return None;
    }
    let cell = Point::new(pos.x / gap, pos.y / gap);
    if cell.x >= rows || cell.y >= rows {
        return None;
    }
    Some(cell)
}
