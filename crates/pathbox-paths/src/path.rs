//! Path reconstruction from a predecessor relation.

/// Walk a predecessor relation backward from `goal` until `start` is
/// reached, returning the path ordered from start to goal.
///
/// Shared by both algorithms: A* supplies a lookup into its `came_from`
/// map, BFS a lookup of the parent links stored on graph nodes. The
/// degenerate case `start == goal` yields a single-element path with no
/// walk. Callers invoke this only after a successful run; if the chain
/// is broken anyway, the walk stops early and the partial path is
/// returned.
pub fn reconstruct<T, F>(start: T, goal: T, mut parent: F) -> Vec<T>
where
    T: PartialEq + Copy,
    F: FnMut(T) -> Option<T>,
{
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parent(current) {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
