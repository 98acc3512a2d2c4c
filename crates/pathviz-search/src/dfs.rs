//! Depth-first traversal.

use pathviz_core::{Grid, Point};

use crate::neighbors::Neighbors;

/// Explore depth-first from the start cell, appending each newly visited
/// cell to `visited`, and stop at the first route that reaches the finish
/// cell. Returns whether the finish was reached.
///
/// Uses an explicit stack instead of recursion, so the depth bound is the
/// cell count rather than the call stack. At each step the first
/// currently-unvisited open neighbor of the stack top is taken, in
/// north → east → south → west priority; its back-reference is fixed to the
/// cell it was discovered from before descending. Weights are ignored, and
/// the found path is first-found, not shortest.
///
/// Expects grid scratch to be freshly reset.
pub(crate) fn run(grid: &mut Grid, neighbors: &mut Neighbors, visited: &mut Vec<Point>) -> bool {
    let start = grid.start();
    let finish = grid.finish();

    if let Some(c) = grid.at_mut(start) {
        c.visited = true;
    }
    visited.push(start);
    if start == finish {
        return true;
    }

    let mut stack = vec![start];
    while let Some(&cur) = stack.last() {
        let next = neighbors
            .open(grid, cur)
            .iter()
            .copied()
            .find(|&n| grid.at(n).is_some_and(|c| !c.visited));
        match next {
            Some(n) => {
                if let Some(c) = grid.at_mut(n) {
                    c.previous = Some(cur);
                    c.visited = true;
                }
                visited.push(n);
                if n == finish {
                    return true;
                }
                stack.push(n);
            }
            // Dead end: back up to the previous cell.
            None => {
                stack.pop();
            }
        }
    }
    false
}
