//! Uniform-cost (Dijkstra-style) traversal.

use std::collections::BinaryHeap;

use pathviz_core::{Grid, Point};

use crate::neighbors::Neighbors;

/// Frontier entry ordered by selection key `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct FrontierRef {
    pos: Point,
    f: i32,
}

impl Ord for FrontierRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; ties
        // break row-major for a deterministic expansion order.
        other.f.cmp(&self.f).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Expand cells in order of `distance + weight` until the finish cell is
/// selected or the frontier is exhausted (trapped), appending each selected
/// cell to `visited`.
///
/// Relaxation of an unvisited open neighbor records
/// `distance + 1 + neighbor.weight` and the back-reference, only on strict
/// improvement. Stale heap entries for already-selected cells are skipped
/// on pop. Only discovered cells ever enter the heap, so an exhausted heap
/// is exactly the "remaining candidates are at +∞" terminal condition.
///
/// Expects grid scratch to be freshly reset.
pub(crate) fn run(grid: &mut Grid, neighbors: &mut Neighbors, visited: &mut Vec<Point>) {
    let start = grid.start();
    let finish = grid.finish();

    let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();
    let start_weight = grid.at(start).map_or(0, |c| c.weight);
    open.push(FrontierRef {
        pos: start,
        f: start_weight,
    });

    while let Some(FrontierRef { pos, .. }) = open.pop() {
        let current_distance = {
            let Some(cell) = grid.at_mut(pos) else {
                continue;
            };
            if cell.visited {
                // Stale entry from an earlier, worse relaxation.
                continue;
            }
            cell.visited = true;
            cell.distance
        };
        visited.push(pos);
        if pos == finish {
            return;
        }

        for &np in neighbors.open(grid, pos) {
            let Some(ncell) = grid.at_mut(np) else {
                continue;
            };
            if ncell.visited {
                continue;
            }
            let tentative = current_distance + 1 + ncell.weight;
            if tentative < ncell.distance {
                ncell.distance = tentative;
                ncell.previous = Some(pos);
                open.push(FrontierRef {
                    pos: np,
                    f: tentative + ncell.weight,
                });
            }
        }
    }
}
