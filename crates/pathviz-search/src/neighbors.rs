//! Neighbor resolution shared by every search strategy.

use pathviz_core::{CARDINALS, Grid, Point};

/// Cached neighbor computation helper.
///
/// Produces the traversable orthogonal neighbors of a cell in the fixed
/// north, east, south, west priority order, skipping out-of-bounds and wall
/// cells. All strategies share this resolver so neighbor-ordering cannot
/// diverge between algorithms.
///
/// Filtering already-visited neighbors is the caller's concern; search
/// scratch belongs to the strategy, not the resolver.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the open (in-bounds, non-wall) cardinal neighbors of `p`,
    /// in north → east → south → west order.
    pub fn open(&mut self, grid: &Grid, p: Point) -> &[Point] {
        self.buf.clear();
        for d in CARDINALS {
            let n = p + d.delta();
            if grid.at(n).is_some_and(|c| !c.is_wall) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
