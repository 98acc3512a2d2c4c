//! The strategy selector and the cache-owning search coordinator.

use pathviz_core::{Grid, Point};

use crate::neighbors::Neighbors;
use crate::{dfs, uniform_cost};

/// Which traversal algorithm a run uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Dijkstra-style expansion in order of `distance + weight`;
    /// finds a cheapest path.
    UniformCost,
    /// First-found depth-first exploration; ignores weights and makes no
    /// shortest-path promise.
    DepthFirst,
}

/// Coordinator for search runs over a [`Grid`].
///
/// Owns the reusable scratch (neighbor buffer, visited-order vector) so
/// repeated runs incur no allocations after warm-up. One run completes
/// fully before returning; taking the grid by `&mut` rules out concurrent
/// runs on the same grid.
pub struct Searcher {
    neighbors: Neighbors,
    visited: Vec<Point>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a new `Searcher`.
    pub fn new() -> Self {
        Self {
            neighbors: Neighbors::new(),
            visited: Vec::new(),
        }
    }

    /// Run one search over `grid` from its start toward its finish cell,
    /// returning every expanded cell in visitation order.
    ///
    /// Resets the grid's search scratch first, so successive runs on an
    /// unmodified grid are independent and identical. When the finish is
    /// unreachable the partial visited order is returned; that is a normal
    /// outcome, not an error — check [`finish_reached`] before
    /// reconstructing a path.
    pub fn run(&mut self, grid: &mut Grid, strategy: Strategy) -> &[Point] {
        grid.reset_search_state();
        self.visited.clear();
        match strategy {
            Strategy::UniformCost => {
                uniform_cost::run(grid, &mut self.neighbors, &mut self.visited);
            }
            Strategy::DepthFirst => {
                dfs::run(grid, &mut self.neighbors, &mut self.visited);
            }
        }
        log::debug!(
            "{:?} run expanded {} cells, finish reached: {}",
            strategy,
            self.visited.len(),
            finish_reached(grid)
        );
        &self.visited
    }

    /// The visited order of the most recent run.
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }
}

/// Whether the last run on `grid` reached its finish cell.
pub fn finish_reached(grid: &Grid) -> bool {
    grid.at(grid.finish()).is_some_and(|c| c.visited)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_round_trip() {
        let json = serde_json::to_string(&Strategy::DepthFirst).unwrap();
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Strategy::DepthFirst);
    }
}
