//! The [`Cell`] type — one grid position with its per-run search scratch.

use crate::geom::{Direction, Point};

/// Sentinel distance meaning "not yet discovered" (+∞).
pub const UNREACHABLE: i32 = i32::MAX;

/// A single grid cell.
///
/// Static fields (`is_start`, `is_finish`, `is_wall`, `weight`) are owned by
/// the grid and its editing layer and may only change between runs. Scratch
/// fields (`distance`, `visited`, `previous`, `direction`) are reset before
/// every search run and owned by the running strategy until it returns.
///
/// A cell does not store its own position; positions are carried by the
/// grid index, and `previous` is a position into the same grid rather than
/// a reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// The single start cell of the grid.
    pub is_start: bool,
    /// The single finish cell of the grid.
    pub is_finish: bool,
    /// Walls are never expanded and never appear in visited order.
    pub is_wall: bool,
    /// Extra traversal cost on top of the unit step cost. Never negative.
    pub weight: i32,
    /// Cost recorded by the last uniform-cost run, [`UNREACHABLE`] until
    /// discovered.
    pub distance: i32,
    pub visited: bool,
    /// Back-reference to the cell this one was discovered from.
    pub previous: Option<Point>,
    /// Direction this cell was entered from, set during path
    /// reconstruction only. Stays `None` for the start cell.
    pub direction: Option<Direction>,
}

impl Cell {
    /// An open, unweighted cell with scratch at reset values.
    pub const fn open() -> Self {
        Self {
            is_start: false,
            is_finish: false,
            is_wall: false,
            weight: 0,
            distance: UNREACHABLE,
            visited: false,
            previous: None,
            direction: None,
        }
    }

    /// Set the wall flag (builder).
    #[inline]
    pub const fn with_wall(mut self, wall: bool) -> Self {
        self.is_wall = wall;
        self
    }

    /// Set the weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Reset the search scratch. The start cell gets distance 0, every
    /// other cell [`UNREACHABLE`].
    pub fn reset_search_state(&mut self) {
        self.distance = if self.is_start { 0 } else { UNREACHABLE };
        self.visited = false;
        self.previous = None;
        self.direction = None;
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::open()
    }
}
