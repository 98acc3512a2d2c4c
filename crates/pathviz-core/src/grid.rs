//! The [`Grid`] type — an owned rectangular board of [`Cell`]s.
//!
//! Unlike a shared-buffer grid, this grid owns its cells exclusively: search
//! strategies borrow it mutably for the duration of one run, which also
//! rules out concurrent runs on the same grid at compile time.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// Default board width, matching the classic visualizer layout.
pub const STANDARD_WIDTH: i32 = 50;
/// Default board height.
pub const STANDARD_HEIGHT: i32 = 20;
/// Default start position on the standard board.
pub const STANDARD_START: Point = Point::new(15, 10);
/// Default finish position on the standard board.
pub const STANDARD_FINISH: Point = Point::new(35, 10);

/// A rectangular grid of [`Cell`]s with fixed start and finish positions.
///
/// Exactly one cell has `is_start` set and exactly one has `is_finish`;
/// both are fixed at construction. Walls and weights may be edited between
/// search runs via [`toggle_wall`](Grid::toggle_wall) and
/// [`set_weight`](Grid::set_weight).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    finish: Point,
}

impl Grid {
    /// Create a grid of the given dimensions with all cells open and
    /// unweighted.
    ///
    /// Fails if the dimensions are non-positive, if `start` or `finish`
    /// lie outside the grid, or if they coincide.
    pub fn new(width: i32, height: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        if !bounds.contains(start) {
            return Err(GridError::StartOutOfBounds(start));
        }
        if !bounds.contains(finish) {
            return Err(GridError::FinishOutOfBounds(finish));
        }
        if start == finish {
            return Err(GridError::StartEqualsFinish(start));
        }
        let mut grid = Self {
            cells: vec![Cell::open(); bounds.len()],
            bounds,
            start,
            finish,
        };
        // Bounds were checked above, so both cells exist.
        if let Some(c) = grid.at_mut(start) {
            c.is_start = true;
            c.distance = 0;
        }
        if let Some(c) = grid.at_mut(finish) {
            c.is_finish = true;
        }
        Ok(grid)
    }

    /// The classic visualizer board: 50×20 cells, start and finish on the
    /// middle row.
    pub fn standard() -> Self {
        // Constants are in bounds and distinct, so this cannot fail.
        Self::new(
            STANDARD_WIDTH,
            STANDARD_HEIGHT,
            STANDARD_START,
            STANDARD_FINISH,
        )
        .unwrap_or_else(|_| unreachable!("standard board constants are valid"))
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The start position.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The finish position.
    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// Flip the wall flag at `p`.
    ///
    /// The start cell, the finish cell and out-of-bounds positions are
    /// silently ignored, so grid invariants cannot be corrupted by the
    /// editing layer. Must not be called while a search run borrows the
    /// grid (the borrow checker enforces this).
    pub fn toggle_wall(&mut self, p: Point) {
        if p == self.start || p == self.finish {
            return;
        }
        if let Some(c) = self.at_mut(p) {
            c.is_wall = !c.is_wall;
        }
    }

    /// Set the traversal weight at `p`, clamped to be non-negative.
    /// Out-of-bounds positions are silently ignored.
    pub fn set_weight(&mut self, p: Point, weight: i32) {
        if let Some(c) = self.at_mut(p) {
            c.weight = weight.max(0);
        }
    }

    /// Reset every cell's search scratch: distance to +∞ (0 for start),
    /// visited flags off, back-references and directions cleared.
    ///
    /// Runs are independent only if this is invoked before each one; the
    /// search entry point does so.
    pub fn reset_search_state(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset_search_state();
        }
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.bounds
            .iter()
            .zip(self.cells.iter())
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors reported by [`Grid::new`] for invalid configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// The start position lies outside the grid.
    StartOutOfBounds(Point),
    /// The finish position lies outside the grid.
    FinishOutOfBounds(Point),
    /// Start and finish coincide.
    StartEqualsFinish(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::StartOutOfBounds(p) => write!(f, "start {p} is out of bounds"),
            Self::FinishOutOfBounds(p) => write!(f, "finish {p} is out of bounds"),
            Self::StartEqualsFinish(p) => write!(f, "start and finish coincide at {p}"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::UNREACHABLE;
    use crate::geom::Direction;

    fn grid_3x3() -> Grid {
        Grid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap()
    }

    #[test]
    fn new_marks_start_and_finish() {
        let g = grid_3x3();
        assert_eq!(g.size(), Point::new(3, 3));
        let start = g.at(g.start()).unwrap();
        assert!(start.is_start && !start.is_finish);
        assert_eq!(start.distance, 0);
        let finish = g.at(g.finish()).unwrap();
        assert!(finish.is_finish && !finish.is_start);
        assert_eq!(finish.distance, UNREACHABLE);
        // Exactly one of each.
        assert_eq!(g.iter().filter(|(_, c)| c.is_start).count(), 1);
        assert_eq!(g.iter().filter(|(_, c)| c.is_finish).count(), 1);
    }

    #[test]
    fn new_rejects_bad_dimensions() {
        let err = Grid::new(0, 3, Point::ZERO, Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
        assert!(Grid::new(3, -1, Point::ZERO, Point::new(1, 1)).is_err());
    }

    #[test]
    fn new_rejects_out_of_bounds_endpoints() {
        let start = Point::new(5, 0);
        let err = Grid::new(3, 3, start, Point::new(1, 1)).unwrap_err();
        assert_eq!(err, GridError::StartOutOfBounds(start));

        let finish = Point::new(0, 3);
        let err = Grid::new(3, 3, Point::ZERO, finish).unwrap_err();
        assert_eq!(err, GridError::FinishOutOfBounds(finish));
    }

    #[test]
    fn new_rejects_coinciding_endpoints() {
        let p = Point::new(1, 1);
        let err = Grid::new(3, 3, p, p).unwrap_err();
        assert_eq!(err, GridError::StartEqualsFinish(p));
    }

    #[test]
    fn standard_board() {
        let g = Grid::standard();
        assert_eq!(g.width(), STANDARD_WIDTH);
        assert_eq!(g.height(), STANDARD_HEIGHT);
        assert!(g.at(STANDARD_START).unwrap().is_start);
        assert!(g.at(STANDARD_FINISH).unwrap().is_finish);
    }

    #[test]
    fn toggle_wall_flips() {
        let mut g = grid_3x3();
        let p = Point::new(1, 1);
        g.toggle_wall(p);
        assert!(g.at(p).unwrap().is_wall);
        g.toggle_wall(p);
        assert!(!g.at(p).unwrap().is_wall);
    }

    #[test]
    fn toggle_wall_ignores_endpoints_and_oob() {
        let mut g = grid_3x3();
        g.toggle_wall(g.start());
        g.toggle_wall(g.finish());
        assert!(!g.at(g.start()).unwrap().is_wall);
        assert!(!g.at(g.finish()).unwrap().is_wall);
        // No panic out of bounds.
        g.toggle_wall(Point::new(-1, 99));
    }

    #[test]
    fn set_weight_clamps_negative() {
        let mut g = grid_3x3();
        let p = Point::new(2, 0);
        g.set_weight(p, 5);
        assert_eq!(g.at(p).unwrap().weight, 5);
        g.set_weight(p, -3);
        assert_eq!(g.at(p).unwrap().weight, 0);
        g.set_weight(Point::new(9, 9), 1); // no panic
    }

    #[test]
    fn reset_search_state_clears_every_cell() {
        let mut g = grid_3x3();
        let p = Point::new(1, 0);
        {
            let c = g.at_mut(p).unwrap();
            c.distance = 3;
            c.visited = true;
            c.previous = Some(Point::ZERO);
            c.direction = Some(Direction::South);
        }
        g.reset_search_state();
        let c = g.at(p).unwrap();
        assert_eq!(c.distance, UNREACHABLE);
        assert!(!c.visited);
        assert_eq!(c.previous, None);
        assert_eq!(c.direction, None);
        assert_eq!(g.at(g.start()).unwrap().distance, 0);
    }

    #[test]
    fn at_out_of_bounds_is_none() {
        let g = grid_3x3();
        assert!(g.at(Point::new(3, 0)).is_none());
        assert!(g.at(Point::new(0, -1)).is_none());
    }

    #[test]
    fn iter_is_row_major() {
        let g = grid_3x3();
        let pts: Vec<Point> = g.iter().map(|(p, _)| p).collect();
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts.len(), 9);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(4, 3, Point::new(0, 0), Point::new(3, 2)).unwrap();
        g.toggle_wall(Point::new(1, 1));
        g.set_weight(Point::new(2, 0), 7);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.start(), g.start());
        assert_eq!(back.finish(), g.finish());
        assert!(back.at(Point::new(1, 1)).unwrap().is_wall);
        assert_eq!(back.at(Point::new(2, 0)).unwrap().weight, 7);
    }
}
