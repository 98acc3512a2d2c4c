//! Path reconstruction from back-references.

use pathviz_core::{Direction, Grid, Point};

/// Walk the back-references from the finish cell to the start cell and
/// return the path in start → finish order, annotating each cell's
/// `direction` with the cardinal step it was entered by. The start cell's
/// direction stays `None`.
///
/// Valid only after a search run whose back-references reach the finish;
/// if the finish was never discovered the empty vector is returned — empty
/// unambiguously means "no path", since start and finish never coincide.
/// Calling this on a grid no run has touched is a contract violation and
/// also yields the empty vector.
pub fn reconstruct_path(grid: &mut Grid) -> Vec<Point> {
    let finish = grid.finish();
    if grid.at(finish).is_none_or(|c| c.previous.is_none()) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut cur = Some(finish);
    while let Some(p) = cur {
        path.push(p);
        // Back-references form a tree rooted at start, so the walk is
        // bounded by the cell count unless scratch state is corrupt.
        debug_assert!(path.len() <= grid.bounds().len(), "previous links form a cycle");
        if path.len() > grid.bounds().len() {
            return Vec::new();
        }
        cur = grid.at(p).and_then(|c| c.previous);
    }
    path.reverse();

    for i in 1..path.len() {
        // Steps are orthogonal and unit-distance, so exactly one direction
        // matches each consecutive pair.
        let dir = Direction::between(path[i - 1], path[i]);
        if let Some(c) = grid.at_mut(path[i]) {
            c.direction = dir;
        }
        if let Some(d) = dir {
            log::trace!("path step {}: {} entered moving {}", i, path[i], d);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn no_search_yields_empty_path() {
        let mut g = Grid::new(4, 4, p(0, 0), p(3, 3)).unwrap();
        assert!(reconstruct_path(&mut g).is_empty());
    }

    #[test]
    fn follows_previous_links_and_annotates() {
        let mut g = Grid::new(3, 3, p(0, 0), p(2, 2)).unwrap();
        // Hand-built L-shaped run: south twice, then east twice.
        let chain = [p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)];
        for w in chain.windows(2) {
            g.at_mut(w[1]).unwrap().previous = Some(w[0]);
        }
        let path = reconstruct_path(&mut g);
        assert_eq!(path, chain);
        assert_eq!(g.at(p(0, 0)).unwrap().direction, None);
        assert_eq!(g.at(p(0, 1)).unwrap().direction, Some(Direction::South));
        assert_eq!(g.at(p(0, 2)).unwrap().direction, Some(Direction::South));
        assert_eq!(g.at(p(1, 2)).unwrap().direction, Some(Direction::East));
        assert_eq!(g.at(p(2, 2)).unwrap().direction, Some(Direction::East));
    }

    #[test]
    fn consecutive_steps_differ_on_exactly_one_axis() {
        let mut g = Grid::new(4, 2, p(0, 0), p(3, 1)).unwrap();
        let chain = [p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(3, 1)];
        for w in chain.windows(2) {
            g.at_mut(w[1]).unwrap().previous = Some(w[0]);
        }
        let path = reconstruct_path(&mut g);
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
            let dir = g.at(w[1]).unwrap().direction.unwrap();
            assert_eq!(Direction::between(w[0], w[1]), Some(dir));
        }
    }
}
