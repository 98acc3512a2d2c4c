//! **pathviz-search** — traversal strategies for the grid search visualizer.
//!
//! This crate runs the interchangeable search algorithms over a
//! `pathviz-core` grid and reconstructs the found route:
//!
//! - **Uniform-cost** (Dijkstra-style) search, honoring cell weights
//!   ([`Strategy::UniformCost`])
//! - **Depth-first** first-found search ([`Strategy::DepthFirst`])
//! - **Path reconstruction** with cardinal direction tagging
//!   ([`reconstruct_path`])
//!
//! All runs go through [`Searcher`], which owns and reuses its internal
//! buffers so repeated runs incur no allocations after warm-up. A typical
//! run from the UI layer:
//!
//! ```
//! use pathviz_core::Grid;
//! use pathviz_search::{Searcher, Strategy, finish_reached, reconstruct_path};
//!
//! let mut grid = Grid::standard();
//! let mut searcher = Searcher::new();
//! let visited = searcher.run(&mut grid, Strategy::UniformCost).to_vec();
//! let path = if finish_reached(&grid) {
//!     reconstruct_path(&mut grid)
//! } else {
//!     Vec::new()
//! };
//! assert_eq!(path.first(), Some(&grid.start()));
//! assert!(visited.len() >= path.len());
//! ```

mod dfs;
mod neighbors;
mod path;
mod search;
mod uniform_cost;

pub use neighbors::Neighbors;
pub use path::reconstruct_path;
pub use search::{Searcher, Strategy, finish_reached};
