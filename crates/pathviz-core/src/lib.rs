//! **pathviz-core** — data model for the grid search visualizer.
//!
//! This crate provides the substrate the search strategies operate on:
//! geometry primitives ([`Point`], [`Range`], [`Direction`]), the [`Cell`]
//! model carrying wall/weight flags and per-run search scratch, and the
//! owned [`Grid`] container with construction-time validation, wall and
//! weight editing, and search-state reset.
//!
//! Search strategies and path reconstruction live in `pathviz-search`.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, UNREACHABLE};
pub use geom::{CARDINALS, Direction, Point, Range};
pub use grid::{Grid, GridError};
