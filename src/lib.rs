//! Calendar Puzzle Solver Library
//!
//! Provides the core solving functionality for the 6x9 calendar tiling
//! puzzle: ten five-cell pieces must cover the board so that exactly the
//! selected month, day, and weekday cells (plus one fixed forbidden cell)
//! stay uncovered.

pub mod board;
pub mod geometry;
pub mod persistence;
pub mod pieces;
pub mod solver;

pub use pieces::{Cell, Placement};
pub use solver::{solve, RequestError};
