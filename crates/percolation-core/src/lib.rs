//! Percolation model for Monte Carlo threshold estimation.
//!
//! An n-by-n grid of sites starts fully closed. Sites are opened one at a
//! time, and the grid *percolates* once a chain of open sites connects the
//! top row to the bottom row. Connectivity is tracked with a weighted
//! union-find over the sites plus two virtual nodes standing in for the top
//! and bottom boundaries, so the percolation check is a single
//! find-equivalence query instead of a boundary scan.
//!
//! The trial loop and statistics live in the driver crate; this crate is
//! just the model.

mod grid;
mod union_find;

pub use grid::{Percolation, MAX_SIDE};
pub use union_find::WeightedUnionFind;

/// Result type for percolation model operations
pub type PercolationResult<T> = Result<T, PercolationError>;

/// Errors that can occur constructing or operating on the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid side length outside the supported `1..=MAX_SIDE` range
    InvalidSize(usize),
    /// 1-based site coordinates outside the grid
    OutOfBounds { row: usize, col: usize, n: usize },
    /// Union-find element id outside the universe
    ElementOutOfRange { id: usize, len: usize },
    /// Union-find constructed over zero elements
    EmptyUniverse,
}

impl std::fmt::Display for PercolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize(n) => {
                write!(f, "Grid side length {} is outside 1..={}", n, MAX_SIDE)
            }
            Self::OutOfBounds { row, col, n } => {
                write!(f, "Site ({}, {}) is outside the {}-by-{} grid", row, col, n, n)
            }
            Self::ElementOutOfRange { id, len } => {
                write!(f, "Element {} is outside the union-find universe 0..{}", id, len)
            }
            Self::EmptyUniverse => write!(f, "Union-find needs at least one element"),
        }
    }
}

impl std::error::Error for PercolationError {}
