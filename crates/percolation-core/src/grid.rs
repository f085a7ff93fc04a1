use crate::union_find::WeightedUnionFind;
use crate::{PercolationError, PercolationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported side length.
///
/// Keeps `n * n + 2` representable even where `usize` is 32 bits, so site
/// ids never overflow.
pub const MAX_SIDE: usize = 65_534;

/// An n-by-n percolation grid.
///
/// Sites start closed and can only be opened, never re-closed. Open sites
/// are merged into connected components through a [`WeightedUnionFind`]
/// sized `n * n + 2`: one element per site plus two virtual nodes, one
/// standing in for the whole top boundary and one for the bottom. Every
/// top-row site is unioned with the top virtual node at construction time
/// (and likewise for the bottom row), so [`percolates`](Self::percolates)
/// reduces to comparing the two virtual nodes' representatives.
///
/// Public coordinates are 1-based, `(1, 1)` being the upper-left site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Percolation {
    n: usize,
    /// Row-major open flags, `id = row * n + col` with 0-based row/col.
    sites: Vec<bool>,
    uf: WeightedUnionFind,
    upper_root: usize,
    lower_root: usize,
    open_sites: usize,
}

impl Percolation {
    /// Create an `n`-by-`n` grid with every site closed.
    ///
    /// Fails with [`PercolationError::InvalidSize`] unless
    /// `1 <= n <= MAX_SIDE`.
    pub fn new(n: usize) -> PercolationResult<Self> {
        if n < 1 || n > MAX_SIDE {
            return Err(PercolationError::InvalidSize(n));
        }

        let total = n * n;
        let upper_root = total;
        let lower_root = total + 1;
        let mut uf = WeightedUnionFind::new(total + 2)?;

        // Wire the boundary rows to their virtual nodes up front. For n == 1
        // the lone site joins both, which is why percolates() special-cases
        // the unit grid on its open flag instead.
        for col in 0..n {
            uf.union(col, upper_root)?;
            uf.union((n - 1) * n + col, lower_root)?;
        }

        Ok(Self {
            n,
            sites: vec![false; total],
            uf,
            upper_root,
            lower_root,
            open_sites: 0,
        })
    }

    /// Side length of the grid.
    pub fn side(&self) -> usize {
        self.n
    }

    /// Total number of sites, open or closed.
    pub fn total_sites(&self) -> usize {
        self.n * self.n
    }

    /// Open the site at `(row, col)` and merge it with any open orthogonal
    /// neighbors. Opening an already-open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> PercolationResult<()> {
        let id = self.site_id(row, col)?;
        if self.sites[id] {
            return Ok(());
        }
        self.sites[id] = true;
        self.open_sites += 1;

        let (r, c) = (row - 1, col - 1);
        if r > 0 && self.sites[id - self.n] {
            self.uf.union(id, id - self.n)?;
        }
        if r + 1 < self.n && self.sites[id + self.n] {
            self.uf.union(id, id + self.n)?;
        }
        if c > 0 && self.sites[id - 1] {
            self.uf.union(id, id - 1)?;
        }
        if c + 1 < self.n && self.sites[id + 1] {
            self.uf.union(id, id + 1)?;
        }
        Ok(())
    }

    /// Whether the site at `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> PercolationResult<bool> {
        let id = self.site_id(row, col)?;
        Ok(self.sites[id])
    }

    /// Whether the site at `(row, col)` is full: open and connected to the
    /// top boundary through a chain of open sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> PercolationResult<bool> {
        let id = self.site_id(row, col)?;
        if !self.sites[id] {
            return Ok(false);
        }
        let upper = self.upper_root;
        Ok(self.uf.root(id) == self.uf.root(upper))
    }

    /// Number of sites opened so far. Never decreases.
    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Whether some chain of open sites connects the top row to the bottom
    /// row. Monotonic: once true, stays true.
    pub fn percolates(&mut self) -> bool {
        if self.n == 1 {
            // The unit grid's site joined both virtual nodes at
            // construction, so the component test is vacuous there.
            return self.sites[0];
        }
        let (upper, lower) = (self.upper_root, self.lower_root);
        self.uf.root(lower) == self.uf.root(upper)
    }

    /// Validate 1-based coordinates and map them to a site id.
    fn site_id(&self, row: usize, col: usize) -> PercolationResult<usize> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(PercolationError::OutOfBounds {
                row,
                col,
                n: self.n,
            });
        }
        Ok((row - 1) * self.n + (col - 1))
    }
}

impl fmt::Display for Percolation {
    /// Debug dump: `O` for open sites, `.` for closed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                if col > 0 {
                    write!(f, " ")?;
                }
                let ch = if self.sites[row * self.n + col] { 'O' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
