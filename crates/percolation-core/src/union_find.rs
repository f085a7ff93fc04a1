use crate::{PercolationError, PercolationResult};
use serde::{Deserialize, Serialize};

/// Disjoint-set forest with weighted union by size and path halving.
///
/// Tracks a partition of the elements `0..count` into components. Unions are
/// permanent — the structure never splits a merged component, which matches
/// grid sites never re-closing. Find and union are amortized near-constant.
///
/// Queries take `&mut self` because path halving rewrites parent links as a
/// side effect of every lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedUnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl WeightedUnionFind {
    /// Create `count` singleton components with ids `0..count`.
    pub fn new(count: usize) -> PercolationResult<Self> {
        if count < 1 {
            return Err(PercolationError::EmptyUniverse);
        }
        Ok(Self {
            parent: (0..count).collect(),
            size: vec![1; count],
            components: count,
        })
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// The universe is never empty; construction rejects `count < 1`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Canonical representative of the component containing `a`.
    ///
    /// Two elements are in the same component iff their representatives
    /// are equal.
    pub fn find(&mut self, a: usize) -> PercolationResult<usize> {
        self.check(a)?;
        Ok(self.root(a))
    }

    /// Merge the components containing `a` and `b`.
    ///
    /// Returns `Ok(true)` if two distinct components were merged,
    /// `Ok(false)` if `a` and `b` were already connected.
    pub fn union(&mut self, a: usize, b: usize) -> PercolationResult<bool> {
        self.check(a)?;
        self.check(b)?;
        let root_a = self.root(a);
        let root_b = self.root(b);
        if root_a == root_b {
            return Ok(false);
        }

        // Attach the smaller tree under the larger one.
        if self.size[root_a] < self.size[root_b] {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        } else {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        }
        self.components -= 1;
        Ok(true)
    }

    /// Whether `a` and `b` are in the same component.
    pub fn connected(&mut self, a: usize, b: usize) -> PercolationResult<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Size of the component containing `a`.
    pub fn component_size(&mut self, a: usize) -> PercolationResult<usize> {
        let root = self.find(a)?;
        Ok(self.size[root])
    }

    fn check(&self, a: usize) -> PercolationResult<()> {
        if a >= self.parent.len() {
            return Err(PercolationError::ElementOutOfRange {
                id: a,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Find with path halving. Callers must ensure `a` is in range.
    pub(crate) fn root(&mut self, mut a: usize) -> usize {
        debug_assert!(a < self.parent.len());
        while self.parent[a] != a {
            self.parent[a] = self.parent[self.parent[a]];
            a = self.parent[a];
        }
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_singletons() {
        let mut uf = WeightedUnionFind::new(5).unwrap();
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.component_count(), 5);
        for i in 0..5 {
            assert_eq!(uf.find(i).unwrap(), i);
        }
    }

    #[test]
    fn test_new_zero_elements() {
        assert_eq!(
            WeightedUnionFind::new(0).unwrap_err(),
            PercolationError::EmptyUniverse
        );
    }

    #[test]
    fn test_union_merges() {
        let mut uf = WeightedUnionFind::new(5).unwrap();
        assert!(uf.union(0, 1).unwrap());
        assert!(uf.connected(0, 1).unwrap());
        assert!(!uf.connected(0, 2).unwrap());
        assert_eq!(uf.component_count(), 4);
    }

    #[test]
    fn test_union_already_connected() {
        let mut uf = WeightedUnionFind::new(5).unwrap();
        uf.union(0, 1).unwrap();
        assert!(!uf.union(1, 0).unwrap());
        assert_eq!(uf.component_count(), 4);
    }

    #[test]
    fn test_transitivity() {
        let mut uf = WeightedUnionFind::new(6).unwrap();
        uf.union(0, 1).unwrap();
        uf.union(2, 3).unwrap();
        assert!(!uf.connected(0, 3).unwrap());

        uf.union(1, 2).unwrap();
        assert!(uf.connected(0, 3).unwrap());
        assert_eq!(uf.component_count(), 3);
    }

    #[test]
    fn test_component_size() {
        let mut uf = WeightedUnionFind::new(4).unwrap();
        assert_eq!(uf.component_size(0).unwrap(), 1);
        uf.union(0, 1).unwrap();
        uf.union(1, 2).unwrap();
        assert_eq!(uf.component_size(2).unwrap(), 3);
        assert_eq!(uf.component_size(3).unwrap(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut uf = WeightedUnionFind::new(3).unwrap();
        assert_eq!(
            uf.find(3).unwrap_err(),
            PercolationError::ElementOutOfRange { id: 3, len: 3 }
        );
        assert!(uf.union(0, 7).is_err());
        assert!(uf.connected(9, 0).is_err());
    }

    #[test]
    fn test_chain_collapses_to_one_component() {
        let mut uf = WeightedUnionFind::new(10).unwrap();
        for i in 0..9 {
            uf.union(i, i + 1).unwrap();
        }
        assert_eq!(uf.component_count(), 1);
        let root = uf.find(0).unwrap();
        for i in 1..10 {
            assert_eq!(uf.find(i).unwrap(), root);
        }
    }
}
