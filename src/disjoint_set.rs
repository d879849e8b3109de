use crate::error::MazeError;

/// Union-find over a fixed number of elements, with path compression and
/// union by rank.
///
/// Indices are checked at the public boundary since the structure is reusable
/// outside the generator. A live component count makes the "fully unified"
/// test O(1) instead of a scan over all parents.
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per element.
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements in the structure.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently alive.
    pub fn components(&self) -> usize {
        self.components
    }

    /// True once every element belongs to a single set.
    pub fn unified(&self) -> bool {
        self.components == 1
    }

    /// Returns the canonical representative of the set containing `x`.
    /// Every node visited on the way to the root is re-pointed directly at it.
    pub fn find(&mut self, x: usize) -> Result<usize, MazeError> {
        if x >= self.parent.len() {
            return Err(MazeError::InvalidIndex {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(self.find_root(x))
    }

    fn find_root(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find_root(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if the two elements were already in the same set.
    /// The lower-rank root is attached under the higher-rank one; on a rank
    /// tie, y's root goes under x's root and x's root gains one rank.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, MazeError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.components -= 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_all_singletons() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.len(), 4);
        assert_eq!(set.components(), 4);
        for i in 0..4 {
            assert_eq!(set.find(i).unwrap(), i);
        }
    }

    #[test]
    fn union_merges_and_counts_down() {
        let mut set = DisjointSet::new(4);
        assert!(set.union(0, 1).unwrap());
        assert_eq!(set.components(), 3);
        assert_eq!(set.find(0).unwrap(), set.find(1).unwrap());

        // Merging the same pair again is a no-op
        assert!(!set.union(0, 1).unwrap());
        assert_eq!(set.components(), 3);
    }

    #[test]
    fn rank_tie_attaches_second_under_first() {
        let mut set = DisjointSet::new(3);
        // Both roots have rank 0, so 1's root is attached under 0's root
        set.union(0, 1).unwrap();
        assert_eq!(set.find(1).unwrap(), 0);
        // 2 (rank 0) now attaches under 0 (rank 1)
        set.union(2, 0).unwrap();
        assert_eq!(set.find(2).unwrap(), 0);
    }

    #[test]
    fn find_is_idempotent() {
        let mut set = DisjointSet::new(5);
        set.union(0, 1).unwrap();
        set.union(1, 2).unwrap();
        set.union(3, 4).unwrap();

        let root = set.find(2).unwrap();
        // Path compression must not change logical connectivity
        assert_eq!(set.find(2).unwrap(), root);
        assert_eq!(set.find(2).unwrap(), root);
    }

    #[test]
    fn find_tracks_union_history() {
        let mut set = DisjointSet::new(6);
        set.union(0, 1).unwrap();
        set.union(1, 2).unwrap();
        set.union(3, 4).unwrap();

        assert_eq!(set.find(0).unwrap(), set.find(2).unwrap());
        assert_eq!(set.find(3).unwrap(), set.find(4).unwrap());
        assert_ne!(set.find(2).unwrap(), set.find(4).unwrap());
        assert_ne!(set.find(5).unwrap(), set.find(0).unwrap());
        assert_eq!(set.components(), 3);
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let mut set = DisjointSet::new(4);
        assert_eq!(
            set.find(4),
            Err(MazeError::InvalidIndex { index: 4, len: 4 })
        );
        assert_eq!(
            set.union(0, 7),
            Err(MazeError::InvalidIndex { index: 7, len: 4 })
        );
    }

    #[test]
    fn all_elements_unify() {
        let mut set = DisjointSet::new(4);
        assert!(!set.unified());
        set.union(0, 1).unwrap();
        set.union(2, 3).unwrap();
        set.union(1, 3).unwrap();
        assert!(set.unified());
        assert_eq!(set.components(), 1);
    }
}
