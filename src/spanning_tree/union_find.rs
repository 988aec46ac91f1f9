//! Disjoint-set forest.

/// Union-find over the elements `0..n`.
///
/// # Examples
///
/// ```
/// use u_tsp::spanning_tree::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1));
/// assert!(set.union(2, 3));
/// assert!(!set.union(1, 0));
/// assert!(set.connected(0, 1));
/// assert!(!set.connected(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the representative of `v`'s set, compressing the path.
    pub fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = v;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `u` and `v` by rank.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }
        match self.rank[ru].cmp(&self.rank[rv]) {
            std::cmp::Ordering::Greater => self.parent[rv] = ru,
            std::cmp::Ordering::Less => self.parent[ru] = rv,
            std::cmp::Ordering::Equal => {
                self.parent[rv] = ru;
                self.rank[ru] += 1;
            }
        }
        true
    }

    /// Returns `true` if `u` and `v` are in the same set.
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }
}
