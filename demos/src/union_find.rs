//! Union-Find Variants
//!
//! Two weighted quick-union structures to benchmark against each other:
//! - [`HeightWeightedUnionFind`]: links the shorter tree under the taller one,
//!   with optional path compression
//! - [`SizeWeightedUnionFind`]: links the smaller tree under the larger one,
//!   halving paths on every `find`

use rand::Rng;

/// Dynamic connectivity over sites `0..len`
pub trait UnionFind {
    /// Number of sites
    fn len(&self) -> usize;

    /// Whether there are no sites
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of connected components
    fn components(&self) -> usize;

    /// Root of the component containing `p`
    fn find(&mut self, p: usize) -> usize;

    /// Merge the components containing `p` and `q`
    fn union(&mut self, p: usize, q: usize);

    /// Whether `p` and `q` are in the same component
    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}

/// Weighted quick-union by height
#[derive(Debug, Clone)]
pub struct HeightWeightedUnionFind {
    parent: Vec<usize>,
    height: Vec<u32>,
    components: usize,
    path_compression: bool,
}

impl HeightWeightedUnionFind {
    /// `n` singleton components
    pub fn new(n: usize, path_compression: bool) -> Self {
        Self {
            parent: (0..n).collect(),
            height: vec![1; n],
            components: n,
            path_compression,
        }
    }
}

impl UnionFind for HeightWeightedUnionFind {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn components(&self) -> usize {
        self.components
    }

    fn find(&mut self, mut p: usize) -> usize {
        let root = {
            let mut r = p;
            while self.parent[r] != r {
                r = self.parent[r];
            }
            r
        };
        if self.path_compression {
            while p != root {
                let next = self.parent[p];
                self.parent[p] = root;
                p = next;
            }
        }
        root
    }

    fn union(&mut self, p: usize, q: usize) {
        let i = self.find(p);
        let j = self.find(q);
        if i == j {
            return;
        }
        match self.height[i].cmp(&self.height[j]) {
            std::cmp::Ordering::Less => self.parent[i] = j,
            std::cmp::Ordering::Greater => self.parent[j] = i,
            std::cmp::Ordering::Equal => {
                self.parent[j] = i;
                self.height[i] += 1;
            }
        }
        self.components -= 1;
    }
}

/// Weighted quick-union by size with path halving
#[derive(Debug, Clone)]
pub struct SizeWeightedUnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl SizeWeightedUnionFind {
    /// `n` singleton components
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }
}

impl UnionFind for SizeWeightedUnionFind {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn components(&self) -> usize {
        self.components
    }

    fn find(&mut self, mut p: usize) -> usize {
        // Path halving: every visited site skips to its grandparent
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    fn union(&mut self, p: usize, q: usize) {
        let i = self.find(p);
        let j = self.find(q);
        if i == j {
            return;
        }
        if self.size[i] < self.size[j] {
            self.parent[i] = j;
            self.size[j] += self.size[i];
        } else {
            self.parent[j] = i;
            self.size[i] += self.size[j];
        }
        self.components -= 1;
    }
}

/// Connect random pairs until one component remains.
///
/// Returns the number of pairs generated. A structure with at most one site
/// is already connected and returns 0.
pub fn count_unions<U, R>(uf: &mut U, rng: &mut R) -> usize
where
    U: UnionFind + ?Sized,
    R: Rng,
{
    let n = uf.len();
    let mut pairs = 0;
    while uf.components() > 1 {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        pairs += 1;
        if !uf.connected(p, q) {
            uf.union(p, q);
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn check_basic<U: UnionFind>(mut uf: U) {
        assert_eq!(uf.len(), 10);
        assert_eq!(uf.components(), 10);

        uf.union(1, 2);
        uf.union(3, 4);
        uf.union(2, 4);
        assert!(uf.connected(1, 3));
        assert!(!uf.connected(0, 1));
        assert_eq!(uf.components(), 7);

        // Repeated union is a no-op
        uf.union(1, 4);
        assert_eq!(uf.components(), 7);
    }

    #[test]
    fn test_height_weighted() {
        check_basic(HeightWeightedUnionFind::new(10, false));
    }

    #[test]
    fn test_height_weighted_compressed() {
        check_basic(HeightWeightedUnionFind::new(10, true));
    }

    #[test]
    fn test_size_weighted() {
        check_basic(SizeWeightedUnionFind::new(10));
    }

    #[test]
    fn test_height_stays_logarithmic() {
        let mut uf = HeightWeightedUnionFind::new(1024, false);
        let mut width = 1;
        while width < 1024 {
            for start in (0..1024).step_by(width * 2) {
                uf.union(start, start + width);
            }
            width *= 2;
        }
        assert_eq!(uf.components(), 1);
        assert!(uf.height.iter().all(|&h| h <= 11));
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut uf = HeightWeightedUnionFind::new(4, true);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(0, 2);
        let root = uf.find(3);
        assert_eq!(uf.parent[3], root);
    }

    #[test]
    fn test_path_halving_shortens_chain() {
        // Chain 4 -> 3 -> 2 -> 1 -> 0
        let mut uf = SizeWeightedUnionFind::new(5);
        uf.parent = vec![0, 0, 1, 2, 3];

        assert_eq!(uf.find(4), 0);
        // 4 skips to 2, 2 skips to 0; 3 and 1 are left in place
        assert_eq!(uf.parent, vec![0, 0, 0, 2, 2]);

        assert_eq!(uf.find(4), 0);
        assert_eq!(uf.parent[4], 0);
    }

    #[test]
    fn test_count_unions_connects_everything() {
        let mut rng = StdRng::seed_from_u64(6205);
        let mut uf = SizeWeightedUnionFind::new(200);
        let pairs = count_unions(&mut uf, &mut rng);

        assert_eq!(uf.components(), 1);
        // At least n - 1 successful unions are needed
        assert!(pairs >= 199);
    }

    #[test]
    fn test_count_unions_trivial() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(count_unions(&mut SizeWeightedUnionFind::new(1), &mut rng), 0);
        assert_eq!(count_unions(&mut HeightWeightedUnionFind::new(0, false), &mut rng), 0);
    }

    #[test]
    fn test_same_seed_same_count() {
        let a = count_unions(
            &mut HeightWeightedUnionFind::new(300, false),
            &mut StdRng::seed_from_u64(42),
        );
        let b = count_unions(
            &mut SizeWeightedUnionFind::new(300),
            &mut StdRng::seed_from_u64(42),
        );
        // Same random pairs, same connectivity history
        assert_eq!(a, b);
    }
}
