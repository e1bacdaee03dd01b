use alloc::vec::Vec;
use core::cmp;

/// Binary indexed tree over per-item sizes.
///
/// `prefix_sum(i)` is the start offset of item `i`, `lower_bound(offset)` maps an offset back to
/// the item containing it. Point updates are `O(log n)`.
#[derive(Clone, Debug)]
pub(crate) struct Fenwick {
    tree: Vec<u64>, // 1-indexed
    total: u64,
    max_bit: usize,
}

impl Fenwick {
    /// Builds the tree for `n` items that all have `size`.
    ///
    /// Node `i` covers the last `lsb(i)` items ending at `i`, so with uniform sizes its value is
    /// known directly and no propagation pass is needed.
    pub(crate) fn uniform(n: usize, size: u32) -> Self {
        let size = size as u64;
        let mut tree = Vec::with_capacity(n + 1);
        tree.push(0);
        for i in 1..=n {
            tree.push((lsb(i) as u64).saturating_mul(size));
        }
        Self {
            tree,
            total: (n as u64).saturating_mul(size),
            max_bit: highest_power_of_two_leq(n),
        }
    }

    pub(crate) fn from_sizes(sizes: &[u32]) -> Self {
        let n = sizes.len();
        let mut tree = alloc::vec![0u64; n + 1];
        let mut total = 0u64;
        for i in 1..=n {
            let v = sizes[i - 1] as u64;
            total = total.saturating_add(v);
            tree[i] = tree[i].saturating_add(v);
            let j = i + lsb(i);
            if j <= n {
                tree[j] = tree[j].saturating_add(tree[i]);
            }
        }
        Self {
            tree,
            total,
            max_bit: highest_power_of_two_leq(n),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    pub(crate) fn add(&mut self, index: usize, delta: i64) {
        let n = self.len();
        if index >= n || delta == 0 {
            return;
        }
        if delta > 0 {
            self.total = self.total.saturating_add(delta as u64);
        } else {
            self.total = self.total.saturating_sub(delta.unsigned_abs());
        }
        let mut i = index + 1;
        while i <= n {
            let next = self.tree[i] as i128 + delta as i128;
            debug_assert!(next >= 0, "Fenwick underflow (node={i}, delta={delta})");
            self.tree[i] = next.clamp(0, u64::MAX as i128) as u64;
            i += lsb(i);
        }
    }

    /// Sum of the first `count` sizes.
    pub(crate) fn prefix_sum(&self, count: usize) -> u64 {
        let mut i = cmp::min(count, self.len());
        let mut sum = 0u64;
        while i > 0 {
            sum = sum.saturating_add(self.tree[i]);
            i &= i - 1;
        }
        sum
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Returns the largest `k` with `prefix_sum(k) <= target`.
    ///
    /// With strictly positive sizes this is the index of the item whose span contains `target`
    /// (or `len` when `target` is at or past the end).
    pub(crate) fn lower_bound(&self, mut target: u64) -> usize {
        let n = self.len();
        let mut idx = 0usize;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n && self.tree[next] <= target {
                target -= self.tree[next];
                idx = next;
            }
            bit >>= 1;
        }
        idx
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_from_sizes() {
        for n in [0usize, 1, 2, 3, 7, 8, 9, 33] {
            let a = Fenwick::uniform(n, 5);
            let b = Fenwick::from_sizes(&alloc::vec![5; n]);
            assert_eq!(a.total(), b.total());
            for k in 0..=n {
                assert_eq!(a.prefix_sum(k), b.prefix_sum(k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn lower_bound_finds_containing_item() {
        let f = Fenwick::from_sizes(&[10, 20, 5]);
        assert_eq!(f.lower_bound(0), 0);
        assert_eq!(f.lower_bound(9), 0);
        assert_eq!(f.lower_bound(10), 1);
        assert_eq!(f.lower_bound(29), 1);
        assert_eq!(f.lower_bound(30), 2);
        assert_eq!(f.lower_bound(35), 3);
    }

    #[test]
    fn add_shifts_later_prefixes_only() {
        let mut f = Fenwick::uniform(10, 50);
        f.add(7, 70);
        assert_eq!(f.prefix_sum(7), 350);
        assert_eq!(f.prefix_sum(8), 470);
        assert_eq!(f.total(), 570);
    }
}
