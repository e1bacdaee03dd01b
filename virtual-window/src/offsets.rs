use alloc::vec::Vec;
use core::cmp;

use crate::fenwick::Fenwick;
use crate::key::{KeyIndexMap, WindowKey};
use crate::ItemKey;

/// Index ↔ offset mapping for a collection with a default item size and per-item overrides.
///
/// While no item deviates from the default size the index keeps no per-item storage and answers
/// every query arithmetically. The first override materializes per-item sizes and a Fenwick tree
/// of prefix sums, after which `offset_of`, `index_at` and size updates are `O(log n)`. An update
/// at index `i` only moves the offsets of indexes `> i`; nothing is ever cached past a change.
///
/// The index is addressable both by position and by item id. Ids are registered by
/// [`OffsetIndex::rebuild`]; [`OffsetIndex::reset`] produces an anonymous, purely positional
/// table.
#[derive(Clone, Debug)]
pub struct OffsetIndex<K = ItemKey> {
    len: usize,
    default_size: u32,
    keys: KeyIndexMap<K>,
    dense: Option<DenseSizes>,
}

#[derive(Clone, Debug)]
struct DenseSizes {
    sizes: Vec<u32>,
    overridden: Vec<bool>,
    sums: Fenwick,
}

impl<K: WindowKey> Default for OffsetIndex<K> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<K: WindowKey> OffsetIndex<K> {
    /// Creates an empty index. A zero `default_size` is clamped to 1.
    pub fn new(default_size: u32) -> Self {
        Self {
            len: 0,
            default_size: sanitize_size(default_size),
            keys: KeyIndexMap::<K>::new(),
            dense: None,
        }
    }

    /// Resets to `count` items of `default_size`, dropping all ids and overrides.
    pub fn reset(&mut self, count: usize, default_size: u32) {
        vdebug!(count, default_size, "OffsetIndex::reset");
        self.len = count;
        self.default_size = sanitize_size(default_size);
        self.keys.clear();
        self.dense = None;
    }

    /// Rebuilds the index from `(id, size)` entries in collection order.
    ///
    /// `Some(size)` entries become overrides; `None` (or a zero size) uses `default_size`.
    /// If an id occurs more than once the first occurrence owns it.
    pub fn rebuild(
        &mut self,
        entries: impl IntoIterator<Item = (K, Option<u32>)>,
        default_size: u32,
    ) {
        self.keys.clear();
        self.dense = None;
        self.default_size = sanitize_size(default_size);

        let mut overrides: Vec<(usize, u32)> = Vec::new();
        let mut len = 0usize;
        for (i, (key, size)) in entries.into_iter().enumerate() {
            let owner = *self.keys.entry(key).or_insert(i);
            if owner != i {
                vwarn!(index = i, owner, "OffsetIndex::rebuild: duplicate id");
            }
            if let Some(size) = size.filter(|&s| s > 0) {
                overrides.push((i, size));
            }
            len = i + 1;
        }
        self.len = len;

        if !overrides.is_empty() {
            let dense = self.materialize();
            for (i, size) in overrides {
                dense.sizes[i] = size;
                dense.overridden[i] = true;
            }
            dense.sums = Fenwick::from_sizes(&dense.sizes);
        }
        vdebug!(
            count = self.len,
            default_size = self.default_size,
            uniform = self.dense.is_none(),
            "OffsetIndex::rebuild"
        );
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    /// `true` while every item has the default size.
    pub fn is_uniform(&self) -> bool {
        self.dense.is_none()
    }

    /// Changes the size used by items without an override. Overrides are kept.
    pub fn set_default_size(&mut self, default_size: u32) {
        let default_size = sanitize_size(default_size);
        if default_size == self.default_size {
            return;
        }
        self.default_size = default_size;
        let Some(dense) = self.dense.as_mut() else {
            return;
        };
        if !dense.overridden.iter().any(|&o| o) {
            self.dense = None;
            return;
        }
        for (size, &overridden) in dense.sizes.iter_mut().zip(&dense.overridden) {
            if !overridden {
                *size = default_size;
            }
        }
        dense.sums = Fenwick::from_sizes(&dense.sizes);
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.keys.get(key).copied()
    }

    /// Overrides the size of the item with `key`.
    ///
    /// Returns the change in total size. Unknown ids and zero sizes are ignored and return 0;
    /// a size equal to the current one is still recorded as an override.
    pub fn set_size(&mut self, key: &K, size: u32) -> i64 {
        match self.index_of(key) {
            Some(index) => self.set_size_at(index, size),
            None => 0,
        }
    }

    /// Overrides the size of the item at `index`. See [`OffsetIndex::set_size`].
    pub fn set_size_at(&mut self, index: usize, size: u32) -> i64 {
        if index >= self.len {
            return 0;
        }
        if size == 0 {
            vwarn!(index, "OffsetIndex: ignoring zero size");
            return 0;
        }
        let cur = self.size_at(index);
        if cur == size {
            // Same size, but it is now a measured value and must outlive default changes.
            if !self.is_overridden(index) {
                self.materialize().overridden[index] = true;
            }
            return 0;
        }
        let dense = self.materialize();
        dense.sizes[index] = size;
        dense.overridden[index] = true;
        let delta = size as i64 - cur as i64;
        dense.sums.add(index, delta);
        vtrace!(index, size, delta, "OffsetIndex::set_size_at");
        delta
    }

    /// Drops the override of the item with `key`, reverting it to the default size.
    ///
    /// Returns the change in total size.
    pub fn clear_size(&mut self, key: &K) -> i64 {
        let Some(index) = self.index_of(key) else {
            return 0;
        };
        let default_size = self.default_size;
        let Some(dense) = self.dense.as_mut() else {
            return 0;
        };
        if !dense.overridden[index] {
            return 0;
        }
        dense.overridden[index] = false;
        let cur = dense.sizes[index];
        dense.sizes[index] = default_size;
        let delta = default_size as i64 - cur as i64;
        dense.sums.add(index, delta);
        delta
    }

    pub fn is_overridden(&self, index: usize) -> bool {
        self.dense
            .as_ref()
            .and_then(|d| d.overridden.get(index).copied())
            .unwrap_or(false)
    }

    pub fn size_of(&self, index: usize) -> Option<u32> {
        (index < self.len).then(|| self.size_at(index))
    }

    /// Start offset of `index`, clamped to the last item. 0 for an empty index.
    pub fn offset_of(&self, index: usize) -> u64 {
        if self.len == 0 {
            return 0;
        }
        self.start_of(cmp::min(index, self.len - 1))
    }

    /// End offset (exclusive) of `index`, or `None` when out of bounds.
    pub fn end_of(&self, index: usize) -> Option<u64> {
        let size = self.size_of(index)?;
        Some(self.start_of(index).saturating_add(size as u64))
    }

    /// Index of the item whose span contains `offset`.
    ///
    /// Offsets past the end map to the last item. Returns `None` only when the index is empty.
    pub fn index_at(&self, offset: u64) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let consumed = match &self.dense {
            Some(dense) => dense.sums.lower_bound(offset),
            None => {
                let n = offset / self.default_size as u64;
                usize::try_from(n).unwrap_or(usize::MAX)
            }
        };
        Some(consumed.min(self.len - 1))
    }

    /// Sum of all item sizes.
    pub fn total_size(&self) -> u64 {
        match &self.dense {
            Some(dense) => dense.sums.total(),
            None => (self.len as u64).saturating_mul(self.default_size as u64),
        }
    }

    fn size_at(&self, index: usize) -> u32 {
        match &self.dense {
            Some(dense) => dense.sizes[index],
            None => self.default_size,
        }
    }

    fn start_of(&self, index: usize) -> u64 {
        match &self.dense {
            Some(dense) => dense.sums.prefix_sum(index),
            None => (index as u64).saturating_mul(self.default_size as u64),
        }
    }

    fn materialize(&mut self) -> &mut DenseSizes {
        let len = self.len;
        let size = self.default_size;
        self.dense.get_or_insert_with(|| {
            vdebug!(count = len, "OffsetIndex: materializing per-item sizes");
            DenseSizes {
                sizes: alloc::vec![size; len],
                overridden: alloc::vec![false; len],
                sums: Fenwick::uniform(len, size),
            }
        })
    }
}

fn sanitize_size(size: u32) -> u32 {
    if size == 0 {
        vwarn!("OffsetIndex: zero default size clamped to 1");
    }
    size.max(1)
}
