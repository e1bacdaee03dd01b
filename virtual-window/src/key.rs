#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Item id → current index.
#[cfg(feature = "std")]
pub(crate) type KeyIndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap<K> = BTreeMap<K, usize>;

/// Bound for item and column ids.
///
/// With `std` ids are hashed; without it they are ordered. Strings and integers both work.
#[cfg(feature = "std")]
pub trait WindowKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> WindowKey for K {}

#[cfg(not(feature = "std"))]
pub trait WindowKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> WindowKey for K {}
