//! ChainMap: the table, its capacity policy, and the public operations.

use core::fmt;
use core::hash::BuildHasher;
use std::mem;

use crate::chain::Bucket;
use crate::hash::{bucket_index, Djb2};
use crate::iter::{IntoIter, Iter};
use crate::rehash;

/// Fewest bucket slots the table ever holds; shrinking stops here.
pub const MIN_BUCKETS: usize = 32;

/// Load factor above which the bucket array doubles.
pub const GROW_THRESHOLD: f64 = 1.5;

/// Load factor below which the bucket array halves. Kept at a quarter
/// of [`GROW_THRESHOLD`] so a table sitting near one boundary cannot
/// oscillate between capacities under alternating insert and remove.
pub const SHRINK_THRESHOLD: f64 = GROW_THRESHOLD / 4.0;

/// A separate-chaining hash map from string keys to `i64` values that
/// grows and shrinks its bucket array behind a stable identity.
///
/// Capacity only doubles or halves, never below [`MIN_BUCKETS`], and
/// only in response to structural changes: growing is checked after an
/// insert that added an entry, shrinking after a remove that deleted
/// one. Value updates and failed removals check nothing. A resize that
/// cannot allocate is absorbed; the table keeps serving at its old
/// capacity and the next structural change re-checks the thresholds.
pub struct ChainMap<S = Djb2> {
    buckets: Vec<Bucket>,
    len: usize,
    build: S,
}

fn initial_buckets() -> Vec<Bucket> {
    let mut buckets = Vec::with_capacity(MIN_BUCKETS);
    buckets.resize_with(MIN_BUCKETS, Bucket::default);
    buckets
}

impl ChainMap {
    /// Creates an empty map hashing with djb2 at the minimum capacity.
    pub fn new() -> Self {
        Self::with_hasher(Djb2::default())
    }
}

impl Default for ChainMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ChainMap<S> {
    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of bucket slots.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket slot. Derived from the maintained count on
    /// every call, so it is exact; a table running beyond a threshold
    /// after a failed resize is visible here.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Visits every stored pair, bucket order then chain order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buckets, self.len)
    }

    /// Drops every entry and returns the table to the minimum
    /// capacity.
    pub fn clear(&mut self) {
        self.buckets = initial_buckets();
        self.len = 0;
    }
}

impl<S: BuildHasher> ChainMap<S> {
    /// Creates an empty map that hashes with `build`. Digest quality
    /// only affects chain length, never correctness.
    pub fn with_hasher(build: S) -> Self {
        Self {
            buckets: initial_buckets(),
            len: 0,
            build,
        }
    }

    /// Looks up the value for `key`. Never changes the table.
    pub fn get(&self, key: &str) -> Option<i64> {
        let slot = bucket_index(&self.build, key, self.buckets.len());
        self.buckets[slot].find(key).map(|entry| entry.value)
    }

    /// Exclusive access to the value for `key`, for rewriting it where
    /// it sits.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut i64> {
        let slot = bucket_index(&self.build, key, self.buckets.len());
        self.buckets[slot].find_mut(key).map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let slot = bucket_index(&self.build, key, self.buckets.len());
        self.buckets[slot].find(key).is_some()
    }

    /// Inserts or updates `key`, returning the previous value when the
    /// key was already present.
    ///
    /// An update rewrites the value in place: no allocation, no count
    /// change, no capacity check. A fresh key links at its chain head
    /// and may double the bucket array.
    pub fn insert(&mut self, key: &str, value: i64) -> Option<i64> {
        let slot = bucket_index(&self.build, key, self.buckets.len());
        if let Some(entry) = self.buckets[slot].find_mut(key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        self.buckets[slot].push_front(key, value);
        self.len += 1;
        if self.load_factor() > GROW_THRESHOLD {
            // A failed grow is not an error here: the entry is already
            // linked and the next structural change re-checks.
            let doubled = self.buckets.len() * 2;
            let _ = rehash::rebuild(&mut self.buckets, doubled, &self.build);
        }
        None
    }

    /// Removes `key`, returning its value when present, and may halve
    /// the bucket array. Removing an absent key changes nothing.
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let slot = bucket_index(&self.build, key, self.buckets.len());
        let removed = self.buckets[slot].unlink(key)?;
        self.len -= 1;
        if self.load_factor() < SHRINK_THRESHOLD && self.buckets.len() > MIN_BUCKETS {
            let halved = self.buckets.len() / 2;
            let _ = rehash::rebuild(&mut self.buckets, halved, &self.build);
        }
        Some(removed.value)
    }
}

impl<S> fmt::Debug for ChainMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Content equality: same pairs, regardless of capacity or the order
/// they were inserted in.
impl<S: BuildHasher> PartialEq for ChainMap<S> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<S: BuildHasher> Eq for ChainMap<S> {}

impl<'a, S> IntoIterator for &'a ChainMap<S> {
    type Item = (&'a str, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<S> IntoIterator for ChainMap<S> {
    type Item = (String, i64);
    type IntoIter = IntoIter;

    /// Drains the table, yielding owned pairs in iteration order.
    fn into_iter(self) -> IntoIter {
        IntoIter::new(self.buckets, self.len)
    }
}
