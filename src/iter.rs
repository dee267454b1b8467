//! Iteration: the borrowing cursor and the consuming drain.
//!
//! Both walk buckets in index order and each chain from its head, the
//! same order the rebuild drain uses. The order is stable while the
//! table is unmodified; it is neither insertion nor sorted order.

use core::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::chain::{drop_chain, Bucket, Entry};

/// Borrowing iterator over a map's pairs. Holding one keeps the map
/// borrowed, so the table cannot be resized or mutated underneath it.
#[derive(Clone)]
pub struct Iter<'a> {
    buckets: slice::Iter<'a, Bucket>,
    chain: Option<&'a Entry>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(buckets: &'a [Bucket], remaining: usize) -> Self {
        Self {
            buckets: buckets.iter(),
            chain: None,
            remaining,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                self.remaining -= 1;
                return Some((&*entry.key, entry.value));
            }
            self.chain = self.buckets.next()?.head();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Consuming iterator: drains the table and yields owned pairs.
pub struct IntoIter {
    buckets: vec::IntoIter<Bucket>,
    chain: Option<Box<Entry>>,
    remaining: usize,
}

impl IntoIter {
    pub(crate) fn new(buckets: Vec<Bucket>, remaining: usize) -> Self {
        Self {
            buckets: buckets.into_iter(),
            chain: None,
            remaining,
        }
    }
}

impl Iterator for IntoIter {
    type Item = (String, i64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut entry) = self.chain.take() {
                self.chain = entry.next.take();
                self.remaining -= 1;
                let Entry { key, value, .. } = *entry;
                return Some((key.into_string(), value));
            }
            self.chain = self.buckets.next()?.take_head();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl Drop for IntoIter {
    // The held chain is detached from any bucket, so it needs the same
    // iterative teardown buckets get.
    fn drop(&mut self) {
        drop_chain(self.chain.take());
    }
}
