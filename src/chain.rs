//! Chain storage: owned entry nodes and the operations on one bucket.

/// One stored pair plus its chain link. The key is owned here and
/// immutable for the life of the entry; the value may be rewritten in
/// place. `next` is exclusively owned, so chains are acyclic by
/// construction.
pub(crate) struct Entry {
    pub(crate) key: Box<str>,
    pub(crate) value: i64,
    pub(crate) next: Option<Box<Entry>>,
}

impl Entry {
    fn new(key: &str, value: i64) -> Box<Self> {
        Box::new(Entry {
            key: Box::from(key),
            value,
            next: None,
        })
    }
}

/// Head of one collision chain. The newest entry sits at the head,
/// which is an artifact of head insertion, not an ordering guarantee.
#[derive(Default)]
pub(crate) struct Bucket {
    head: Option<Box<Entry>>,
}

impl Bucket {
    /// Scans the chain for an exact key match.
    pub(crate) fn find(&self, key: &str) -> Option<&Entry> {
        let mut cur = self.head.as_deref();
        while let Some(entry) = cur {
            if &*entry.key == key {
                return Some(entry);
            }
            cur = entry.next.as_deref();
        }
        None
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let mut cur = self.head.as_deref_mut();
        while let Some(entry) = cur {
            if &*entry.key == key {
                return Some(entry);
            }
            cur = entry.next.as_deref_mut();
        }
        None
    }

    /// Allocates a new entry and links it at the head. The key is
    /// copied here and nowhere else.
    pub(crate) fn push_front(&mut self, key: &str, value: i64) {
        self.relink_front(Entry::new(key, value));
    }

    /// Links an already-allocated node at the head. The rebuild drain
    /// relocates entries through this, so insertion and relocation
    /// cannot disagree about chain shape.
    pub(crate) fn relink_front(&mut self, mut entry: Box<Entry>) {
        entry.next = self.head.take();
        self.head = Some(entry);
    }

    /// Splices the entry for `key` out of the chain and returns it
    /// with its link cleared. `None` when the key is absent.
    pub(crate) fn unlink(&mut self, key: &str) -> Option<Box<Entry>> {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return None,
                Some(entry) if &*entry.key == key => {
                    let mut removed = cursor.take()?;
                    *cursor = removed.next.take();
                    return Some(removed);
                }
                Some(entry) => cursor = &mut entry.next,
            }
        }
    }

    /// Detaches the whole chain, leaving the bucket empty.
    pub(crate) fn take_head(&mut self) -> Option<Box<Entry>> {
        self.head.take()
    }

    pub(crate) fn head(&self) -> Option<&Entry> {
        self.head.as_deref()
    }
}

impl Drop for Bucket {
    // Long chains must not drop by recursion through the boxes.
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

/// Drops a detached chain iteratively, one node per step.
pub(crate) fn drop_chain(mut chain: Option<Box<Entry>>) {
    while let Some(mut entry) = chain {
        chain = entry.next.take();
    }
}
