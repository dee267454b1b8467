//! Storage rebuild: relocates every entry into a bucket array of a new
//! size, all or nothing.

use core::hash::BuildHasher;
use std::collections::TryReserveError;
use std::mem;

use crate::chain::Bucket;
use crate::hash::bucket_index;

/// Replaces `buckets` with a fresh array of `new_count` slots and
/// relinks every entry into the slot its digest selects at the new
/// size.
///
/// The fresh array is the only allocation and it happens before
/// anything moves; on `Err` the old storage has not been touched and
/// every entry still lives where it did. Nodes are relocated, never
/// copied, so once the swap happens the drain cannot fail partway.
pub(crate) fn rebuild<S: BuildHasher>(
    buckets: &mut Vec<Bucket>,
    new_count: usize,
    build: &S,
) -> Result<(), TryReserveError> {
    let mut fresh: Vec<Bucket> = Vec::new();
    fresh.try_reserve_exact(new_count)?;
    fresh.resize_with(new_count, Bucket::default);

    let old = mem::replace(buckets, fresh);
    for mut bucket in old {
        let mut chain = bucket.take_head();
        while let Some(mut entry) = chain {
            chain = entry.next.take();
            let slot = bucket_index(build, &entry.key, new_count);
            buckets[slot].relink_front(entry);
        }
    }
    Ok(())
}
