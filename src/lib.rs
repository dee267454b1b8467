//! chainmap: a single-threaded, resizable separate-chaining hash map
//! from string keys to 64-bit signed integer values.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the classic chained hash table honest about capacity.
//!   The bucket array doubles and halves behind a stable identity, and
//!   a resize that cannot allocate never damages the table.
//! - Layers:
//!   - chain::Bucket: one collision chain of exclusively owned entries
//!     (`Box<Entry>` links); all link and scan work lives here, and
//!     nothing in this layer knows about capacity.
//!   - rehash::rebuild: swaps in a bucket array of a new size and
//!     relocates every node. Allocating the array is the first and only
//!     fallible step, so failure leaves the old storage untouched.
//!   - ChainMap<S>: the policy layer. It owns the buckets and the entry
//!     count, and it decides from the thresholds when storage gets
//!     rebuilt.
//!
//! Constraints
//! - Single-threaded mutation through `&mut self`. There is no interior
//!   mutability, so unsynchronized concurrent mutation is
//!   unrepresentable in safe code and the map stays `Send + Sync`.
//! - The entry count is maintained incrementally (one up per structural
//!   insert, one down per structural removal); the load factor is
//!   always derived from it, never recomputed by scanning.
//! - Capacity moves only by doubling or halving and never drops below
//!   `MIN_BUCKETS`, so the bucket count stays a power of two.
//! - Growing is checked only after a structural insert, shrinking only
//!   after a structural removal. Value updates check nothing, which is
//!   what keeps an update free of side effects on capacity.
//! - The shrink threshold sits at a quarter of the grow threshold; the
//!   gap is what prevents capacity oscillation at a boundary.
//!
//! Hashing
//! - djb2 is the default, packaged as `BuildHasherDefault<Djb2Hasher>`.
//!   The map is generic over `S: BuildHasher` and always feeds hashers
//!   the raw key bytes, so an external hasher sees exactly the key and
//!   the default reproduces the classic djb2 digests.
//! - Digest quality affects chain length, never correctness. The
//!   property tests run a constant hasher to hold that line.
//!
//! Failure policy
//! - Inserting a new entry allocates its node; exhaustion there routes
//!   through the global allocation handler like any other Rust
//!   collection.
//! - Rebuilding storage is recoverable: the triggering insert or remove
//!   has already completed against the old capacity, the table keeps
//!   operating, and later structural changes re-check the thresholds.
//!
//! Iteration
//! - `iter` is a lazy cursor in bucket order then chain order, and the
//!   borrow it holds rules out mutation for as long as it lives.
//!   `IntoIterator` by value drains the table without copying keys.
//!
//! Notes and non-goals
//! - No hash caching per entry: rehashing recomputes digests, keeping
//!   nodes at three words plus the key.
//! - No unsafe anywhere; entries form an ownership tree (`Vec<Bucket>`
//!   holding `Box<Entry>` chains).
//! - Persistence and cross-thread mutation are out of scope.

mod chain;
mod hash;
mod iter;
mod map;
mod map_proptest;
mod rehash;
#[cfg(feature = "serde")]
mod serde;

// Public surface
pub use hash::{Djb2, Djb2Hasher};
pub use iter::{IntoIter, Iter};
pub use map::{ChainMap, GROW_THRESHOLD, MIN_BUCKETS, SHRINK_THRESHOLD};
