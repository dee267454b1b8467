//! djb2 hashing: the default hasher and the bucket indexing rule.

use core::hash::{BuildHasher, BuildHasherDefault, Hasher};

/// Initial state of the djb2 fold.
const SEED: u64 = 5381;

/// The classic djb2 string hash behind the standard [`Hasher`] seam:
/// state starts at 5381 and each byte folds in as `h * 33 + byte`,
/// wrapping on overflow.
///
/// Total over byte strings; writing no bytes leaves the seed, so the
/// empty key hashes like any other. Collisions are expected and
/// resolved by the chains, not here.
#[derive(Clone, Debug)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { state: SEED }
    }
}

impl Hasher for Djb2Hasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            // h * 33 + byte, in the shift-add form.
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(u64::from(byte));
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Zero-sized builder producing fresh [`Djb2Hasher`]s; the map's
/// default hash policy. Stateless, so every map instance hashes a
/// given key identically.
pub type Djb2 = BuildHasherDefault<Djb2Hasher>;

/// Maps a key to its bucket slot: digest modulo bucket count.
///
/// Feeds the hasher the raw key bytes rather than going through
/// `Hash for str` (which appends a terminator byte), so the default
/// builder reproduces the published djb2 digests and an external
/// hasher sees exactly the key.
pub(crate) fn bucket_index<S: BuildHasher>(build: &S, key: &str, bucket_count: usize) -> usize {
    let mut hasher = build.build_hasher();
    hasher.write(key.as_bytes());
    (hasher.finish() % bucket_count as u64) as usize
}
