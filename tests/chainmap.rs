// ChainMap test suite over the public API.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Last write wins: one entry per key, updates rewrite in place.
// - Absence: get/remove of a missing key report None and change
//   nothing.
// - Capacity: the bucket count follows the entry count alone, doubles
//   and halves with strict threshold comparisons, and never drops
//   below MIN_BUCKETS.
// - Iteration: every stored pair is yielded exactly once no matter how
//   the table was resized on the way.
use chainmap::{ChainMap, MIN_BUCKETS};
use std::collections::HashMap;

fn key(i: i64) -> String {
    format!("{}", i)
}

// Test: the basic flow on three keys.
// Assumes: distinct keys occupy distinct entries.
// Verifies: every key reads back its own value; removal hits only its
// key; absent lookups stay None.
#[test]
fn set_get_remove_three_keys() {
    let mut m = ChainMap::new();
    assert_eq!(m.insert("foo", 413), None);
    assert_eq!(m.insert("bar", 612), None);
    assert_eq!(m.insert("baz", 1025), None);
    assert_eq!(m.len(), 3);

    assert_eq!(m.get("foo"), Some(413));
    assert_eq!(m.get("bar"), Some(612));
    assert_eq!(m.get("baz"), Some(1025));
    assert_eq!(m.get("qux"), None);

    assert_eq!(m.remove("bar"), Some(612));
    assert_eq!(m.get("bar"), None);
    assert_eq!(m.get("foo"), Some(413));
    assert_eq!(m.get("baz"), Some(1025));
    assert_eq!(m.len(), 2);
}

// Test: last write wins.
// Assumes: updates are not structural.
// Verifies: repeated sets keep one entry; the previous value comes
// back; count and capacity never move.
#[test]
fn update_rewrites_in_place() {
    let mut m = ChainMap::new();
    assert_eq!(m.insert("k", 1), None);
    assert_eq!(m.insert("k", 2), Some(1));
    assert_eq!(m.insert("k", 3), Some(2));
    assert_eq!(m.get("k"), Some(3));
    assert_eq!(m.len(), 1);
    assert_eq!(m.bucket_count(), MIN_BUCKETS);
}

// Test: removal is idempotent.
// Verifies: the second and later removes of the same key are no-ops
// with None, and the count never goes below zero.
#[test]
fn remove_absent_is_a_noop() {
    let mut m = ChainMap::new();
    assert_eq!(m.remove("ghost"), None);
    m.insert("k", 9);
    assert_eq!(m.remove("k"), Some(9));
    assert_eq!(m.remove("k"), None);
    assert_eq!(m.remove("k"), None);
    assert_eq!(m.len(), 0);
    assert!(m.is_empty());
}

// Test: growth under load.
// Assumes: 100 entries push the table through two doublings.
// Verifies: every key keeps its value across the rehashes; the final
// capacity is 128.
#[test]
fn hundred_keys_survive_growth() {
    let mut m = ChainMap::new();
    for i in 0..100 {
        m.insert(&key(i), i);
    }
    assert_eq!(m.len(), 100);
    assert_eq!(m.bucket_count(), 128);
    for i in 0..100 {
        assert_eq!(m.get(&key(i)), Some(i), "key {} lost in growth", i);
    }
}

// Test: shrink under removal.
// Assumes: removing 90 of 100 entries crosses two halvings.
// Verifies: survivors keep their values, removed keys are gone, and
// the capacity is back at the floor.
#[test]
fn survivors_outlive_shrink() {
    let mut m = ChainMap::new();
    for i in 0..100 {
        m.insert(&key(i), i);
    }
    for i in 0..100 {
        if i % 10 != 5 {
            assert_eq!(m.remove(&key(i)), Some(i));
        }
    }
    assert_eq!(m.len(), 10);
    assert_eq!(m.bucket_count(), MIN_BUCKETS);
    for i in 0..100 {
        if i % 10 == 5 {
            assert_eq!(m.get(&key(i)), Some(i), "survivor {} lost in shrink", i);
        } else {
            assert_eq!(m.get(&key(i)), None, "key {} survived its removal", i);
        }
    }
}

// Test: the capacity trajectory is a function of the entry count.
// Assumes: thresholds compare strictly; growth doubles, shrink halves,
// one step per structural change.
// Verifies: the exact transition points both ways, including the two
// boundary counts that sit exactly on a threshold and stay put.
#[test]
fn capacity_trajectory_is_deterministic() {
    let mut m = ChainMap::new();
    for i in 0..48 {
        m.insert(&key(i), i);
    }
    // 48 entries in 32 buckets is exactly the grow threshold: stay.
    assert_eq!(m.bucket_count(), 32);
    m.insert(&key(48), 48);
    assert_eq!(m.bucket_count(), 64);

    for i in 49..96 {
        m.insert(&key(i), i);
    }
    assert_eq!(m.bucket_count(), 64);
    m.insert(&key(96), 96);
    assert_eq!(m.bucket_count(), 128);

    for i in (48..=96).rev() {
        m.remove(&key(i));
    }
    // 48 entries in 128 buckets is exactly the shrink threshold: stay.
    assert_eq!(m.len(), 48);
    assert_eq!(m.bucket_count(), 128);
    m.remove(&key(47));
    assert_eq!(m.bucket_count(), 64);

    for i in (24..47).rev() {
        m.remove(&key(i));
    }
    assert_eq!(m.len(), 24);
    assert_eq!(m.bucket_count(), 64);
    m.remove(&key(23));
    assert_eq!(m.bucket_count(), 32);
}

// Test: hysteresis at a just-grown boundary.
// Assumes: the shrink threshold sits at a quarter of the grow
// threshold.
// Verifies: alternating remove/insert right at the boundary never
// changes the capacity again.
#[test]
fn alternation_at_the_boundary_does_not_oscillate() {
    let mut m = ChainMap::new();
    for i in 0..49 {
        m.insert(&key(i), i);
    }
    assert_eq!(m.bucket_count(), 64);
    for _ in 0..100 {
        m.remove(&key(48));
        m.insert(&key(48), 48);
        assert_eq!(m.bucket_count(), 64);
    }
    assert_eq!(m.len(), 49);
}

// Test: the capacity floor.
// Verifies: the bucket count starts at MIN_BUCKETS and no amount of
// removal takes it lower.
#[test]
fn capacity_never_drops_below_the_floor() {
    let mut m = ChainMap::new();
    assert_eq!(m.bucket_count(), MIN_BUCKETS);
    for i in 0..100 {
        m.insert(&key(i), i);
    }
    for i in 0..100 {
        m.remove(&key(i));
        assert!(m.bucket_count() >= MIN_BUCKETS);
    }
    assert!(m.is_empty());
    assert_eq!(m.bucket_count(), MIN_BUCKETS);
}

// Test: iteration completeness after a resize history.
// Assumes: iteration order is unspecified.
// Verifies: each live pair appears exactly once with its current
// value; nothing removed reappears.
#[test]
fn iteration_sees_every_pair_once_after_resizes() {
    let mut m = ChainMap::new();
    for i in 0..100 {
        m.insert(&key(i), i);
    }
    for i in 0..60 {
        m.remove(&key(i));
    }
    assert_eq!(m.len(), 40);

    let mut seen = HashMap::new();
    for (k, v) in &m {
        assert!(
            seen.insert(k.to_string(), v).is_none(),
            "key {} yielded twice",
            k
        );
    }
    assert_eq!(seen.len(), m.len());
    for i in 60..100 {
        assert_eq!(seen.get(&key(i)).copied(), Some(i));
    }
}

// Test: the load factor is an exact derived quantity.
// Assumes: power-of-two bucket counts make the division exact.
// Verifies: the observable value matches entry count over bucket count
// at every probe.
#[test]
fn load_factor_tracks_the_count_exactly() {
    let mut m = ChainMap::new();
    assert_eq!(m.load_factor(), 0.0);
    for i in 0..48 {
        m.insert(&key(i), i);
    }
    assert_eq!(m.load_factor(), 1.5);
    m.insert(&key(48), 48);
    assert_eq!(m.load_factor(), 49.0 / 64.0);
    m.remove(&key(48));
    assert_eq!(m.load_factor(), 0.75);
}

// Test: unusual keys are ordinary keys.
// Assumes: keys are arbitrary UTF-8 with no terminator handling.
// Verifies: the empty key, keys with interior NULs, and long keys all
// store, read, and remove like any other.
#[test]
fn unusual_keys_behave_like_any_other() {
    let mut m = ChainMap::new();
    let long = "x".repeat(4096);
    m.insert("", 1);
    m.insert("\0", 2);
    m.insert("with\0nul", 3);
    m.insert(&long, 4);

    assert_eq!(m.get(""), Some(1));
    assert_eq!(m.get("\0"), Some(2));
    assert_eq!(m.get("with\0nul"), Some(3));
    assert_eq!(m.get(&long), Some(4));
    assert_eq!(m.len(), 4);

    assert_eq!(m.remove(""), Some(1));
    assert_eq!(m.get(""), None);
    assert_eq!(m.get("\0"), Some(2));
}

// Test: values span the whole i64 range.
#[test]
fn extreme_values_round_trip() {
    let mut m = ChainMap::new();
    m.insert("min", i64::MIN);
    m.insert("max", i64::MAX);
    m.insert("neg", -1);
    m.insert("zero", 0);
    assert_eq!(m.get("min"), Some(i64::MIN));
    assert_eq!(m.get("max"), Some(i64::MAX));
    assert_eq!(m.get("neg"), Some(-1));
    assert_eq!(m.get("zero"), Some(0));
}

// Test: content equality.
// Assumes: equality compares the stored pairs only.
// Verifies: insertion order and resize history are invisible to ==.
#[test]
fn equality_ignores_order_and_capacity_history() {
    let mut a = ChainMap::new();
    let mut b = ChainMap::new();
    for i in 0..60 {
        a.insert(&key(i), i);
    }
    for i in (0..60).rev() {
        b.insert(&key(i), i);
    }
    assert_eq!(a, b);

    // Same content reached through a grow-then-shrink detour, leaving
    // a different capacity behind.
    let mut c = ChainMap::new();
    for i in 0..97 {
        c.insert(&key(i), i);
    }
    for i in 60..97 {
        c.remove(&key(i));
    }
    assert_ne!(a.bucket_count(), c.bucket_count());
    assert_eq!(a, c);

    c.insert("extra", 0);
    assert_ne!(a, c);
}

// Test: draining the map by value.
// Verifies: into_iter yields every pair with an owned key exactly
// once.
#[test]
fn owned_iteration_drains_everything() {
    let mut m = ChainMap::new();
    for i in 0..75 {
        m.insert(&key(i), i);
    }
    let drained: HashMap<String, i64> = m.into_iter().collect();
    assert_eq!(drained.len(), 75);
    for i in 0..75 {
        assert_eq!(drained.get(&key(i)).copied(), Some(i));
    }
}

// ChainMap owns its storage outright, so the std auto traits and the
// derived surface all apply.
static_assertions::assert_impl_all!(
    ChainMap: Send,
    Sync,
    Unpin,
    Default,
    PartialEq,
    Eq,
    core::fmt::Debug
);
