#![cfg(test)]

// Property tests for ChainMap kept inside the crate so they can lean on
// the capacity accessors while staying on the public surface.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hasher};

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::map::{ChainMap, GROW_THRESHOLD, MIN_BUCKETS, SHRINK_THRESHOLD};

// Pool-indexed operations to improve shrinking: indices shrink to
// earlier keys, the pool shrinks in length, and op lists shrink in
// length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i64),
    Remove(usize),
    Get(usize),
    Mutate(usize, i64),
    Iterate,
    Clear,
}

// Pools are sized well past the first grow boundary so random runs
// cross at least one doubling; insert-heavy weights push the entry
// count up, removals pull it back through the shrink boundary.
fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{1,6}", 1..=96).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            20 => (idx.clone(), any::<i64>()).prop_map(|(i, v)| Op::Insert(i, v)),
            6 => idx.clone().prop_map(Op::Remove),
            5 => idx.clone().prop_map(Op::Get),
            3 => (idx.clone(), any::<i64>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            2 => Just(Op::Iterate),
            1 => Just(Op::Clear),
        ];
        proptest::collection::vec(op, 1..300).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Post-conditions that must hold between any two operations:
// - size parity with the model;
// - the bucket count is a power of two and never below the floor;
// - the load factor sits inside the hysteresis band, except that a
//   table at the floor may run arbitrarily empty.
fn check_invariants<S: BuildHasher>(
    sut: &ChainMap<S>,
    model: &HashMap<String, i64>,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(sut.len(), model.len());
    prop_assert_eq!(sut.is_empty(), model.is_empty());
    let count = sut.bucket_count();
    prop_assert!(count >= MIN_BUCKETS);
    prop_assert!(count.is_power_of_two());
    prop_assert!(sut.load_factor() <= GROW_THRESHOLD);
    prop_assert!(count == MIN_BUCKETS || sut.load_factor() >= SHRINK_THRESHOLD);
    Ok(())
}

fn run_scenario<S: BuildHasher>(
    pool: &[String],
    ops: Vec<Op>,
    mut sut: ChainMap<S>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i64> = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = &pool[i];
                prop_assert_eq!(sut.insert(k, v), model.insert(k.clone(), v));
            }
            Op::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k.as_str()));
            }
            Op::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k.as_str()).copied());
                prop_assert_eq!(sut.contains_key(k), model.contains_key(k.as_str()));
            }
            Op::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k.as_str())) {
                    (Some(value), Some(model_value)) => {
                        *value = value.wrapping_add(d);
                        *model_value = model_value.wrapping_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "presence parity broken for {:?}", k),
                }
            }
            Op::Iterate => {
                prop_assert_eq!(sut.iter().count(), sut.len());
                let got: BTreeMap<String, i64> =
                    sut.iter().map(|(k, v)| (k.to_string(), v)).collect();
                let want: BTreeMap<String, i64> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(got, want);
            }
            Op::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.bucket_count(), MIN_BUCKETS);
            }
        }

        check_invariants(&sut, &model)?;
    }

    // Final sweep: every surviving pair reads back, then drains out.
    for (k, v) in &model {
        prop_assert_eq!(sut.get(k), Some(*v));
    }
    for k in model.keys() {
        prop_assert!(sut.remove(k).is_some());
    }
    prop_assert!(sut.is_empty());
    prop_assert_eq!(sut.bucket_count(), MIN_BUCKETS);
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap
// under the default hasher, with the capacity invariants checked after
// every operation.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(&pool, ops, ChainMap::new())?;
    }
}

// Collision variant using a constant hasher: every entry shares one
// bucket, so chain scans and unlinks run at worst case while the
// len-driven capacity policy behaves exactly as before.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(&pool, ops, ChainMap::with_hasher(ConstBuildHasher))?;
    }
}
