use proptest::prelude::*;
use simplevec::SimpleVector;
use simplevec_testkit::data_gen::{VecOp, random_ops, random_values};
use simplevec_testkit::tracked::{LiveScope, Tracked};

/// Applies `op` to both the vector under test and a `Vec` model, reducing raw
/// positions so the op is always valid, and checks the capacity the growth
/// rule predicts.
fn apply(v: &mut SimpleVector<i64>, model: &mut Vec<i64>, op: VecOp) {
    let capacity_before = v.capacity();
    match op {
        VecOp::PushBack(x) => {
            v.push_back(x);
            model.push(x);
            if capacity_before == model.len() - 1 {
                assert_eq!(v.capacity(), model.len().max(capacity_before * 2));
            } else {
                assert_eq!(v.capacity(), capacity_before);
            }
        }
        VecOp::PopBack => {
            if !model.is_empty() {
                v.pop_back();
                model.pop();
                assert_eq!(v.capacity(), capacity_before);
            }
        }
        VecOp::Insert(pos, x) => {
            let index = pos % (model.len() + 1);
            assert_eq!(*v.insert(index, x), x);
            model.insert(index, x);
        }
        VecOp::Erase(pos) => {
            if !model.is_empty() {
                let index = pos % model.len();
                assert_eq!(v.erase(index), index);
                model.remove(index);
                assert_eq!(v.capacity(), capacity_before);
            }
        }
        VecOp::Resize(n) => {
            v.resize(n);
            model.resize(n, 0);
            if n > capacity_before {
                assert_eq!(v.capacity(), n.max(capacity_before * 2));
            } else {
                assert_eq!(v.capacity(), capacity_before);
            }
        }
        VecOp::Reserve(n) => {
            v.reserve(n);
            assert_eq!(v.capacity(), n.max(capacity_before));
        }
        VecOp::Clear => {
            v.clear();
            model.clear();
            assert_eq!(v.capacity(), capacity_before);
        }
    }
}

#[test]
fn test_random_ops_match_std_vec() {
    for seed in [1u64, 297135646, 42, 7777] {
        let mut v = SimpleVector::new();
        let mut model = Vec::new();
        for op in random_ops(seed, 2000, 64) {
            apply(&mut v, &mut model, op);
            assert_eq!(v.as_slice(), model.as_slice(), "seed {seed}, op {op:?}");
            assert!(v.len() <= v.capacity());
        }
    }
}

#[test]
fn test_random_values_roundtrip_through_push() {
    let values = random_values(5, 1000);
    let mut v = SimpleVector::new();
    for &x in &values {
        v.push_back(x);
    }
    assert_eq!(v.capacity(), 1024);
    assert_eq!(Vec::from(v), values);
}

proptest! {
    #[test]
    fn with_size_is_default_filled(n in 0usize..512) {
        let v = SimpleVector::<u32>::with_size(n);
        prop_assert_eq!(v.len(), n);
        prop_assert_eq!(v.capacity(), n);
        prop_assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn from_elem_fills_value(n in 0usize..512, value in any::<i32>()) {
        let v = SimpleVector::from_elem(n, &value);
        prop_assert_eq!(v.len(), n);
        prop_assert!(v.iter().all(|&x| x == value));
    }

    #[test]
    fn push_back_capacity_is_power_of_two(values in proptest::collection::vec(any::<i16>(), 1..300)) {
        let mut v = SimpleVector::new();
        for &x in &values {
            v.push_back(x);
        }
        prop_assert_eq!(v.len(), values.len());
        prop_assert_eq!(v.capacity(), values.len().next_power_of_two());
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn insert_then_erase_restores(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        pos in any::<usize>(),
        value in any::<i32>(),
    ) {
        let original = SimpleVector::from(values);
        let mut v = original.clone();
        let index = pos % (v.len() + 1);
        v.insert(index, value);
        prop_assert_eq!(v[index], value);
        prop_assert_eq!(v.len(), original.len() + 1);
        v.erase(index);
        prop_assert_eq!(&v, &original);
    }

    #[test]
    fn clone_is_isolated(
        values in proptest::collection::vec(any::<u8>(), 1..64),
        extra in any::<u8>(),
    ) {
        let original = SimpleVector::from(values.clone());
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        copy[0] = copy[0].wrapping_add(1);
        copy.push_back(extra);
        prop_assert_eq!(original.as_slice(), values.as_slice());
    }

    #[test]
    fn take_leaves_source_empty(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let mut original = SimpleVector::from(values.clone());
        let moved = original.take();
        prop_assert_eq!(moved.as_slice(), values.as_slice());
        prop_assert_eq!(original.len(), 0);
        prop_assert_eq!(original.capacity(), 0);
    }

    #[test]
    fn resize_follows_growth_rule(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        new_size in 0usize..200,
    ) {
        let mut v = SimpleVector::from(values.clone());
        let capacity = v.capacity();
        v.resize(new_size);
        prop_assert_eq!(v.len(), new_size);
        let kept = new_size.min(values.len());
        prop_assert_eq!(&v.as_slice()[..kept], &values[..kept]);
        prop_assert!(v.as_slice()[kept..].iter().all(|&x| x == 0));
        if new_size > capacity {
            prop_assert_eq!(v.capacity(), new_size.max(capacity * 2));
        } else {
            prop_assert_eq!(v.capacity(), capacity);
        }
    }

    #[test]
    fn at_matches_bounds(
        values in proptest::collection::vec(any::<i32>(), 0..32),
        index in 0usize..64,
    ) {
        let v = SimpleVector::from(values.clone());
        match values.get(index) {
            Some(expected) => prop_assert_eq!(v.at(index), Ok(expected)),
            None => prop_assert!(v.at(index).is_err()),
        }
    }

    #[test]
    fn ordering_matches_slices(
        a in proptest::collection::vec(0u8..4, 0..6),
        b in proptest::collection::vec(0u8..4, 0..6),
    ) {
        let va = SimpleVector::from(a.clone());
        let vb = SimpleVector::from(b.clone());
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
    }

    #[test]
    fn tracked_elements_dropped_once(seed in any::<u64>()) {
        let scope = LiveScope::new();
        {
            let mut v = SimpleVector::new();
            for op in random_ops(seed, 200, 32) {
                match op {
                    VecOp::PushBack(x) => v.push_back(Tracked::new(x)),
                    VecOp::PopBack if !v.is_empty() => v.pop_back(),
                    VecOp::Insert(pos, x) => {
                        let index = pos % (v.len() + 1);
                        v.insert(index, Tracked::new(x));
                    }
                    VecOp::Erase(pos) if !v.is_empty() => {
                        let index = pos % v.len();
                        v.erase(index);
                    }
                    VecOp::Resize(n) => v.resize(n),
                    VecOp::Reserve(n) => v.reserve(n),
                    VecOp::Clear => v.clear(),
                    _ => {}
                }
            }
            let copy = v.clone();
            prop_assert_eq!(&copy, &v);
        }
        prop_assert_eq!(scope.outstanding(), 0);
    }
}
