//! Randomized churn against a `Vec` reference, for both sequence variants.

use nexus_sequence::{ArraySequence, DEFAULT_CAPACITY, Error, LinkedSequence, Sequence};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn stress<S: Sequence + Default>(seed: u64) -> S {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut seq = S::default();
    let mut reference: Vec<i32> = Vec::new();

    for _ in 0..5_000 {
        let op = rng.random_range(0..100);
        let value = rng.random_range(-50..50);
        // Occasionally one past the valid range
        let index = rng.random_range(0..=reference.len() + 1);

        if op < 40 {
            let result = seq.insert(index, Some(value));
            if index <= reference.len() {
                assert_eq!(result, Ok(()));
                reference.insert(index, value);
            } else {
                assert_eq!(
                    result,
                    Err(Error::IndexOutOfRange {
                        index,
                        len: reference.len()
                    })
                );
            }
        } else if op < 70 {
            let result = seq.remove_at(index);
            if index < reference.len() {
                assert_eq!(result, Ok(reference.remove(index)));
            } else {
                assert!(result.is_err());
            }
        } else if op < 80 {
            let result = seq.set(index, Some(value));
            if index < reference.len() {
                assert_eq!(result, Ok(()));
                reference[index] = value;
            } else {
                assert!(result.is_err());
            }
        } else if op < 95 {
            let expected = reference.iter().position(|&v| v == value);
            assert_eq!(seq.index_of(Some(value)), Ok(expected));
            assert_eq!(seq.contains(Some(value)), Ok(expected.is_some()));
        } else if op < 99 {
            assert_eq!(seq.get(index).ok(), reference.get(index).copied());
        } else {
            seq.clear();
            reference.clear();
        }

        assert_eq!(seq.len(), reference.len());
        assert_eq!(seq.is_empty(), reference.is_empty());
    }

    for (i, &expected) in reference.iter().enumerate() {
        assert_eq!(seq.get(i), Ok(expected));
    }
    seq
}

#[test]
fn array_random_operations() {
    let seq: ArraySequence = stress(12345);
    // Capacity only ever doubles from the default
    let cap = seq.capacity();
    assert!(cap >= seq.len());
    assert!((cap / DEFAULT_CAPACITY).is_power_of_two());
    assert_eq!(cap % DEFAULT_CAPACITY, 0);
}

#[test]
fn linked_random_operations() {
    let _: LinkedSequence = stress(99999);
}

#[test]
fn variants_agree_on_the_same_script() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut array = ArraySequence::new();
    let mut linked = LinkedSequence::new();

    for _ in 0..2_000 {
        let index = rng.random_range(0..=array.len());
        let value = rng.random_range(0..1_000);
        if rng.random_bool(0.7) {
            array.insert(index, Some(value)).unwrap();
            linked.insert(index, Some(value)).unwrap();
        } else if index < array.len() {
            assert_eq!(array.remove_at(index), linked.remove_at(index));
        }
    }

    assert!(array.cursor().eq(linked.cursor()));
}
