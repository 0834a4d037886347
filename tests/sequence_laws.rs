//! Sequence behaviour checked against a `Vec` model under random edits.

use algs::{AlgsError, List, Queue, Sequence, Stack};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

fn assert_matches_model(seq: &Sequence<u32>, model: &[u32]) {
    assert_eq!(seq.len(), model.len());
    assert_eq!(seq.iter().copied().collect::<Vec<_>>(), model);

    // walking back from the tail visits the same values in reverse
    let mut backward: Vec<_> = seq.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(backward, model);
}

#[test]
fn random_edits_track_vec_model() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut seq = Sequence::new();
        let mut model: Vec<u32> = Vec::new();

        for step in 0..400u32 {
            let len = model.len();
            match rng.gen_range(0..6) {
                0 => {
                    seq.append(step);
                    model.push(step);
                }
                1 => {
                    let i = rng.gen_range(0..=len);
                    seq.insert(i, step).unwrap();
                    model.insert(i, step);
                }
                2 if len > 0 => {
                    let i = rng.gen_range(0..len);
                    assert_eq!(seq.remove(i).unwrap(), model.remove(i));
                }
                3 if len > 0 => {
                    let i = rng.gen_range(0..len);
                    assert_eq!(seq.set(i, step).unwrap(), model[i]);
                    model[i] = step;
                }
                4 => {
                    assert_eq!(seq.pop().ok(), model.pop());
                }
                _ => {
                    let expected = if model.is_empty() {
                        None
                    } else {
                        Some(model.remove(0))
                    };
                    assert_eq!(seq.dequeue().ok(), expected);
                }
            }
            assert_matches_model(&seq, &model);
        }
    }
}

#[test]
fn size_after_n_appends() {
    let mut seq = Sequence::new();
    for n in 1..=100 {
        seq.append(n);
        assert_eq!(seq.len(), n);
    }
}

#[test]
fn insert_then_remove_round_trips() {
    let base: Sequence<u32> = (0..10).collect();
    for i in 0..=base.len() {
        let mut seq = base.clone();
        seq.insert(i, 99).unwrap();
        assert_eq!(seq.get(i), Ok(&99));
        assert_eq!(seq.remove(i), Ok(99));
        assert_eq!(seq, base);
    }
}

#[test]
fn set_changes_only_its_index() {
    let base: Sequence<u32> = (0..10).collect();
    for i in 0..base.len() {
        let mut seq = base.clone();
        seq.set(i, 1000).unwrap();
        for j in 0..seq.len() {
            let expected = if i == j { 1000 } else { j as u32 };
            assert_eq!(*seq.get(j).unwrap(), expected);
        }
    }
}

#[test]
fn stack_and_queue_laws() {
    let values: Vec<u32> = (0..50).map(|i| i * 3 % 17).collect();

    let mut stack: Box<dyn Stack<u32>> = Box::new(Sequence::new());
    for &v in &values {
        stack.push(v);
    }
    let popped: Vec<_> = (0..values.len()).map(|_| stack.pop().unwrap()).collect();
    assert_eq!(popped, values.iter().rev().copied().collect::<Vec<_>>());

    let mut queue: Box<dyn Queue<u32>> = Box::new(Sequence::new());
    for &v in &values {
        queue.enqueue(v);
    }
    let drained: Vec<_> = (0..values.len()).map(|_| queue.dequeue().unwrap()).collect();
    assert_eq!(drained, values);
}

#[test]
fn scenarios_a_through_c() {
    let mut seq: Sequence<i32> = Sequence::new();
    seq.append(1);
    seq.append(2);
    seq.append(3);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.to_string(), "{ 1, 2, 3 }");

    seq.insert(0, 25).unwrap();
    assert_eq!(seq.to_string(), "{ 25, 1, 2, 3 }");
    assert_eq!(List::size(&seq), 4);

    assert_eq!(seq.remove(2), Ok(2));
    assert_eq!(seq.to_string(), "{ 25, 1, 3 }");
    assert_eq!(seq.len(), 3);
}

#[test]
fn scenario_d_equal_builds() {
    let build = || {
        let mut seq = Sequence::new();
        for v in [1, 2, 3, 4, 5] {
            seq.append(v);
        }
        seq
    };
    let a = build();
    let mut b = build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a.to_string(), b.to_string());

    b.set(4, 50).unwrap();
    assert_ne!(a, b);

    let mut c = build();
    c.set(0, 10).unwrap();
    assert_ne!(a, c);
}

#[test]
fn errors_name_index_and_length() {
    let seq: Sequence<u32> = (0..3).collect();
    let err = seq.get(5).unwrap_err();
    assert_eq!(err, AlgsError::IndexOutOfRange { index: 5, len: 3 });
    assert_eq!(err.to_string(), "5 is out of bounds; the size of the sequence is: 3");
}
