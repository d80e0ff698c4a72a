//! Scenario tests run against several branching factors
//!
//! Each helper takes the branching factor and is called from one `#[test]`
//! per factor, so a failure names the factor that broke.

use d_ary_heap::{DAryHeap, HeapError};

const FACTORS: [usize; 6] = [2, 3, 4, 5, 8, 16];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test that an empty heap behaves correctly
fn test_empty_heap(d: usize) {
    let mut heap = DAryHeap::<i32>::with_branching_factor(d).unwrap();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.extract_max(), Err(HeapError::HeapUnderflow));
    assert_eq!(
        heap.delete_at(0),
        Err(HeapError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        heap.increase_key(0, 1),
        Err(HeapError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert!(heap.is_heap());
}

/// Test the insert-then-drain scenario
fn test_insert_extract(d: usize) {
    let mut heap = DAryHeap::with_branching_factor(d).unwrap();
    for key in [4, 1, 7, 3, 9, 2] {
        heap.insert(key);
    }
    assert_eq!(heap.len(), 6);

    for expected in [9, 7, 4, 3, 2, 1] {
        assert_eq!(heap.extract_max(), Ok(expected));
        assert!(heap.is_heap());
    }
    assert_eq!(heap.extract_max(), Err(HeapError::HeapUnderflow));
}

/// Test increase_key on every position of a built heap
fn test_increase_every_position(d: usize) {
    let base: Vec<i32> = (0..40).map(|i| (i * 7) % 23).collect();
    for index in 0..base.len() {
        let mut heap = DAryHeap::from_vec(base.clone(), d).unwrap();
        heap.increase_key(index, 1000).unwrap();
        assert!(heap.is_heap());
        assert_eq!(heap.peek(), Some(&1000));
    }
}

/// Test delete_at on every position of a built heap
fn test_delete_every_position(d: usize) {
    let base: Vec<i32> = (0..40).map(|i| (i * 11) % 17).collect();
    for index in 0..base.len() {
        let mut heap = DAryHeap::from_vec(base.clone(), d).unwrap();
        let expected = heap.as_slice()[index];

        assert_eq!(heap.delete_at(index), Ok(expected));
        assert!(heap.is_heap());
        assert_eq!(heap.len(), base.len() - 1);

        let mut rest = heap.into_vec();
        rest.push(expected);
        rest.sort();
        let mut all = base.clone();
        all.sort();
        assert_eq!(rest, all);
    }
}

/// Test that failed operations leave the heap untouched
fn test_failures_do_not_mutate(d: usize) {
    let mut heap = DAryHeap::from_vec(vec![5, 9, 1, 4, 4, 8], d).unwrap();
    let snapshot = heap.as_slice().to_vec();

    let current = heap.as_slice()[2];
    assert_eq!(heap.increase_key(2, current), Err(HeapError::InvalidKeyUpdate));
    assert_eq!(heap.increase_key(2, current - 1), Err(HeapError::InvalidKeyUpdate));
    assert_eq!(
        heap.increase_key(6, 100),
        Err(HeapError::IndexOutOfRange { index: 6, len: 6 })
    );
    assert_eq!(
        heap.delete_at(usize::MAX),
        Err(HeapError::IndexOutOfRange { index: usize::MAX, len: 6 })
    );

    assert_eq!(heap.as_slice(), snapshot.as_slice());
}

/// Test heap_sort with duplicates and already sorted input
fn test_heap_sort_inputs(d: usize) {
    let heap = DAryHeap::<i32>::with_branching_factor(d).unwrap();

    let mut dup = vec![3, 3, 1, 3, 2, 2, 1];
    heap.heap_sort(&mut dup);
    assert_eq!(dup, vec![1, 1, 2, 2, 3, 3, 3]);

    let mut asc: Vec<i32> = (0..50).collect();
    heap.heap_sort(&mut asc);
    assert_eq!(asc, (0..50).collect::<Vec<_>>());

    let mut desc: Vec<i32> = (0..50).rev().collect();
    heap.heap_sort(&mut desc);
    assert_eq!(desc, (0..50).collect::<Vec<_>>());

    let mut words = ["pear", "apple", "fig", "kiwi"];
    DAryHeap::<&str>::with_branching_factor(d)
        .unwrap()
        .heap_sort(&mut words);
    assert_eq!(words, ["apple", "fig", "kiwi", "pear"]);
}

/// Test that the heap keeps working after heap_sort and build
fn test_reuse_after_sort(d: usize) {
    let mut heap = DAryHeap::from_vec(vec![1, 2, 3], d).unwrap();
    let mut other = vec![9, 8, 7, 6, 5, 4];
    heap.heap_sort(&mut other);

    assert_eq!(heap.len(), 3);
    heap.insert(10);
    assert_eq!(heap.extract_max(), Ok(10));
    assert_eq!(heap.extract_max(), Ok(3));

    heap.build(other);
    assert_eq!(heap.len(), 6);
    assert_eq!(heap.extract_max(), Ok(9));
}

#[test]
fn test_empty_heap_all_factors() {
    init_logging();
    for d in FACTORS {
        test_empty_heap(d);
    }
}

#[test]
fn test_insert_extract_all_factors() {
    for d in FACTORS {
        test_insert_extract(d);
    }
}

#[test]
fn test_increase_key_all_factors() {
    for d in FACTORS {
        test_increase_every_position(d);
    }
}

#[test]
fn test_delete_at_all_factors() {
    for d in FACTORS {
        test_delete_every_position(d);
    }
}

#[test]
fn test_failures_all_factors() {
    init_logging();
    for d in FACTORS {
        test_failures_do_not_mutate(d);
    }
}

#[test]
fn test_heap_sort_all_factors() {
    for d in FACTORS {
        test_heap_sort_inputs(d);
    }
}

#[test]
fn test_reuse_all_factors() {
    for d in FACTORS {
        test_reuse_after_sort(d);
    }
}

#[test]
fn test_ternary_increase_key_scenario() {
    let mut heap = DAryHeap::new(5, 3).unwrap();
    heap.build(vec![1, 2, 3, 4, 5]);
    assert!(heap.is_heap());

    heap.increase_key(4, 10).unwrap();
    assert_eq!(heap.as_slice()[0], 10);
    assert!(heap.is_heap());
}

#[test]
fn test_branching_factor_one_rejected() {
    init_logging();
    assert_eq!(
        DAryHeap::<i32>::new(0, 1).unwrap_err(),
        HeapError::InvalidConfiguration { branching_factor: 1 }
    );
    assert!(DAryHeap::<i32>::from_vec(vec![1, 2], 0).is_err());
}

#[test]
fn test_binary_layout_matches_classic_formulas() {
    let heap = DAryHeap::<i32>::with_branching_factor(2).unwrap();
    for i in 0..100 {
        assert_eq!(heap.k_child(1, i), 2 * i + 1);
        assert_eq!(heap.k_child(2, i), 2 * i + 2);
    }
    for i in 1..100 {
        assert_eq!(heap.parent(i), (i - 1) / 2);
    }
}

#[test]
fn test_string_keys() {
    let mut heap = DAryHeap::with_branching_factor(4).unwrap();
    for word in ["delta", "alpha", "echo", "charlie", "bravo"] {
        heap.insert(word.to_string());
    }
    assert_eq!(heap.extract_max().as_deref(), Ok("echo"));
    assert_eq!(heap.extract_max().as_deref(), Ok("delta"));
    let shown = heap.to_string();
    assert!(shown.starts_with("[charlie") && shown.ends_with(']'));
    assert_eq!(shown.matches(", ").count(), 2);
}
